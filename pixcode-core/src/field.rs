/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Field types for TLV-encoded payment codes.
//!
//! This module provides:
//! - [`FieldTag`]: Two-digit tag identifier
//! - [`TlvField`]: An owned tag-length-value field with a validated length

use crate::error::{EncodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum value length representable by the two-digit length prefix.
pub const MAX_VALUE_LEN: usize = 99;

/// Two-digit TLV tag identifier (`00`..`99`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u8);

impl FieldTag {
    /// Creates a new field tag.
    ///
    /// # Panics
    /// Panics if `tag` does not fit in two decimal digits. Tags are protocol
    /// constants, so this is evaluated at compile time for `const` items.
    #[inline]
    #[must_use]
    pub const fn new(tag: u8) -> Self {
        assert!(tag < 100, "field tag must fit in two digits");
        Self(tag)
    }

    /// Creates a field tag, returning `None` if it does not fit in two digits.
    #[inline]
    #[must_use]
    pub const fn checked(tag: u8) -> Option<Self> {
        if tag < 100 { Some(Self(tag)) } else { None }
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the tag as its two ASCII digits.
    #[inline]
    #[must_use]
    pub const fn to_digits(self) -> [u8; 2] {
        two_digits(self.0)
    }
}

impl From<FieldTag> for u8 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Renders a value below 100 as two zero-padded ASCII digits.
#[inline]
#[must_use]
pub const fn two_digits(value: u8) -> [u8; 2] {
    [b'0' + value / 10, b'0' + value % 10]
}

/// Checks that a value of `length` characters fits under `tag`.
///
/// # Errors
/// Returns [`EncodeError::FieldOverflow`] if `length` exceeds [`MAX_VALUE_LEN`].
#[inline]
pub fn check_length(tag: FieldTag, length: usize) -> Result<u8> {
    if length > MAX_VALUE_LEN {
        return Err(EncodeError::FieldOverflow {
            tag: tag.0,
            length,
            max_length: MAX_VALUE_LEN,
        });
    }
    // Bounded by MAX_VALUE_LEN above.
    Ok(length as u8)
}

/// An owned tag-length-value field.
///
/// The length is derived from the value and always fits the two-digit
/// prefix; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TlvField {
    tag: FieldTag,
    value: String,
}

impl TlvField {
    /// Creates a new field.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The field value
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldOverflow`] if the value is longer than
    /// 99 characters.
    pub fn new(tag: FieldTag, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        check_length(tag, value.chars().count())?;
        Ok(Self { tag, value })
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> FieldTag {
        self.tag
    }

    /// Returns the field value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value length in characters.
    #[inline]
    #[must_use]
    pub fn length(&self) -> u8 {
        // Validated in `new`.
        self.value.chars().count() as u8
    }

    /// Returns the length of the encoded field in characters.
    #[inline]
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        4 + usize::from(self.length())
    }

    /// Consumes the field and returns its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for TlvField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}{}", self.tag, self.length(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag_display() {
        assert_eq!(FieldTag::new(0).to_string(), "00");
        assert_eq!(FieldTag::new(5).to_string(), "05");
        assert_eq!(FieldTag::new(63).to_string(), "63");
        assert_eq!(FieldTag::new(26).to_digits(), *b"26");
    }

    #[test]
    fn test_field_tag_checked() {
        assert_eq!(FieldTag::checked(99).map(u8::from), Some(99));
        assert_eq!(FieldTag::checked(100), None);
    }

    #[test]
    #[should_panic(expected = "field tag must fit in two digits")]
    fn test_field_tag_new_out_of_range() {
        let _ = FieldTag::new(100);
    }

    #[test]
    fn test_tlv_field_display() {
        let field = TlvField::new(FieldTag::new(59), "LOJA TESTE").unwrap();
        assert_eq!(field.length(), 10);
        assert_eq!(field.encoded_len(), 14);
        assert_eq!(field.to_string(), "5910LOJA TESTE");
    }

    #[test]
    fn test_tlv_field_into_value() {
        let field = TlvField::new(FieldTag::new(60), "SAO PAULO").unwrap();
        assert_eq!(field.tag(), FieldTag::new(60));
        assert_eq!(field.value(), "SAO PAULO");
        assert_eq!(field.into_value(), "SAO PAULO");
    }

    #[test]
    fn test_tlv_field_empty_value() {
        let field = TlvField::new(FieldTag::new(2), "").unwrap();
        assert_eq!(field.to_string(), "0200");
    }

    #[test]
    fn test_tlv_field_boundary() {
        let max = "x".repeat(MAX_VALUE_LEN);
        let field = TlvField::new(FieldTag::new(1), max.clone()).unwrap();
        assert_eq!(field.to_string(), format!("0199{max}"));

        let err = TlvField::new(FieldTag::new(1), "x".repeat(100)).unwrap_err();
        assert_eq!(
            err,
            EncodeError::FieldOverflow {
                tag: 1,
                length: 100,
                max_length: 99,
            }
        );
    }

    #[test]
    fn test_tlv_field_counts_characters() {
        let field = TlvField::new(FieldTag::new(59), "JOÃO").unwrap();
        assert_eq!(field.length(), 4);
        assert_eq!(field.to_string(), "5904JOÃO");
    }

    #[test]
    fn test_two_digits() {
        assert_eq!(two_digits(0), *b"00");
        assert_eq!(two_digits(7), *b"07");
        assert_eq!(two_digits(42), *b"42");
        assert_eq!(two_digits(99), *b"99");
    }
}
