/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! TLV field encoder.
//!
//! This module provides an encoder for building payment codes as a sequence
//! of `tag + length + value` fields, where both tag and length are two
//! zero-padded decimal digits.

use crate::checksum::{calculate_checksum, format_checksum, to_single_bytes};
use crate::tags::CRC16_HEADER;
use bytes::{BufMut, Bytes, BytesMut};
use pixcode_core::error::Result;
use pixcode_core::field::{FieldTag, TlvField, check_length, two_digits};

/// Encodes a single field as `tag + zero-padded length + value`.
///
/// # Errors
/// Returns [`pixcode_core::EncodeError::FieldOverflow`] if the value is longer
/// than 99 characters. Values are never truncated here.
///
/// # Example
/// ```
/// use pixcode_core::FieldTag;
/// use pixcode_tlv::encode_field;
///
/// assert_eq!(encode_field(FieldTag::new(59), "LOJA").unwrap(), "5904LOJA");
/// ```
pub fn encode_field(tag: FieldTag, value: &str) -> Result<String> {
    Ok(TlvField::new(tag, value)?.to_string())
}

/// Returns at most the first `max_chars` characters of `value`.
#[must_use]
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// TLV payload encoder.
///
/// The encoder appends fields in call order. Nested templates are built with
/// a separate encoder and wrapped with [`Encoder::put_template`]. Every
/// character is stored as one byte, so lengths and checksum agree with what
/// receiving systems compute.
#[derive(Debug, Clone)]
pub struct Encoder {
    /// Encoded fields, one byte per character.
    buf: BytesMut,
}

impl Encoder {
    /// Creates a new, empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    /// Creates a new encoder with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Appends a field with a string value.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The field value
    ///
    /// # Errors
    /// Returns `NonByteCharacter` if the value holds a character above
    /// U+00FF, or `FieldOverflow` if it is longer than 99 characters.
    pub fn put_str(&mut self, tag: FieldTag, value: &str) -> Result<()> {
        let bytes = to_single_bytes(value)?;
        self.put_raw(tag, &bytes)
    }

    /// Appends a pre-built field.
    ///
    /// # Errors
    /// Returns `NonByteCharacter` if the value holds a character above U+00FF.
    pub fn put_field(&mut self, field: &TlvField) -> Result<()> {
        self.put_str(field.tag(), field.value())
    }

    /// Appends a field whose value is the content of a nested encoder.
    ///
    /// # Errors
    /// Returns `FieldOverflow` if the nested content is longer than 99 bytes.
    pub fn put_template(&mut self, tag: FieldTag, inner: &Encoder) -> Result<()> {
        self.put_raw(tag, &inner.buf)
    }

    /// Appends a field with a value already in single-byte form.
    ///
    /// # Errors
    /// Returns `FieldOverflow` if the value is longer than 99 bytes.
    #[inline]
    pub fn put_raw(&mut self, tag: FieldTag, value: &[u8]) -> Result<()> {
        let len = check_length(tag, value.len())?;

        self.buf.reserve(4 + value.len());
        self.buf.put_slice(&tag.to_digits());
        self.buf.put_slice(&two_digits(len));
        self.buf.put_slice(value);
        Ok(())
    }

    /// Returns the checksum the payload would carry if finished now.
    #[inline]
    #[must_use]
    pub fn checksum(&self) -> u16 {
        calculate_checksum(&self.buf)
    }

    /// Finalizes the payload and returns the complete encoded bytes.
    ///
    /// Appends the CRC16 field: `6304` followed by the four hex digits of
    /// the checksum over everything before them.
    #[must_use]
    pub fn finish(mut self) -> Bytes {
        let checksum = format_checksum(self.checksum());

        self.buf.reserve(CRC16_HEADER.len() + checksum.len());
        self.buf.put_slice(&CRC16_HEADER);
        self.buf.put_slice(&checksum);

        self.buf.freeze()
    }

    /// Returns the encoded bytes so far.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the current encoded length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no field has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the encoder for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts single-byte payload bytes back to text.
#[must_use]
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::verify_checksum;
    use pixcode_core::EncodeError;

    #[test]
    fn test_encode_field() {
        assert_eq!(encode_field(FieldTag::new(0), "01").unwrap(), "000201");
        assert_eq!(encode_field(FieldTag::new(53), "986").unwrap(), "5303986");
        assert_eq!(encode_field(FieldTag::new(2), "").unwrap(), "0200");
    }

    #[test]
    fn test_encode_field_overflow() {
        let err = encode_field(FieldTag::new(1), &"k".repeat(100)).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::FieldOverflow {
                tag: 1,
                length: 100,
                max_length: 99
            }
        ));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("ÇÃÕab", 2), "ÇÃ");
    }

    #[test]
    fn test_encoder_basic() {
        let mut encoder = Encoder::new();
        encoder.put_str(FieldTag::new(0), "01").unwrap();
        encoder.put_str(FieldTag::new(58), "BR").unwrap();

        assert_eq!(encoder.as_bytes(), b"0002015802BR");
        assert_eq!(encoder.len(), 12);
    }

    #[test]
    fn test_encoder_template() {
        let mut inner = Encoder::new();
        inner.put_str(FieldTag::new(5), "***").unwrap();

        let mut outer = Encoder::new();
        outer.put_template(FieldTag::new(62), &inner).unwrap();

        assert_eq!(outer.as_bytes(), b"62070503***");
    }

    #[test]
    fn test_encoder_template_overflow() {
        let mut inner = Encoder::new();
        inner.put_str(FieldTag::new(1), &"k".repeat(60)).unwrap();
        inner.put_str(FieldTag::new(2), &"d".repeat(40)).unwrap();

        let mut outer = Encoder::new();
        let err = outer.put_template(FieldTag::new(26), &inner).unwrap_err();
        assert_eq!(
            err,
            EncodeError::FieldOverflow {
                tag: 26,
                length: 108,
                max_length: 99,
            }
        );
        assert!(outer.is_empty());
    }

    #[test]
    fn test_encoder_rejects_multibyte() {
        let mut encoder = Encoder::new();
        let err = encoder.put_str(FieldTag::new(59), "CAFÉ ☕").unwrap_err();
        assert!(matches!(
            err,
            EncodeError::NonByteCharacter {
                character: '☕',
                position: 5
            }
        ));
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_encoder_latin1_length() {
        let mut encoder = Encoder::new();
        encoder.put_str(FieldTag::new(60), "SÃO PAULO").unwrap();
        assert_eq!(&encoder.as_bytes()[..4], b"6009");
        assert_eq!(encoder.len(), 13);
    }

    #[test]
    fn test_encoder_put_field() {
        let field = TlvField::new(FieldTag::new(52), "0000").unwrap();
        let mut encoder = Encoder::new();
        encoder.put_field(&field).unwrap();
        assert_eq!(encoder.as_bytes(), field.to_string().as_bytes());
    }

    #[test]
    fn test_encoder_finish() {
        let mut encoder = Encoder::new();
        encoder.put_str(FieldTag::new(0), "01").unwrap();
        let checksum = format_checksum(encoder.checksum());

        let message = encoder.finish();
        let text = bytes_to_string(&message);

        assert!(text.starts_with("0002016304"));
        assert_eq!(&message[10..], checksum);
        assert!(verify_checksum(&text));
    }

    #[test]
    fn test_encoder_clear() {
        let mut encoder = Encoder::new();
        encoder.put_str(FieldTag::new(0), "01").unwrap();
        assert!(!encoder.is_empty());

        encoder.clear();
        assert_eq!(encoder.len(), 0);
    }

    #[test]
    fn test_bytes_to_string() {
        assert_eq!(bytes_to_string(b"5802BR"), "5802BR");
        assert_eq!(bytes_to_string(&[0xC3]), "Ã");
    }
}
