/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the PixCode encoder.
//!
//! Every failure is a construction-time failure: encoding is a pure transform,
//! so there is no partial success and nothing to retry.

use thiserror::Error;

/// Result type alias using [`EncodeError`] as the error type.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that occur while building a payment code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A value does not fit the two-digit length prefix of a TLV field.
    #[error("field value too long for tag {tag:02}: {length} exceeds max {max_length}")]
    FieldOverflow {
        /// The two-digit tag of the field.
        tag: u8,
        /// Actual length of the value in characters.
        length: usize,
        /// Maximum allowed length.
        max_length: usize,
    },

    /// The amount cannot be rendered as a non-negative two-decimal value.
    #[error("invalid amount: {reason}")]
    InvalidAmount {
        /// Description of why the amount is invalid.
        reason: String,
    },

    /// A character cannot be represented as a single byte.
    #[error("character {character:?} at position {position} is outside single-byte range")]
    NonByteCharacter {
        /// The offending character.
        character: char,
        /// Character position within the value being encoded.
        position: usize,
    },
}

impl EncodeError {
    /// Creates an [`EncodeError::InvalidAmount`] with the given reason.
    pub(crate) fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_overflow_display() {
        let err = EncodeError::FieldOverflow {
            tag: 1,
            length: 120,
            max_length: 99,
        };
        assert_eq!(
            err.to_string(),
            "field value too long for tag 01: 120 exceeds max 99"
        );
    }

    #[test]
    fn test_non_byte_character_display() {
        let err = EncodeError::NonByteCharacter {
            character: '€',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "character '€' at position 3 is outside single-byte range"
        );
    }

    #[test]
    fn test_invalid_amount_helper() {
        let err = EncodeError::invalid_amount("negative");
        assert!(matches!(err, EncodeError::InvalidAmount { ref reason } if reason == "negative"));
        assert_eq!(err.to_string(), "invalid amount: negative");
    }
}
