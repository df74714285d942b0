/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Payment code checksum calculation.
//!
//! The checksum is CRC-16/CCITT-FALSE (polynomial `0x1021`, initial value
//! `0xFFFF`, MSB first, no final XOR) over the payload followed by the CRC
//! field header `6304`. It covers its own tag and length but not its value.

use crate::tags::{CRC16_HEADER, CRC16_LEN};
use pixcode_core::error::{EncodeError, Result};

/// CRC-16/CCITT polynomial.
pub const CRC16_POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
pub const CRC16_INIT: u16 = 0xFFFF;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Calculates the CRC-16/CCITT-FALSE of the given bytes.
///
/// # Example
/// ```
/// use pixcode_tlv::checksum::crc16_ccitt_false;
///
/// assert_eq!(crc16_ccitt_false(b"123456789"), 0x29B1);
/// ```
#[inline]
#[must_use]
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    update(CRC16_INIT, data)
}

/// Feeds `data` into a running CRC register.
#[inline]
#[must_use]
pub fn update(mut crc: u16, data: &[u8]) -> u16 {
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Calculates the checksum of a payload that does not yet carry the CRC field.
///
/// The CRC field header is appended before computing.
#[inline]
#[must_use]
pub fn calculate_checksum(payload: &[u8]) -> u16 {
    update(update(CRC16_INIT, payload), &CRC16_HEADER)
}

/// Formats a checksum as four upper-case, zero-padded hex digits.
#[inline]
#[must_use]
pub fn format_checksum(checksum: u16) -> [u8; 4] {
    let [hi, lo] = checksum.to_be_bytes();
    [
        HEX_DIGITS[usize::from(hi >> 4)],
        HEX_DIGITS[usize::from(hi & 0x0F)],
        HEX_DIGITS[usize::from(lo >> 4)],
        HEX_DIGITS[usize::from(lo & 0x0F)],
    ]
}

/// Parses four hex digits to a checksum value.
///
/// # Returns
/// `Some(checksum)` if valid, `None` otherwise.
#[inline]
#[must_use]
pub fn parse_checksum(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != usize::from(CRC16_LEN) {
        return None;
    }
    bytes.iter().try_fold(0u16, |acc, &b| {
        let digit = (b as char).to_digit(16)?;
        // A hex digit is below 16.
        Some((acc << 4) | digit as u16)
    })
}

/// Converts text to single-byte characters.
///
/// # Errors
/// Returns [`EncodeError::NonByteCharacter`] for any character above U+00FF.
pub fn to_single_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character).map_err(|_| EncodeError::NonByteCharacter {
                character,
                position,
            })
        })
        .collect()
}

/// Computes the checksum digits for a payload without its CRC field.
///
/// # Errors
/// Returns [`EncodeError::NonByteCharacter`] if the payload contains a
/// character that does not fit in one byte.
///
/// # Example
/// ```
/// use pixcode_tlv::compute_checksum;
///
/// assert_eq!(compute_checksum("000201").unwrap().len(), 4);
/// ```
pub fn compute_checksum(payload: &str) -> Result<String> {
    let bytes = to_single_bytes(payload)?;
    let digits = format_checksum(calculate_checksum(&bytes));
    Ok(digits.iter().map(|&b| b as char).collect())
}

/// Verifies the trailing CRC field of a complete payload.
///
/// Returns `true` if the payload ends with `6304` followed by four hex digits
/// that match the checksum of everything before them.
#[must_use]
pub fn verify_checksum(payload: &str) -> bool {
    let Ok(bytes) = to_single_bytes(payload) else {
        return false;
    };
    let Some(split) = bytes
        .len()
        .checked_sub(CRC16_HEADER.len() + usize::from(CRC16_LEN))
    else {
        return false;
    };
    let (body, field) = bytes.split_at(split);
    let (header, digits) = field.split_at(CRC16_HEADER.len());
    if header != CRC16_HEADER {
        return false;
    }
    parse_checksum(digits) == Some(calculate_checksum(body))
}
