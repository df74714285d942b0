/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # PixCode TLV
//!
//! Tag-length-value encoding and CRC-16 checksum for Pix payment codes.
//!
//! ## Features
//!
//! - **Two-digit TLV fields**: Length overflow is an error, never a silent truncation
//! - **Nested templates**: Sub-fields are encoded and wrapped under an outer tag
//! - **Checksum calculation**: CRC-16/CCITT-FALSE over the payload and CRC header

pub mod checksum;
pub mod encoder;
pub mod tags;

pub use checksum::{calculate_checksum, compute_checksum, crc16_ccitt_false, verify_checksum};
pub use encoder::{Encoder, encode_field};
