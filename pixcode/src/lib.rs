/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # PixCode
//!
//! Static Pix merchant payment code (BR Code) encoder for Rust.
//!
//! A payment code is a single line of text: a fixed sequence of two-digit
//! tag, two-digit length and value fields, closed by a CRC-16 field. The
//! string is meant to be rendered as a QR code by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixcode::prelude::*;
//!
//! let request = PaymentRequest::new(
//!     "test@bank.com",
//!     "LOJA TESTE",
//!     "SAO PAULO",
//!     "10.00".parse::<Amount>()?,
//! )
//! .with_description("Loja");
//!
//! let payload = build_payload(&request)?;
//! assert!(verify_checksum(&payload));
//! # Ok::<(), EncodeError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Request types, field types and error definitions
//! - [`tlv`]: Field encoding, tag table and checksum
//! - [`payload`]: Assembly of the complete payment code

pub mod payload;

pub mod core {
    //! Request types, field types and error definitions.
    pub use pixcode_core::*;
}

pub mod tlv {
    //! Field encoding, tag table and checksum.
    pub use pixcode_tlv::*;
}

pub use payload::{build_payload, encode_payload};
pub use pixcode_core::{Amount, EncodeError, PaymentRequest, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use pixcode_core::{
        Amount, EncodeError, FieldTag, PaymentRequest, Result, TlvField,
        UNSPECIFIED_TRANSACTION_ID,
    };

    // Field encoding and checksum
    pub use pixcode_tlv::{Encoder, compute_checksum, encode_field, verify_checksum};

    // Payload assembly
    pub use crate::payload::{build_payload, encode_payload};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let request = PaymentRequest::new("key", "NAME", "CITY", Amount::ZERO);
        let payload = build_payload(&request).unwrap();
        assert!(verify_checksum(&payload));
        assert_eq!(encode_field(FieldTag::new(58), "BR").unwrap(), "5802BR");
    }

    #[test]
    fn test_payment_request_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaymentRequest>();
        assert_send_sync::<Encoder>();
        assert_send_sync::<EncodeError>();
    }
}
