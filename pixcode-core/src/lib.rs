/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # PixCode Core
//!
//! Core types and error definitions for the PixCode payment code encoder.
//!
//! This crate provides the building blocks shared by the other PixCode crates:
//! - **Error types**: [`EncodeError`] with `thiserror`
//! - **Field types**: [`FieldTag`] and [`TlvField`]
//! - **Request types**: [`Amount`] and [`PaymentRequest`]

pub mod error;
pub mod field;
pub mod types;

pub use error::{EncodeError, Result};
pub use field::{FieldTag, MAX_VALUE_LEN, TlvField};
pub use types::{Amount, PaymentRequest, UNSPECIFIED_TRANSACTION_ID};
