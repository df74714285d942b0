/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Core types for payment code construction.
//!
//! - [`Amount`]: Non-negative monetary amount with exactly two decimal places
//! - [`PaymentRequest`]: The immutable set of fields a payment code is built from

use crate::error::{EncodeError, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits in an encoded amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Transaction identifier used when the merchant does not supply one.
pub const UNSPECIFIED_TRANSACTION_ID: &str = "***";

/// Transaction amount.
///
/// Amounts are non-negative and always carry exactly two fractional digits.
/// Values with more precision are rounded half away from zero, so `10.005`
/// becomes `10.01` and `10.004` becomes `10.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, AMOUNT_SCALE));

    /// Creates a new amount from a decimal value.
    ///
    /// # Errors
    /// Returns [`EncodeError::InvalidAmount`] if the value is negative or too
    /// large to carry two fractional digits.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(EncodeError::invalid_amount(format!("{value} is negative")));
        }

        let mut rounded =
            value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(AMOUNT_SCALE);
        if rounded.scale() != AMOUNT_SCALE {
            return Err(EncodeError::invalid_amount(format!(
                "{value} cannot be represented with {AMOUNT_SCALE} decimal places"
            )));
        }
        rounded.set_sign_positive(true);

        Ok(Self(rounded))
    }

    /// Creates an amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(cents), AMOUNT_SCALE))
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = EncodeError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = EncodeError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(EncodeError::invalid_amount(format!("{value} is not finite")));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| EncodeError::invalid_amount(format!("{value} is out of range")))?;
        Self::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| EncodeError::invalid_amount(format!("'{s}': {e}")))?;
        Self::new(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields a static payment code is built from.
///
/// A request is immutable once built. Encoding never modifies it; the
/// description cap, for instance, is applied to a copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Recipient key (e-mail, phone, tax id or random key).
    recipient_key: String,
    /// Free-text description shown to the payer.
    #[serde(default)]
    description: String,
    /// Merchant name.
    merchant_name: String,
    /// Merchant city.
    merchant_city: String,
    /// Transaction identifier.
    #[serde(default = "default_transaction_id")]
    transaction_id: String,
    /// Transaction amount.
    amount: Amount,
}

fn default_transaction_id() -> String {
    UNSPECIFIED_TRANSACTION_ID.to_string()
}

impl PaymentRequest {
    /// Creates a new payment request with required fields.
    ///
    /// The description starts empty and the transaction identifier defaults
    /// to [`UNSPECIFIED_TRANSACTION_ID`].
    ///
    /// # Arguments
    /// * `recipient_key` - The recipient's key
    /// * `merchant_name` - The merchant name
    /// * `merchant_city` - The merchant city
    /// * `amount` - The transaction amount
    #[must_use]
    pub fn new(
        recipient_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            recipient_key: recipient_key.into(),
            description: String::new(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            transaction_id: default_transaction_id(),
            amount,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the transaction identifier.
    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    /// Sets the amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }

    /// Returns the recipient key.
    #[inline]
    #[must_use]
    pub fn recipient_key(&self) -> &str {
        &self.recipient_key
    }

    /// Returns the description as supplied.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the merchant name.
    #[inline]
    #[must_use]
    pub fn merchant_name(&self) -> &str {
        &self.merchant_name
    }

    /// Returns the merchant city.
    #[inline]
    #[must_use]
    pub fn merchant_city(&self) -> &str {
        &self.merchant_city
    }

    /// Returns the transaction identifier.
    #[inline]
    #[must_use]
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }
}
