//! Common utilities shared across examples.

#![allow(dead_code)]

use pixcode::{Amount, EncodeError, PaymentRequest};
use std::env;

/// Default recipient key.
pub const DEFAULT_KEY: &str = "test@bank.com";

/// Default merchant name.
pub const DEFAULT_MERCHANT_NAME: &str = "LOJA TESTE";

/// Default merchant city.
pub const DEFAULT_MERCHANT_CITY: &str = "SAO PAULO";

/// Example configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// Recipient key.
    pub key: String,
    /// Merchant name.
    pub merchant_name: String,
    /// Merchant city.
    pub merchant_city: String,
    /// Amount as text.
    pub amount: String,
    /// Transaction identifier.
    pub transaction_id: String,
    /// Description.
    pub description: String,
}

impl ExampleConfig {
    /// Creates a configuration from `PIX_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            key: env::var("PIX_KEY").unwrap_or_else(|_| DEFAULT_KEY.to_string()),
            merchant_name: env::var("PIX_MERCHANT_NAME")
                .unwrap_or_else(|_| DEFAULT_MERCHANT_NAME.to_string()),
            merchant_city: env::var("PIX_MERCHANT_CITY")
                .unwrap_or_else(|_| DEFAULT_MERCHANT_CITY.to_string()),
            amount: env::var("PIX_AMOUNT").unwrap_or_else(|_| "10.00".to_string()),
            transaction_id: env::var("PIX_TXID").unwrap_or_else(|_| "***".to_string()),
            description: env::var("PIX_DESCRIPTION").unwrap_or_else(|_| "Loja".to_string()),
        }
    }

    /// Builds the payment request described by this configuration.
    pub fn request(&self) -> Result<PaymentRequest, EncodeError> {
        let amount: Amount = self.amount.parse()?;
        Ok(PaymentRequest::new(
            self.key.as_str(),
            self.merchant_name.as_str(),
            self.merchant_city.as_str(),
            amount,
        )
        .with_description(self.description.as_str())
        .with_transaction_id(self.transaction_id.as_str()))
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .try_init();
}
