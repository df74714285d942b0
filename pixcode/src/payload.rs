/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Static payment code assembly.
//!
//! Fields are written in the fixed order receiving systems expect:
//! format indicator, merchant account information, category code, currency,
//! amount, country, merchant name, merchant city, additional data, CRC16.

use bytes::Bytes;
use pixcode_core::error::Result;
use pixcode_core::types::PaymentRequest;
use pixcode_tlv::encoder::{Encoder, bytes_to_string, truncate_chars};
use pixcode_tlv::tags::{self, additional_data, merchant_account};
use tracing::{debug, warn};

/// Builds the Merchant Account Information template (tag `26`) content.
///
/// Descriptions longer than 25 characters are cut to their first 25
/// characters. The request itself is left untouched.
///
/// # Errors
/// Returns `FieldOverflow` if the key, description or the template itself
/// does not fit its length prefix, or `NonByteCharacter` for text outside
/// single-byte range.
pub fn merchant_account_information(request: &PaymentRequest) -> Result<Encoder> {
    let description = truncate_chars(request.description(), tags::MAX_DESCRIPTION_LEN);
    if description.len() < request.description().len() {
        warn!(
            max_len = tags::MAX_DESCRIPTION_LEN,
            "description truncated to {description:?}"
        );
    }

    let mut template = Encoder::with_capacity(64);
    template.put_str(merchant_account::GUI, tags::PIX_GUI)?;
    template.put_str(merchant_account::KEY, request.recipient_key())?;
    template.put_str(merchant_account::DESCRIPTION, description)?;
    Ok(template)
}

/// Builds the Additional Data Field template (tag `62`) content.
///
/// # Errors
/// Returns `FieldOverflow` or `NonByteCharacter` if the transaction id
/// cannot be encoded.
pub fn additional_data_field(request: &PaymentRequest) -> Result<Encoder> {
    let mut template = Encoder::with_capacity(32);
    template.put_str(additional_data::TRANSACTION_ID, request.transaction_id())?;
    Ok(template)
}

/// Encodes a payment request as payload bytes, one byte per character.
///
/// Suitable for handing directly to a 2D barcode renderer.
///
/// # Errors
/// Returns the first encoding error met while writing the fields.
pub fn encode_payload(request: &PaymentRequest) -> Result<Bytes> {
    let amount = request.amount().to_string();

    let mut encoder = Encoder::with_capacity(256);
    encoder.put_str(tags::PAYLOAD_FORMAT_INDICATOR, tags::PAYLOAD_FORMAT_VERSION)?;
    encoder.put_template(
        tags::MERCHANT_ACCOUNT_INFORMATION,
        &merchant_account_information(request)?,
    )?;
    encoder.put_str(
        tags::MERCHANT_CATEGORY_CODE,
        tags::DEFAULT_MERCHANT_CATEGORY_CODE,
    )?;
    encoder.put_str(tags::TRANSACTION_CURRENCY, tags::CURRENCY_BRL)?;
    encoder.put_str(tags::TRANSACTION_AMOUNT, &amount)?;
    encoder.put_str(tags::COUNTRY_CODE, tags::COUNTRY_BR)?;
    encoder.put_str(tags::MERCHANT_NAME, request.merchant_name())?;
    encoder.put_str(tags::MERCHANT_CITY, request.merchant_city())?;
    encoder.put_template(tags::ADDITIONAL_DATA_FIELD, &additional_data_field(request)?)?;

    let payload = encoder.finish();
    debug!(
        transaction_id = request.transaction_id(),
        %amount,
        len = payload.len(),
        "payment code encoded"
    );
    Ok(payload)
}

/// Builds the payment code string for a request.
///
/// The result is deterministic for a given request and ends with the CRC16
/// field `6304XXXX`.
///
/// # Errors
/// Returns `FieldOverflow` if a value does not fit its two-digit length
/// prefix, or `NonByteCharacter` for text outside single-byte range.
///
/// # Example
/// ```
/// use pixcode::{Amount, PaymentRequest, build_payload};
///
/// let amount = Amount::from_cents(1000);
/// let request = PaymentRequest::new("test@bank.com", "LOJA TESTE", "SAO PAULO", amount)
///     .with_description("Loja");
/// let payload = build_payload(&request).unwrap();
/// assert!(payload.starts_with("000201"));
/// assert!(payload.ends_with("6304CB7A"));
/// ```
pub fn build_payload(request: &PaymentRequest) -> Result<String> {
    encode_payload(request).map(|payload| bytes_to_string(&payload))
}
