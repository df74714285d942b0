/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tag table and fixed values of the static Pix payment code.
//!
//! Top-level tags appear in the payload in declaration order. Nested tags are
//! scoped to their enclosing template.

use pixcode_core::FieldTag;

/// Payload Format Indicator.
pub const PAYLOAD_FORMAT_INDICATOR: FieldTag = FieldTag::new(0);
/// Merchant Account Information template.
pub const MERCHANT_ACCOUNT_INFORMATION: FieldTag = FieldTag::new(26);
/// Merchant Category Code.
pub const MERCHANT_CATEGORY_CODE: FieldTag = FieldTag::new(52);
/// Transaction Currency.
pub const TRANSACTION_CURRENCY: FieldTag = FieldTag::new(53);
/// Transaction Amount.
pub const TRANSACTION_AMOUNT: FieldTag = FieldTag::new(54);
/// Country Code.
pub const COUNTRY_CODE: FieldTag = FieldTag::new(58);
/// Merchant Name.
pub const MERCHANT_NAME: FieldTag = FieldTag::new(59);
/// Merchant City.
pub const MERCHANT_CITY: FieldTag = FieldTag::new(60);
/// Additional Data Field template.
pub const ADDITIONAL_DATA_FIELD: FieldTag = FieldTag::new(62);
/// CRC16.
pub const CRC16: FieldTag = FieldTag::new(63);

/// Tags nested under [`MERCHANT_ACCOUNT_INFORMATION`].
pub mod merchant_account {
    use pixcode_core::FieldTag;

    /// Globally unique identifier of the payment arrangement.
    pub const GUI: FieldTag = FieldTag::new(0);
    /// Recipient key.
    pub const KEY: FieldTag = FieldTag::new(1);
    /// Free-text description.
    pub const DESCRIPTION: FieldTag = FieldTag::new(2);
}

/// Tags nested under [`ADDITIONAL_DATA_FIELD`].
pub mod additional_data {
    use pixcode_core::FieldTag;

    /// Reference label (transaction identifier).
    pub const TRANSACTION_ID: FieldTag = FieldTag::new(5);
}

/// Payload format version.
pub const PAYLOAD_FORMAT_VERSION: &str = "01";
/// Identifier of the Pix arrangement.
pub const PIX_GUI: &str = "br.gov.bcb.pix";
/// Merchant category code for unspecified merchants.
pub const DEFAULT_MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";
/// ISO 3166-1 alpha-2 code for Brazil.
pub const COUNTRY_BR: &str = "BR";
/// Length of the CRC16 value in characters.
pub const CRC16_LEN: u8 = 4;
/// Maximum description length; longer descriptions are truncated.
pub const MAX_DESCRIPTION_LEN: usize = 25;

/// Header of the CRC16 field (tag and length), covered by the checksum itself.
pub const CRC16_HEADER: [u8; 4] = {
    let tag = CRC16.to_digits();
    let len = pixcode_core::field::two_digits(CRC16_LEN);
    [tag[0], tag[1], len[0], len[1]]
};
