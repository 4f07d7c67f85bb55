//! Normalized connector responses.

use serde::{Deserialize, Serialize};

/// The uniform result every flow resolves to, whatever the gateway answered.
///
/// Declines and validation failures are not errors: they come back as
/// `success == false` with the gateway's message and, when the gateway's
/// code is a known one, a [`StandardErrorCode`] classification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentsResponseData {
    /// Whether the gateway approved the operation.
    pub success: bool,
    /// The gateway's human-readable message, verbatim.
    pub message: Option<String>,
    /// The gateway transaction id, used as the reference for follow-up
    /// capture, refund and void calls. Absent when the gateway failed before
    /// creating a transaction record.
    pub authorization: Option<String>,
    /// Address-verification outcome code reported by the card network.
    pub avs_result: Option<String>,
    /// Card-verification-value outcome code reported by the card network.
    pub cvv_result: Option<String>,
    /// Classification of the gateway's decline code, when it maps onto the
    /// shared vocabulary. `None` both on success and for unmapped codes.
    pub error_code: Option<StandardErrorCode>,
    /// The raw response body, kept verbatim for diagnostics.
    pub raw: String,
    /// Whether the call ran against the test environment.
    pub test: bool,
}

impl PaymentsResponseData {
    /// Result used when the gateway rejects a request outright (bad
    /// credentials, unsupported method) before processing it.
    pub fn from_transport_rejection(message: &str, test_mode: Option<bool>) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            test: test_mode.unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Gateway-independent decline and validation reasons.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StandardErrorCode {
    /// The issuer asks the merchant to call before retrying.
    CallIssuer,
    /// Generic decline by the issuer.
    CardDeclined,
    /// The card should be retained; it may be lost or stolen.
    PickupCard,
    /// The account number is not valid.
    IncorrectNumber,
    /// The processor rejected the request itself (bad amount, unknown
    /// transaction).
    ProcessingError,
    /// The card has expired.
    ExpiredCard,
    /// The verification code does not match.
    InvalidCvc,
    /// The expiry date is missing or not a valid month/year.
    InvalidExpiryDate,
}
