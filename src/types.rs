//! Shared domain types: amounts, currencies, the raw transport response, and
//! the router-data aliases used by the connector flows.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConnectorError, CustomResult},
    masking,
    router_data::RouterData,
    router_flow_types::{Authorize, Capture, Execute, Void},
    router_request_types::{
        PaymentsAuthorizeData, PaymentsCancelData, PaymentsCaptureData, RefundsData,
    },
    router_response_types::PaymentsResponseData,
};

/// An amount in the minor unit of its currency (cents for USD).
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Creates a new minor-unit amount.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The amount as an `i64`.
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minor-unit amount in the string representation some gateways expect
/// (`100` minor units serialize as `"100"`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    /// Creates a new string minor-unit amount.
    pub fn new(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Converts amounts from [`MinorUnit`] to the representation a connector
/// accepts.
pub trait AmountConvertor: Send {
    /// The representation the connector accepts.
    type Output;

    /// Convert the given minor-unit amount.
    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> CustomResult<Self::Output, ConnectorError>;
}

/// Converter for connectors that take minor units as strings.
#[derive(Clone, Copy, Debug)]
pub struct StringMinorUnitForConnector;

impl AmountConvertor for StringMinorUnitForConnector {
    type Output = StringMinorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        _currency: Currency,
    ) -> CustomResult<Self::Output, ConnectorError> {
        Ok(StringMinorUnit::new(amount.get_amount_as_i64()))
    }
}

/// ISO 4217 currency codes accepted by this adapter.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[allow(missing_docs)]
pub enum Currency {
    AUD,
    CAD,
    EUR,
    GBP,
    INR,
    JPY,
    NZD,
    #[default]
    USD,
}

/// An email address. Masked in `Debug` output, exposed on serialization.
pub type Email = masking::Secret<String, masking::EmailStrategy>;

/// Raw response handed back by the transport collaborator.
#[derive(Clone, Debug)]
pub struct Response {
    /// Raw body bytes.
    pub response: bytes::Bytes,
    /// HTTP status code.
    pub status_code: u16,
}

/// Carrier pairing a deserialized connector response with the router data the
/// request was built from.
#[allow(missing_docs)]
pub struct ResponseRouterData<Flow, R, Request, Response> {
    pub response: R,
    pub data: RouterData<Flow, Request, Response>,
    pub http_code: u16,
}

/// Router data for the authorize flow (covers both charge and authorize).
pub type PaymentsAuthorizeRouterData =
    RouterData<Authorize, PaymentsAuthorizeData, PaymentsResponseData>;
/// Router data for the capture flow.
pub type PaymentsCaptureRouterData = RouterData<Capture, PaymentsCaptureData, PaymentsResponseData>;
/// Router data for the void flow.
pub type PaymentsCancelRouterData = RouterData<Void, PaymentsCancelData, PaymentsResponseData>;
/// Router data for the refund flow.
pub type RefundsRouterData = RouterData<Execute, RefundsData, PaymentsResponseData>;
