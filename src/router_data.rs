//! Flow-generic carrier for a single connector call.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::masking::Secret;

/// Everything a connector needs to build one request and interpret its
/// response. `Flow` is a marker type naming the operation; `Request` and
/// `Response` are the flow-specific payloads.
#[derive(Clone, Debug)]
pub struct RouterData<Flow, Request, Response> {
    /// Marker for the flow this data belongs to.
    pub flow: PhantomData<Flow>,
    /// Credentials for the connector.
    pub connector_auth_type: ConnectorAuthType,
    /// Billing and shipping addresses attached to the payment.
    pub address: PaymentAddress,
    /// Flow-specific data required to construct the request.
    pub request: Request,
    /// Flow-specific data the connector responds with.
    pub response: Result<Response, ErrorResponse>,
    /// Reference id sent to the connector for this call, freshly generated
    /// per attempt.
    pub connector_request_reference_id: String,
    /// Whether the call runs against the gateway's test environment.
    pub test_mode: Option<bool>,
    /// HTTP status code of the connector response, once one arrived.
    pub connector_http_status_code: Option<u16>,
}

/// Credential material for a connector, in the shape the connector's auth
/// scheme expects.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConnectorAuthType {
    /// A single key carried in a request header.
    HeaderKey {
        /// The key value.
        api_key: Secret<String>,
    },
    /// No credentials configured.
    #[default]
    NoKey,
}

/// Error details produced when a connector call does not yield a usable
/// response. Also used as the pre-call placeholder inside
/// [`RouterData::response`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorResponse {
    /// Connector-assigned error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Further detail, when the connector provides any.
    pub reason: Option<String>,
    /// HTTP status code the error surfaced with.
    pub status_code: u16,
}

impl Default for ErrorResponse {
    fn default() -> Self {
        Self {
            code: "HE_00".to_string(),
            message: "Something went wrong".to_string(),
            reason: None,
            status_code: 500,
        }
    }
}

/// Billing and shipping addresses for a payment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentAddress {
    /// Billing address.
    pub billing: Option<AddressDetails>,
    /// Shipping address.
    pub shipping: Option<AddressDetails>,
}

impl PaymentAddress {
    /// The billing address, if one was supplied.
    pub fn get_optional_billing(&self) -> Option<&AddressDetails> {
        self.billing.as_ref()
    }

    /// The shipping address, if one was supplied.
    pub fn get_optional_shipping(&self) -> Option<&AddressDetails> {
        self.shipping.as_ref()
    }
}

/// A structured postal address. Street lines, postal code and state are PII.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressDetails {
    /// First street line.
    pub line1: Option<Secret<String>>,
    /// Second street line.
    pub line2: Option<Secret<String>>,
    /// Postal or zip code.
    pub zip: Option<Secret<String>>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<Secret<String>>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}
