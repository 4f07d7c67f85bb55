//! Flow-specific request data.

use crate::{
    payment_method_data::PaymentMethodData,
    types::{Currency, Email, MinorUnit},
};

/// When a payment should be captured.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CaptureMethod {
    /// Capture in the same call as the authorization (a charge).
    #[default]
    Automatic,
    /// Authorize now, capture later through a separate call.
    Manual,
}

/// Data for the authorize flow. Covers both charge (automatic capture) and
/// plain authorization (manual capture).
#[derive(Clone, Debug)]
pub struct PaymentsAuthorizeData {
    /// The instrument being charged.
    pub payment_method_data: PaymentMethodData,
    /// Amount in minor units.
    pub minor_amount: MinorUnit,
    /// Currency of the amount.
    pub currency: Currency,
    /// Capture behavior requested by the caller.
    pub capture_method: Option<CaptureMethod>,
    /// Customer email. When present it is attached to the payment method
    /// instead of a customer id.
    pub email: Option<Email>,
    /// Merchant-scoped customer identifier.
    pub customer_id: Option<String>,
    /// Merchant order identifier.
    pub order_id: Option<String>,
    /// Which retry of this payment this call is. `0` for the first attempt.
    pub retry_count: u32,
    /// Opaque gateway-supplied blob echoed back when retrying a declined
    /// payment.
    pub reference_data: Option<String>,
}

/// Data for the capture flow.
#[derive(Clone, Debug)]
pub struct PaymentsCaptureData {
    /// Amount to capture, in minor units. May be less than the authorized
    /// amount.
    pub minor_amount_to_capture: MinorUnit,
    /// Currency of the amount.
    pub currency: Currency,
    /// The gateway transaction id returned by the original authorization.
    pub connector_transaction_id: String,
}

/// Data for the void flow.
#[derive(Clone, Debug)]
pub struct PaymentsCancelData {
    /// The gateway transaction id returned by the original authorization.
    pub connector_transaction_id: String,
}

/// Data for the refund flow.
#[derive(Clone, Debug)]
pub struct RefundsData {
    /// Amount to refund, in minor units. May be less than the captured
    /// amount.
    pub minor_refund_amount: MinorUnit,
    /// Currency of the amount.
    pub currency: Currency,
    /// The gateway transaction id returned by the original payment.
    pub connector_transaction_id: String,
}
