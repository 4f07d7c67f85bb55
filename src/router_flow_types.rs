//! Marker types naming the payment flows a connector can implement.

/// Authorize a payment, capturing immediately or later depending on the
/// capture method.
#[derive(Clone, Copy, Debug)]
pub struct Authorize;

/// Capture a previously authorized payment.
#[derive(Clone, Copy, Debug)]
pub struct Capture;

/// Void a previously authorized payment.
#[derive(Clone, Copy, Debug)]
pub struct Void;

/// Execute a refund against a settled payment.
#[derive(Clone, Copy, Debug)]
pub struct Execute;
