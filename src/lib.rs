//! Client adapter for the FlexPay payment gateway.
//!
//! Translates the generic payment operations — purchase, authorize, capture,
//! refund, void, verify — into FlexPay's REST/JSON protocol and normalizes
//! FlexPay's responses into a uniform result: approved or declined, the
//! gateway's message, the transaction handle for follow-up operations,
//! AVS/CVV outcomes, and a gateway-independent classification of decline
//! codes.
//!
//! The adapter performs no I/O of its own. Callers inject a
//! [`services::Transport`] implementation; each operation builds exactly one
//! request for it and interprets whatever comes back. Declines are values,
//! not errors — only transport faults the adapter cannot interpret and
//! structurally broken gateway responses surface as `Err`.
//!
//! ```no_run
//! use flexpay::{
//!     errors::{ConnectorError, CustomResult},
//!     gateway::{FlexpayGateway, PaymentGateway, PaymentOptions},
//!     masking::Secret,
//!     payment_method_data::Card,
//!     types::MinorUnit,
//! };
//!
//! # fn run(transport: impl flexpay::services::Transport) -> CustomResult<(), ConnectorError> {
//! let gateway = FlexpayGateway::new(Secret::new("api_key".to_string()), true, transport);
//! let card = Card {
//!     card_number: "4920201996449560".parse().expect("valid test card"),
//!     card_exp_month: Secret::new("9".to_string()),
//!     card_exp_year: Secret::new("2027".to_string()),
//!     card_cvc: Secret::new("879".to_string()),
//!     card_holder_name: Some(Secret::new("Longbob Longsen".to_string())),
//! };
//! let result = gateway.purchase(MinorUnit::new(100), card, PaymentOptions::default())?;
//! if result.success {
//!     println!("charged, authorization {:?}", result.authorization);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod configs;
pub mod connectors;
pub mod consts;
pub mod errors;
pub mod gateway;
pub mod masking;
pub mod payment_method_data;
pub mod request;
pub mod router_data;
pub mod router_flow_types;
pub mod router_request_types;
pub mod router_response_types;
pub mod services;
pub mod types;
mod utils;

pub use connectors::Flexpay;
pub use gateway::{FlexpayGateway, PaymentGateway, PaymentOptions};
pub use router_response_types::{PaymentsResponseData, StandardErrorCode};
