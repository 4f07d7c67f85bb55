//! The caller-facing surface: a narrow capability interface over the
//! connector plus the synchronous client driving it.

use std::marker::PhantomData;

use error_stack::report;

use crate::{
    api::{BoxedConnectorIntegration, ConnectorIntegrationAny},
    configs::{ConnectorParams, Connectors},
    connectors::Flexpay,
    consts,
    errors::{ConnectorError, CustomResult},
    masking::Secret,
    payment_method_data::{Card, PaymentMethodData},
    router_data::{AddressDetails, ConnectorAuthType, ErrorResponse, PaymentAddress, RouterData},
    router_flow_types::{Authorize, Capture, Execute, Void},
    router_request_types::{
        CaptureMethod, PaymentsAuthorizeData, PaymentsCancelData, PaymentsCaptureData, RefundsData,
    },
    router_response_types::PaymentsResponseData,
    services::{self, Transport},
    types::{Currency, Email, MinorUnit},
    utils,
};

/// Amount authorized (and immediately voided) by [`PaymentGateway::verify`]:
/// 100 minor units.
const VERIFICATION_AMOUNT: MinorUnit = MinorUnit::new(100);

/// Caller-supplied options accompanying a payment operation.
#[derive(Clone, Debug, Default)]
pub struct PaymentOptions {
    /// Currency of the amount. Defaults to USD.
    pub currency: Option<Currency>,
    /// Merchant order identifier. Defaults to the generated merchant
    /// transaction id.
    pub order_id: Option<String>,
    /// Customer email, attached to the payment method when present.
    pub email: Option<Email>,
    /// Merchant-scoped customer identifier.
    pub customer_id: Option<String>,
    /// Which retry of this payment this call is.
    pub retry_count: u32,
    /// Opaque gateway-supplied blob echoed back when retrying a declined
    /// payment.
    pub reference_data: Option<String>,
    /// Billing address.
    pub billing_address: Option<AddressDetails>,
    /// Shipping address.
    pub shipping_address: Option<AddressDetails>,
}

/// The operations any gateway adapter offers. Follow-up operations address
/// an earlier transaction through the authorization handle returned in
/// [`PaymentsResponseData::authorization`].
pub trait PaymentGateway {
    /// Charge the card: authorize and capture in one call.
    fn purchase(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Authorize the card for a later capture.
    fn authorize(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Capture a previously authorized amount, fully or partially.
    fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Refund a settled payment, fully or partially.
    fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Void a previously authorized payment.
    fn void(
        &self,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Check that the card is chargeable by authorizing a nominal amount and
    /// immediately voiding it. The void is best-effort cleanup: its outcome
    /// never changes the returned result.
    fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>;

    /// Redact credentials and card data from a wire transcript.
    fn scrub(&self, transcript: &str) -> String;
}

/// Synchronous FlexPay client. One instance per credential; configuration is
/// immutable after construction and calls share no mutable state.
pub struct FlexpayGateway<T: Transport> {
    connector: &'static Flexpay,
    connector_auth_type: ConnectorAuthType,
    connectors: Connectors,
    test_mode: bool,
    transport: T,
}

impl<T: Transport> FlexpayGateway<T> {
    /// Creates a client that talks to the production FlexPay host with the
    /// given credential.
    pub fn new(api_key: Secret<String>, test_mode: bool, transport: T) -> Self {
        Self::with_base_url(api_key, test_mode, transport, consts::FLEXPAY_BASE_URL)
    }

    /// Creates a client against a custom base URL, for sandboxes and tests.
    pub fn with_base_url(
        api_key: Secret<String>,
        test_mode: bool,
        transport: T,
        base_url: &str,
    ) -> Self {
        Self {
            connector: Flexpay::new(),
            connector_auth_type: ConnectorAuthType::HeaderKey { api_key },
            connectors: Connectors {
                flexpay: ConnectorParams {
                    base_url: base_url.to_string(),
                },
            },
            test_mode,
            transport,
        }
    }

    /// The transport this client sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn router_data<Flow, Req>(
        &self,
        request: Req,
        address: PaymentAddress,
    ) -> RouterData<Flow, Req, PaymentsResponseData> {
        RouterData {
            flow: PhantomData,
            connector_auth_type: self.connector_auth_type.clone(),
            address,
            request,
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: utils::generate_id(consts::ID_LENGTH),
            test_mode: Some(self.test_mode),
            connector_http_status_code: None,
        }
    }

    fn execute<Flow, Req>(
        &self,
        router_data: RouterData<Flow, Req, PaymentsResponseData>,
    ) -> CustomResult<PaymentsResponseData, ConnectorError>
    where
        Flexpay: ConnectorIntegrationAny<Flow, Req, PaymentsResponseData>,
        Flow: Clone + 'static,
        Req: Clone + 'static,
    {
        let integration: BoxedConnectorIntegration<'_, Flow, Req, PaymentsResponseData> =
            self.connector.get_connector_integration();
        let router_data = services::execute_connector_processing_step(
            &self.transport,
            integration,
            router_data,
            &self.connectors,
        )?;
        router_data.response.map_err(|error| {
            report!(ConnectorError::ProcessingStepFailed(Some(error.message)))
        })
    }

    fn pay(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
        capture_method: CaptureMethod,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        let address = PaymentAddress {
            billing: options.billing_address,
            shipping: options.shipping_address,
        };
        let request = PaymentsAuthorizeData {
            payment_method_data: PaymentMethodData::Card(card),
            minor_amount: amount,
            currency: options.currency.unwrap_or_default(),
            capture_method: Some(capture_method),
            email: options.email,
            customer_id: options.customer_id,
            order_id: options.order_id,
            retry_count: options.retry_count,
            reference_data: options.reference_data,
        };
        self.execute::<Authorize, _>(self.router_data(request, address))
    }
}

impl<T: Transport> PaymentGateway for FlexpayGateway<T> {
    fn purchase(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        self.pay(amount, card, options, CaptureMethod::Automatic)
    }

    fn authorize(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        self.pay(amount, card, options, CaptureMethod::Manual)
    }

    fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        let request = PaymentsCaptureData {
            minor_amount_to_capture: amount,
            currency: options.currency.unwrap_or_default(),
            connector_transaction_id: authorization.to_string(),
        };
        self.execute::<Capture, _>(self.router_data(request, PaymentAddress::default()))
    }

    fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        let request = RefundsData {
            minor_refund_amount: amount,
            currency: options.currency.unwrap_or_default(),
            connector_transaction_id: authorization.to_string(),
        };
        self.execute::<Execute, _>(self.router_data(request, PaymentAddress::default()))
    }

    fn void(
        &self,
        authorization: &str,
        _options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        let request = PaymentsCancelData {
            connector_transaction_id: authorization.to_string(),
        };
        self.execute::<Void, _>(self.router_data(request, PaymentAddress::default()))
    }

    fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<PaymentsResponseData, ConnectorError> {
        let result = self.authorize(VERIFICATION_AMOUNT, card, options.clone())?;
        if let Some(authorization) = result.authorization.as_deref() {
            // Best-effort reversal of the probe; the caller gets the
            // authorize outcome either way.
            if let Err(error) = self.void(authorization, options) {
                tracing::info!(?error, "verification void failed");
            }
        }
        Ok(result)
    }

    fn scrub(&self, transcript: &str) -> String {
        self.connector.scrub(transcript)
    }
}
