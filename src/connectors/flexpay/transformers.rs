use serde::{Deserialize, Serialize};

use crate::{
    consts,
    errors::{ConnectorError, CustomResult},
    masking::Secret,
    payment_method_data::{CardNumber, PaymentMethodData},
    router_data::RouterData,
    router_response_types::{PaymentsResponseData, StandardErrorCode},
    types::{
        Email, PaymentsAuthorizeRouterData, PaymentsCancelRouterData, PaymentsCaptureRouterData,
        RefundsRouterData, ResponseRouterData, StringMinorUnit,
    },
    utils::{generate_id, AddressDetailsData, CardData},
};

/// Response code FlexPay uses for an approved transaction. Every other code
/// is a failure.
const APPROVED_RESPONSE_CODE: &str = "10000";

pub struct FlexpayRouterData<T> {
    pub amount: StringMinorUnit,
    pub router_data: T,
}

impl<T> From<(StringMinorUnit, T)> for FlexpayRouterData<T> {
    fn from((amount, item): (StringMinorUnit, T)) -> Self {
        Self {
            amount,
            router_data: item,
        }
    }
}

// Auth struct for FlexPay HTTP Basic auth. The api key is handed out by
// FlexPay already encoded, so it goes on the wire as-is.
pub struct FlexpayAuthType {
    pub(super) api_key: Secret<String>,
}

impl TryFrom<&crate::router_data::ConnectorAuthType> for FlexpayAuthType {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(auth_type: &crate::router_data::ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            crate::router_data::ConnectorAuthType::HeaderKey { api_key } => Ok(Self {
                api_key: api_key.to_owned(),
            }),
            crate::router_data::ConnectorAuthType::NoKey => {
                Err(ConnectorError::FailedToObtainAuthType.into())
            }
        }
    }
}

// FlexPay charge/authorize request.
#[derive(Debug, Serialize)]
pub struct FlexpayPaymentsRequest {
    transaction: FlexpayTransactionRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayTransactionRequest {
    merchant_transaction_id: String,
    order_id: String,
    amount: StringMinorUnit,
    currency_code: String,
    retry_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_data: Option<String>,
    // Keeps the instrument on file after approval so capture, refund and
    // void can address it later. The gateway expects the literal string.
    retain_on_success: &'static str,
    payment_method: FlexpayPaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_address: Option<FlexpayAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayPaymentMethod {
    credit_card_number: CardNumber,
    expiry_month: Secret<String>,
    expiry_year: Secret<i32>,
    cvv: Secret<String>,
    full_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address2: Option<Secret<String>>,
    // Unlike the street lines these are sent even when empty.
    postal_code: Option<Secret<String>>,
    city: Option<String>,
    state: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    address1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address2: Option<Secret<String>>,
    postal_code: Option<Secret<String>>,
    city: Option<String>,
    state: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl From<&crate::router_data::AddressDetails> for FlexpayAddress {
    fn from(address: &crate::router_data::AddressDetails) -> Self {
        Self {
            address1: address.get_optional_line1(),
            address2: address.get_optional_line2(),
            postal_code: address.get_optional_zip(),
            city: address.get_optional_city(),
            state: address.get_optional_state(),
            country: address.get_optional_country(),
        }
    }
}

impl TryFrom<&FlexpayRouterData<&PaymentsAuthorizeRouterData>> for FlexpayPaymentsRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(
        item: &FlexpayRouterData<&PaymentsAuthorizeRouterData>,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let request = &router_data.request;
        let PaymentMethodData::Card(card) = &request.payment_method_data;

        let billing = router_data.address.get_optional_billing();
        let mut payment_method = FlexpayPaymentMethod {
            credit_card_number: card.card_number.clone(),
            expiry_month: card.get_card_expiry_month_2_digit(),
            expiry_year: card.get_expiry_year_as_4_digit_i32()?,
            cvv: card.card_cvc.clone(),
            full_name: card.card_holder_name.clone(),
            email: None,
            address1: billing.and_then(AddressDetailsData::get_optional_line1),
            address2: billing.and_then(AddressDetailsData::get_optional_line2),
            postal_code: billing.and_then(AddressDetailsData::get_optional_zip),
            city: billing.and_then(AddressDetailsData::get_optional_city),
            state: billing.and_then(AddressDetailsData::get_optional_state),
            country: billing.and_then(AddressDetailsData::get_optional_country),
        };

        // An email identifies the customer on the payment method itself;
        // without one the gateway needs an explicit customer id.
        let customer_id = match request.email.clone() {
            Some(email) => {
                payment_method.email = Some(email);
                None
            }
            None => Some(
                request
                    .customer_id
                    .clone()
                    .unwrap_or_else(|| generate_id(consts::ID_LENGTH)),
            ),
        };

        let merchant_transaction_id = router_data.connector_request_reference_id.clone();
        Ok(Self {
            transaction: FlexpayTransactionRequest {
                order_id: request
                    .order_id
                    .clone()
                    .unwrap_or_else(|| merchant_transaction_id.clone()),
                merchant_transaction_id,
                amount: item.amount.clone(),
                currency_code: request.currency.to_string(),
                retry_count: request.retry_count,
                reference_data: request.reference_data.clone(),
                retain_on_success: "true",
                payment_method,
                shipping_address: router_data
                    .address
                    .get_optional_shipping()
                    .map(FlexpayAddress::from),
                customer_id,
            },
        })
    }
}

// FlexPay capture request. Only the amount travels in the body; the original
// transaction is addressed through the resource path.
#[derive(Debug, Serialize)]
pub struct FlexpayCaptureRequest {
    transaction: FlexpayFollowUpTransaction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayFollowUpTransaction {
    amount: StringMinorUnit,
    merchant_transaction_id: String,
}

impl TryFrom<&FlexpayRouterData<&PaymentsCaptureRouterData>> for FlexpayCaptureRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &FlexpayRouterData<&PaymentsCaptureRouterData>) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: FlexpayFollowUpTransaction {
                amount: item.amount.clone(),
                merchant_transaction_id: item
                    .router_data
                    .connector_request_reference_id
                    .clone(),
            },
        })
    }
}

// FlexPay refund request, identical in shape to capture.
#[derive(Debug, Serialize)]
pub struct FlexpayRefundRequest {
    transaction: FlexpayFollowUpTransaction,
}

impl TryFrom<&FlexpayRouterData<&RefundsRouterData>> for FlexpayRefundRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &FlexpayRouterData<&RefundsRouterData>) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: FlexpayFollowUpTransaction {
                amount: item.amount.clone(),
                merchant_transaction_id: item
                    .router_data
                    .connector_request_reference_id
                    .clone(),
            },
        })
    }
}

// FlexPay void request: no amount, just the fresh merchant reference.
#[derive(Debug, Serialize)]
pub struct FlexpayCancelRequest {
    transaction: FlexpayCancelTransaction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayCancelTransaction {
    merchant_transaction_id: String,
}

impl TryFrom<&PaymentsCancelRouterData> for FlexpayCancelRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &PaymentsCancelRouterData) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: FlexpayCancelTransaction {
                merchant_transaction_id: item.connector_request_reference_id.clone(),
            },
        })
    }
}

// FlexPay transaction response. Every flow answers with the same shape, so a
// single response type and a single normalization cover all of them.
#[derive(Debug)]
pub struct FlexpayPaymentsResponse {
    pub transaction: FlexpayTransaction,
    pub raw: String,
}

#[derive(Debug, Deserialize)]
struct FlexpayResponseEnvelope {
    transaction: FlexpayTransaction,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayTransaction {
    pub response_code: Option<String>,
    pub message: Option<String>,
    pub transaction_id: Option<String>,
    // Hard failures can omit the processor sub-object entirely, not just
    // null out its fields.
    pub response: Option<FlexpayProcessorResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexpayProcessorResponse {
    pub avs_code: Option<String>,
    pub cvv_code: Option<String>,
}

impl FlexpayPaymentsResponse {
    /// Decodes a raw response body.
    ///
    /// A blank body yields an empty transaction and a body that is not JSON
    /// at all yields a transaction carrying only a diagnostic message — both
    /// normalize to failures downstream instead of aborting the call. A body
    /// that is valid JSON without the `transaction` envelope is malformed
    /// gateway traffic and fails hard.
    pub fn parse(body: &bytes::Bytes) -> CustomResult<Self, ConnectorError> {
        let raw = String::from_utf8_lossy(body).into_owned();
        if raw.trim().is_empty() {
            return Ok(Self {
                transaction: FlexpayTransaction::default(),
                raw,
            });
        }
        let transaction = match serde_json::from_slice::<FlexpayResponseEnvelope>(body) {
            Ok(envelope) => envelope.transaction,
            Err(_) if serde_json::from_slice::<serde_json::Value>(body).is_err() => {
                FlexpayTransaction {
                    message: Some(unparsable_response_message(&raw)),
                    ..FlexpayTransaction::default()
                }
            }
            Err(error) => {
                return Err(error_stack::report!(error)
                    .change_context(ConnectorError::ResponseDeserializationFailed))
            }
        };
        Ok(Self { transaction, raw })
    }
}

fn unparsable_response_message(raw: &str) -> String {
    format!(
        "Unparsable response received from FlexPay. Please contact FlexPay if you continue to \
         receive this message. (The raw response returned by the API was {raw:?})"
    )
}

impl<Flow, Request>
    TryFrom<ResponseRouterData<Flow, FlexpayPaymentsResponse, Request, PaymentsResponseData>>
    for RouterData<Flow, Request, PaymentsResponseData>
{
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(
        item: ResponseRouterData<Flow, FlexpayPaymentsResponse, Request, PaymentsResponseData>,
    ) -> Result<Self, Self::Error> {
        let transaction = item.response.transaction;
        let success = transaction.response_code.as_deref() == Some(APPROVED_RESPONSE_CODE);
        let error_code = if success {
            None
        } else {
            transaction
                .response_code
                .as_deref()
                .and_then(standard_error_code)
        };
        let processor = transaction.response;

        Ok(Self {
            response: Ok(PaymentsResponseData {
                success,
                message: transaction.message,
                authorization: transaction.transaction_id,
                avs_result: processor.as_ref().and_then(|p| p.avs_code.clone()),
                cvv_result: processor.and_then(|p| p.cvv_code),
                error_code,
                raw: item.response.raw,
                test: item.data.test_mode.unwrap_or_default(),
            }),
            ..item.data
        })
    }
}

/// Maps FlexPay's numeric decline codes onto the shared vocabulary.
///
/// The mapping is per exact code; the leading digit only documents the class
/// the gateway files the code under. Codes missing from the table surface as
/// plain failures with no classification.
pub fn standard_error_code(response_code: &str) -> Option<StandardErrorCode> {
    match response_code {
        // Soft decline
        "20000" => Some(StandardErrorCode::CallIssuer),
        "20003" => Some(StandardErrorCode::CardDeclined),
        // Hard decline
        "30001" => Some(StandardErrorCode::PickupCard),
        "30002" => Some(StandardErrorCode::PickupCard), // may be lost or stolen
        "30012" => Some(StandardErrorCode::IncorrectNumber),
        "30015" => Some(StandardErrorCode::ProcessingError), // invalid amount, eg. refund
        "30026" => Some(StandardErrorCode::ExpiredCard),
        "33049" => Some(StandardErrorCode::InvalidCvc),
        // Validation error
        "50055" => Some(StandardErrorCode::InvalidExpiryDate), // month missing
        "50056" => Some(StandardErrorCode::InvalidExpiryDate), // month invalid
        "50057" => Some(StandardErrorCode::InvalidExpiryDate), // year missing
        "50058" => Some(StandardErrorCode::InvalidExpiryDate), // year invalid
        "50131" => Some(StandardErrorCode::ProcessingError), // transaction not found, eg. void
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    use super::*;
    use crate::{
        payment_method_data::Card,
        router_data::{AddressDetails, ConnectorAuthType, ErrorResponse, PaymentAddress},
        router_request_types::{CaptureMethod, PaymentsAuthorizeData, PaymentsCaptureData},
        types::{Currency, MinorUnit, PaymentsCaptureRouterData},
    };

    fn test_card() -> Card {
        Card {
            card_number: "4920201996449560".parse().unwrap(),
            card_exp_month: Secret::new("9".to_string()),
            card_exp_year: Secret::new("2027".to_string()),
            card_cvc: Secret::new("879".to_string()),
            card_holder_name: Some(Secret::new("Longbob Longsen".to_string())),
        }
    }

    fn billing_address() -> AddressDetails {
        AddressDetails {
            line1: Some(Secret::new("456 My Street".to_string())),
            line2: Some(Secret::new("Apt 1".to_string())),
            zip: Some(Secret::new("K1C2N6".to_string())),
            city: Some("Ottawa".to_string()),
            state: Some(Secret::new("ON".to_string())),
            country: Some("CA".to_string()),
        }
    }

    fn authorize_router_data(
        request: PaymentsAuthorizeData,
        billing: Option<AddressDetails>,
        shipping: Option<AddressDetails>,
    ) -> PaymentsAuthorizeRouterData {
        PaymentsAuthorizeRouterData {
            flow: PhantomData,
            connector_auth_type: ConnectorAuthType::HeaderKey {
                api_key: Secret::new("api_key".to_string()),
            },
            address: PaymentAddress { billing, shipping },
            request,
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: "45592038f232181b03030ef39fccb19c".to_string(),
            test_mode: Some(true),
            connector_http_status_code: None,
        }
    }

    fn authorize_request_data() -> PaymentsAuthorizeData {
        PaymentsAuthorizeData {
            payment_method_data: PaymentMethodData::Card(test_card()),
            minor_amount: MinorUnit::new(100),
            currency: Currency::USD,
            capture_method: Some(CaptureMethod::Automatic),
            email: None,
            customer_id: None,
            order_id: Some("1".to_string()),
            retry_count: 0,
            reference_data: None,
        }
    }

    fn charge_payload(
        request: PaymentsAuthorizeData,
        billing: Option<AddressDetails>,
        shipping: Option<AddressDetails>,
    ) -> serde_json::Value {
        let router_data = authorize_router_data(request, billing, shipping);
        let flexpay_router_data =
            FlexpayRouterData::from((StringMinorUnit::new(100), &router_data));
        let request = FlexpayPaymentsRequest::try_from(&flexpay_router_data).unwrap();
        serde_json::to_value(&request).unwrap()
    }

    #[test]
    fn charge_payload_carries_invoice_and_instrument() {
        let payload = charge_payload(authorize_request_data(), Some(billing_address()), None);
        let transaction = &payload["transaction"];

        assert_eq!(
            transaction["merchantTransactionId"],
            "45592038f232181b03030ef39fccb19c"
        );
        assert_eq!(transaction["orderId"], "1");
        assert_eq!(transaction["amount"], "100");
        assert_eq!(transaction["currencyCode"], "USD");
        assert_eq!(transaction["retryCount"], 0);
        assert_eq!(transaction["retainOnSuccess"], "true");
        assert!(transaction.get("referenceData").is_none());

        let payment_method = &transaction["paymentMethod"];
        assert_eq!(payment_method["creditCardNumber"], "4920201996449560");
        assert_eq!(payment_method["expiryMonth"], "09");
        assert_eq!(payment_method["expiryYear"], 2027);
        assert_eq!(payment_method["cvv"], "879");
        assert_eq!(payment_method["fullName"], "Longbob Longsen");
        assert_eq!(payment_method["address1"], "456 My Street");
        assert_eq!(payment_method["address2"], "Apt 1");
        assert_eq!(payment_method["postalCode"], "K1C2N6");
        assert_eq!(payment_method["city"], "Ottawa");
        assert_eq!(payment_method["state"], "ON");
        assert_eq!(payment_method["country"], "CA");
    }

    #[test]
    fn order_id_falls_back_to_merchant_transaction_id() {
        let request = PaymentsAuthorizeData {
            order_id: None,
            ..authorize_request_data()
        };
        let payload = charge_payload(request, None, None);
        assert_eq!(
            payload["transaction"]["orderId"],
            payload["transaction"]["merchantTransactionId"]
        );
    }

    #[test]
    fn email_lands_on_payment_method_instead_of_customer_id() {
        let request = PaymentsAuthorizeData {
            email: Some(Email::new("joe@example.com".to_string())),
            customer_id: Some("12345".to_string()),
            ..authorize_request_data()
        };
        let payload = charge_payload(request, None, None);
        let transaction = &payload["transaction"];

        assert_eq!(transaction["paymentMethod"]["email"], "joe@example.com");
        assert!(transaction.get("customerId").is_none());
    }

    #[test]
    fn explicit_customer_id_is_passed_through() {
        let request = PaymentsAuthorizeData {
            customer_id: Some("12345".to_string()),
            ..authorize_request_data()
        };
        let payload = charge_payload(request, None, None);
        assert_eq!(payload["transaction"]["customerId"], "12345");
    }

    #[test]
    fn customer_id_is_generated_when_nothing_identifies_the_customer() {
        let payload = charge_payload(authorize_request_data(), None, None);
        let customer_id = payload["transaction"]["customerId"].as_str().unwrap();
        assert_eq!(customer_id.len(), 32);
    }

    #[test]
    fn reference_data_and_retry_count_are_echoed() {
        let request = PaymentsAuthorizeData {
            retry_count: 1,
            reference_data: Some("CAABACcDHD6YMNcI".to_string()),
            ..authorize_request_data()
        };
        let payload = charge_payload(request, None, None);
        assert_eq!(payload["transaction"]["retryCount"], 1);
        assert_eq!(payload["transaction"]["referenceData"], "CAABACcDHD6YMNcI");
    }

    #[test]
    fn street_lines_and_country_are_omitted_when_blank() {
        let address = AddressDetails {
            line1: None,
            line2: Some(Secret::new(String::new())),
            zip: None,
            city: None,
            state: None,
            country: Some(String::new()),
        };
        let payload = charge_payload(authorize_request_data(), Some(address), None);
        let payment_method = &payload["transaction"]["paymentMethod"];

        assert!(payment_method.get("address1").is_none());
        assert!(payment_method.get("address2").is_none());
        assert!(payment_method.get("country").is_none());
        // These travel even when there is nothing to send.
        assert_eq!(payment_method["postalCode"], serde_json::Value::Null);
        assert_eq!(payment_method["city"], serde_json::Value::Null);
        assert_eq!(payment_method["state"], serde_json::Value::Null);
    }

    #[test]
    fn shipping_address_is_present_only_when_supplied() {
        let without = charge_payload(authorize_request_data(), Some(billing_address()), None);
        assert!(without["transaction"].get("shippingAddress").is_none());

        let with = charge_payload(
            authorize_request_data(),
            None,
            Some(billing_address()),
        );
        let shipping = &with["transaction"]["shippingAddress"];
        assert_eq!(shipping["address1"], "456 My Street");
        assert_eq!(shipping["postalCode"], "K1C2N6");
        assert_eq!(shipping["country"], "CA");
    }

    #[test]
    fn capture_payload_is_amount_and_reference_only() {
        let router_data = PaymentsCaptureRouterData {
            flow: PhantomData,
            connector_auth_type: ConnectorAuthType::HeaderKey {
                api_key: Secret::new("api_key".to_string()),
            },
            address: PaymentAddress::default(),
            request: PaymentsCaptureData {
                minor_amount_to_capture: MinorUnit::new(100),
                currency: Currency::USD,
                connector_transaction_id: "5X7SQV53KJCUDDDGAFWPQU3D2Y".to_string(),
            },
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: "3e6f275228b0a428856c1c78900a61e0".to_string(),
            test_mode: Some(true),
            connector_http_status_code: None,
        };
        let flexpay_router_data =
            FlexpayRouterData::from((StringMinorUnit::new(100), &router_data));
        let request = FlexpayCaptureRequest::try_from(&flexpay_router_data).unwrap();
        let payload = serde_json::to_value(&request).unwrap();

        let transaction = payload["transaction"].as_object().unwrap();
        assert_eq!(transaction.len(), 2);
        assert_eq!(transaction["amount"], "100");
        assert_eq!(
            transaction["merchantTransactionId"],
            "3e6f275228b0a428856c1c78900a61e0"
        );
    }

    #[test]
    fn void_payload_is_reference_only() {
        let router_data = PaymentsCancelRouterData {
            flow: PhantomData,
            connector_auth_type: ConnectorAuthType::HeaderKey {
                api_key: Secret::new("api_key".to_string()),
            },
            address: PaymentAddress::default(),
            request: crate::router_request_types::PaymentsCancelData {
                connector_transaction_id: "K3A777DBM5JU3OTFAFWPQ257A4".to_string(),
            },
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: "31d42652c7d2266077ef4a9d8c953cbf".to_string(),
            test_mode: Some(true),
            connector_http_status_code: None,
        };
        let request = FlexpayCancelRequest::try_from(&router_data).unwrap();
        let payload = serde_json::to_value(&request).unwrap();

        let transaction = payload["transaction"].as_object().unwrap();
        assert_eq!(transaction.len(), 1);
        assert_eq!(
            transaction["merchantTransactionId"],
            "31d42652c7d2266077ef4a9d8c953cbf"
        );
    }

    fn normalize(body: &[u8]) -> PaymentsResponseData {
        let response = FlexpayPaymentsResponse::parse(&bytes::Bytes::copy_from_slice(body))
            .expect("parseable response");
        let router_data =
            authorize_router_data(authorize_request_data(), Some(billing_address()), None);
        let normalized = PaymentsAuthorizeRouterData::try_from(ResponseRouterData {
            response,
            data: router_data,
            http_code: 200,
        })
        .unwrap();
        normalized.response.unwrap()
    }

    const APPROVED_BODY: &[u8] = br#"{"transaction":{"response":{"avsCode":"S","avsMessage":"AVS not supported.","cvvCode":"M","cvvMessage":"Approved","errorCode":null,"errorDetail":""},"transactionId":"GRYBF34QLKME5KURAFWPQO6JOU","transactionStatus":1,"message":"Approved.","responseCode":"10000","transactionType":"Charge","merchantTransactionId":"6425d7acc1f812c3ff37467044f0b148","currencyCode":"USD","amount":100}}"#;

    const DECLINED_BODY: &[u8] = br#"{"transaction":{"response":{"avsCode":"S","avsMessage":"AVS not supported.","cvvCode":"M","cvvMessage":"(No Match)","errorCode":null,"errorDetail":""},"transactionId":"UXXEM5WHV34E7GPCAFWPQRU5OM","transactionStatus":2,"message":"Declined - do not honor.","responseCode":"20003","transactionType":"Charge","currencyCode":"USD","amount":2008}}"#;

    #[test]
    fn approved_response_normalizes_to_success() {
        let result = normalize(APPROVED_BODY);
        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Approved."));
        assert_eq!(
            result.authorization.as_deref(),
            Some("GRYBF34QLKME5KURAFWPQO6JOU")
        );
        assert_eq!(result.avs_result.as_deref(), Some("S"));
        assert_eq!(result.cvv_result.as_deref(), Some("M"));
        assert_eq!(result.error_code, None);
        assert!(result.test);
        assert!(result.raw.contains("GRYBF34QLKME5KURAFWPQO6JOU"));
    }

    #[test]
    fn decline_maps_onto_standard_error_code() {
        let result = normalize(DECLINED_BODY);
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Declined - do not honor."));
        assert_eq!(result.error_code, Some(StandardErrorCode::CardDeclined));
        assert_eq!(
            result.authorization.as_deref(),
            Some("UXXEM5WHV34E7GPCAFWPQRU5OM")
        );
    }

    #[test]
    fn unmapped_response_code_degrades_to_unclassified_failure() {
        let result = normalize(
            br#"{"transaction":{"responseCode":"99999","message":"Mystery failure."}}"#,
        );
        assert!(!result.success);
        assert_eq!(result.error_code, None);
        // The processor sub-object is absent entirely here; extraction must
        // not blow up.
        assert_eq!(result.avs_result, None);
        assert_eq!(result.cvv_result, None);
    }

    #[test]
    fn null_valued_processor_block_yields_no_avs_or_cvv() {
        let result = normalize(
            br#"{"transaction":{"response":{"avsCode":null,"avsMessage":null,"cvvCode":null,"cvvMessage":null,"errorCode":null,"errorDetail":null},"transactionId":"T3TOBOFDRDAETC2XAFWPRGU2FU","message":"Original transaction not found using the field TransactionReferenceId.","responseCode":"50131","transactionType":"Void"}}"#,
        );
        assert!(!result.success);
        assert_eq!(result.error_code, Some(StandardErrorCode::ProcessingError));
        assert_eq!(result.avs_result, None);
        assert_eq!(result.cvv_result, None);
    }

    #[test]
    fn blank_body_normalizes_to_failure() {
        let result = normalize(b"");
        assert!(!result.success);
        assert_eq!(result.message, None);
        assert_eq!(result.authorization, None);
        assert_eq!(result.error_code, None);
        assert_eq!(result.raw, "");
    }

    #[test]
    fn malformed_body_degrades_with_diagnostic_message() {
        let result = normalize(br#"{"transaction":"#);
        assert!(!result.success);
        assert_eq!(result.authorization, None);
        assert_eq!(result.error_code, None);
        let message = result.message.unwrap();
        assert!(message.contains("Unparsable response received from FlexPay"));
        assert!(message.contains(r#"{\"transaction\":"#));
    }

    #[test]
    fn missing_envelope_is_a_hard_error() {
        let error = FlexpayPaymentsResponse::parse(&bytes::Bytes::from_static(
            br#"{"unexpected":{}}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            error.current_context(),
            ConnectorError::ResponseDeserializationFailed
        ));
    }

    #[test]
    fn error_code_table_is_per_exact_code() {
        assert_eq!(standard_error_code("20000"), Some(StandardErrorCode::CallIssuer));
        assert_eq!(standard_error_code("30001"), Some(StandardErrorCode::PickupCard));
        assert_eq!(standard_error_code("30002"), Some(StandardErrorCode::PickupCard));
        assert_eq!(standard_error_code("30012"), Some(StandardErrorCode::IncorrectNumber));
        assert_eq!(standard_error_code("30015"), Some(StandardErrorCode::ProcessingError));
        assert_eq!(standard_error_code("30026"), Some(StandardErrorCode::ExpiredCard));
        assert_eq!(standard_error_code("33049"), Some(StandardErrorCode::InvalidCvc));
        assert_eq!(
            standard_error_code("50055"),
            Some(StandardErrorCode::InvalidExpiryDate)
        );
        assert_eq!(
            standard_error_code("50058"),
            Some(StandardErrorCode::InvalidExpiryDate)
        );
        assert_eq!(standard_error_code("50131"), Some(StandardErrorCode::ProcessingError));
        // Prefix classes are documentation, not fallback rules.
        assert_eq!(standard_error_code("20001"), None);
        assert_eq!(standard_error_code("30000"), None);
    }
}
