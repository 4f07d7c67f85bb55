//! Drives one connector call against the transport collaborator.

use error_stack::report;

use crate::{
    api::BoxedConnectorIntegration,
    configs::Connectors,
    errors::{ConnectorError, CustomResult},
    request::Request,
    router_data::RouterData,
    router_response_types::PaymentsResponseData,
    types::Response,
};

/// Error raised by a [`Transport`] when a call could not produce response
/// bytes: connection failures, TLS problems, or HTTP statuses the transport
/// rejects outright.
#[derive(Clone, Debug, thiserror::Error)]
#[error("transport failure ({status_code:?}): {message}")]
pub struct TransportError {
    /// HTTP status code, when the failure happened after a status line was
    /// received.
    pub status_code: Option<u16>,
    /// Description of the failure.
    pub message: String,
}

/// The outbound HTTP collaborator. Implementations own connection handling,
/// TLS, redirects and timeouts; this crate only hands them a fully-built
/// [`Request`].
///
/// A transport should return `Ok` with the raw body for any response it can
/// read, whatever the status code, and reserve [`TransportError`] for calls
/// that failed outright.
pub trait Transport {
    /// Send the request and return the raw response.
    fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// HTTP statuses the gateway uses to reject a request before processing it:
/// bad credentials (401) and unsupported method (405). These degrade to a
/// normalized failure result instead of a hard fault.
const REJECTED_BEFORE_PROCESSING: [u16; 2] = [401, 405];

/// Builds the request for one flow, sends it, and lets the connector
/// interpret whatever came back.
///
/// Transport errors carrying a 401 or 405 status are converted into a failed
/// [`PaymentsResponseData`]; any other transport error propagates as
/// [`ConnectorError::TransportFailure`].
pub fn execute_connector_processing_step<Flow, Req>(
    transport: &dyn Transport,
    connector_integration: BoxedConnectorIntegration<'_, Flow, Req, PaymentsResponseData>,
    mut router_data: RouterData<Flow, Req, PaymentsResponseData>,
    connectors: &Connectors,
) -> CustomResult<RouterData<Flow, Req, PaymentsResponseData>, ConnectorError>
where
    Flow: Clone + 'static,
    Req: Clone + 'static,
{
    let request = connector_integration.build_request(&router_data, connectors)?;
    let Some(request) = request else {
        return Ok(router_data);
    };
    tracing::debug!(connector_request = ?request);

    match transport.send(request) {
        Ok(response) => {
            router_data.connector_http_status_code = Some(response.status_code);
            connector_integration.handle_response(&router_data, response)
        }
        Err(error)
            if error
                .status_code
                .is_some_and(|status| REJECTED_BEFORE_PROCESSING.contains(&status)) =>
        {
            tracing::info!(status_code = ?error.status_code, "request rejected before processing");
            router_data.connector_http_status_code = error.status_code;
            router_data.response = Ok(PaymentsResponseData::from_transport_rejection(
                &error.message,
                router_data.test_mode,
            ));
            Ok(router_data)
        }
        Err(error) => Err(report!(error).change_context(ConnectorError::TransportFailure)),
    }
}
