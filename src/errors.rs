//! Error types shared across the crate.

/// Type alias for `Result` with an [`error_stack::Report`] error variant.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Errors surfaced while building requests for, or interpreting responses
/// from, the gateway.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// The configured authentication type does not carry the credentials
    /// this connector needs.
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    /// A field required by the gateway payload was not supplied.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the missing field.
        field_name: &'static str,
    },
    /// The request payload could not be encoded.
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    /// The response body was structurally valid JSON but did not match the
    /// gateway's documented shape.
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    /// An amount could not be converted to the representation the gateway
    /// expects.
    #[error("Failed to convert amount to required type")]
    AmountConversionFailed,
    /// The processing step completed without producing a usable response.
    #[error("Connector processing step failed")]
    ProcessingStepFailed(Option<String>),
    /// The flow is not implemented for this connector.
    #[error("{0} is not implemented")]
    NotImplemented(String),
    /// The transport collaborator failed in a way this adapter does not know
    /// how to interpret.
    #[error("Failed to communicate with the connector")]
    TransportFailure,
}

/// Validation failures raised at type boundaries, before any request is
/// built.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The provided value failed a domain check.
    #[error("{message}")]
    InvalidValue {
        /// Human-readable description of the failed check.
        message: String,
    },
}
