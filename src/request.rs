//! Wire-level request representation handed to the transport collaborator.

use serde::{Deserialize, Serialize};

use crate::{consts, masking::Maskable};

/// Header set carried by a [`Request`]. Values are [`Maskable`] so that
/// credentials stay redacted in `Debug` output.
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP method of an outbound call.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Returns the default request headers attached to every outbound call.
fn default_request_headers() -> [(String, Maskable<String>); 1] {
    [(
        consts::headers::USER_AGENT.to_string(),
        consts::USER_AGENT.into(),
    )]
}

/// A fully-built outbound request. Serialization of the body and the actual
/// network call are the transport's concern.
#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

/// Body of an outbound request.
pub enum RequestContent {
    /// A JSON body, kept as the typed payload it was built from.
    Json(Box<dyn erased_serde::Serialize + Send>),
}

impl RequestContent {
    /// Serialize the body into the bytes that go on the wire.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Json(payload) => serde_json::to_vec(payload),
        }
    }
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
        })
    }
}

impl Request {
    /// Creates a new request with the specified HTTP method and URL.
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the body of the request.
    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    /// Adds default headers to the existing headers of the request.
    pub fn add_default_headers(&mut self) {
        self.headers.extend(default_request_headers());
    }

    /// Adds a new header. The value can be masked for credentials.
    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }
}

/// Builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    /// Creates a builder with an empty `GET` request.
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the URL.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Extends the headers with the default request headers.
    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    /// Adds the provided headers.
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the body.
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    /// Builds the [`Request`].
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
