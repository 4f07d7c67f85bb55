//! Crate-wide constants.

/// Base URL of the FlexPay API. The gateway exposes a single host for both
/// test and live traffic; the credential decides which environment a request
/// lands in.
pub const FLEXPAY_BASE_URL: &str = "https://api.flexpay.io/v1";

/// `User-Agent` sent with every outbound request.
pub const USER_AGENT: &str = concat!("flexpay/", env!("CARGO_PKG_VERSION"));

/// Length of generated merchant reference ids.
pub const ID_LENGTH: usize = 32;

pub(crate) const ALPHABETS: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Header names used when talking to the gateway.
pub mod headers {
    /// `Authorization` header.
    pub const AUTHORIZATION: &str = "Authorization";
    /// `Content-Type` header.
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// `User-Agent` header.
    pub const USER_AGENT: &str = "User-Agent";
}
