//! Result of a completed exchange.

use crate::core::TransportResponse;

/// Status code and body of a completed exchange.
///
/// Returned for every exchange the transport completed, including the ones
/// answered with `4xx` or `5xx`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Response {
    status_code: u16,
    content: String,
}

impl Response {
    /// HTTP status code, `0` if unknown.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Response body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Take the response body.
    pub fn into_content(self) -> String {
        self.content
    }
}

impl From<TransportResponse> for Response {
    fn from(response: TransportResponse) -> Self {
        Self {
            status_code: response.status,
            content: response
                .body
                .map(|body| String::from_utf8_lossy(&body).into_owned())
                .unwrap_or_default(),
        }
    }
}
