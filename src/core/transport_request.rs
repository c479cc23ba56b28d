//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! A [`TransportRequest`] is the fully resolved form of an effective
//! [`RequestOptions`] set: everything the transport needs to perform exactly
//! one exchange.
//!
//! [`RequestOptions`]: crate::core::RequestOptions

use std::{fmt::Display, time::Duration};

use crate::core::RequestOptions;

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub enum TransportMethod {
    /// `GET` request.
    #[default]
    Get,

    /// `HEAD` request.
    Head,

    /// `POST` request.
    Post,

    /// `PUT` request.
    Put,

    /// `PATCH` request.
    Patch,

    /// `DELETE` request.
    Delete,
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Head => "HEAD",
                TransportMethod::Post => "POST",
                TransportMethod::Put => "PUT",
                TransportMethod::Patch => "PATCH",
                TransportMethod::Delete => "DELETE",
            }
        )
    }
}

/// How strictly the server host name is checked against its certificate.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub enum HostVerification {
    /// Host name is not checked.
    Disabled,

    /// Certificate must be issued for the requested host name.
    #[default]
    Strict,
}

/// This struct represents a request to be sent by a [`Transport`].
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one. Values which weren't set in the effective option set take
/// the defaults of a bare HTTP client: `GET`, no body, no timeouts, redirects
/// not followed, full TLS verification and the body not returned.
///
/// [`Transport`]: crate::core::Transport
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TransportRequest {
    /// method to use for the request
    pub method: TransportMethod,

    /// target URL
    pub url: String,

    /// header lines in `Name: Value` form
    pub headers: Vec<String>,

    /// body to be sent with the request
    pub body: Option<Vec<u8>>,

    /// maximum time allowed for establishing the connection
    pub connect_timeout: Option<Duration>,

    /// maximum time allowed for the whole exchange
    pub timeout: Option<Duration>,

    /// whether `3xx` responses with a `Location` are followed
    pub follow_redirects: bool,

    /// redirect cap, the client default is used when not set
    pub max_redirects: Option<usize>,

    /// whether the peer certificate chain is verified
    pub verify_peer: bool,

    /// host name check
    pub verify_host: HostVerification,

    /// whether the response body is handed back to the caller
    pub return_body: bool,

    /// `User-Agent` header value
    pub user_agent: Option<String>,
}

impl Default for TransportRequest {
    fn default() -> Self {
        Self {
            method: TransportMethod::default(),
            url: String::new(),
            headers: Vec::new(),
            body: None,
            connect_timeout: None,
            timeout: None,
            follow_redirects: false,
            max_redirects: None,
            verify_peer: true,
            verify_host: HostVerification::default(),
            return_body: false,
            user_agent: None,
        }
    }
}

impl From<RequestOptions> for TransportRequest {
    fn from(options: RequestOptions) -> Self {
        let defaults = Self::default();

        Self {
            method: options.method.unwrap_or(defaults.method),
            url: options.url.unwrap_or(defaults.url),
            headers: options.headers.unwrap_or(defaults.headers),
            body: options.body.or(defaults.body),
            connect_timeout: options.connect_timeout.or(defaults.connect_timeout),
            timeout: options.timeout.or(defaults.timeout),
            follow_redirects: options.follow_redirects.unwrap_or(defaults.follow_redirects),
            max_redirects: options.max_redirects.or(defaults.max_redirects),
            verify_peer: options.verify_peer.unwrap_or(defaults.verify_peer),
            verify_host: options.verify_host.unwrap_or(defaults.verify_host),
            return_body: options.return_body.unwrap_or(defaults.return_body),
            user_agent: options.user_agent.or(defaults.user_agent),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::RequestOptionsBuilder;
    use test_case::test_case;

    #[test_case(TransportMethod::Get, "GET")]
    #[test_case(TransportMethod::Head, "HEAD")]
    #[test_case(TransportMethod::Post, "POST")]
    #[test_case(TransportMethod::Put, "PUT")]
    #[test_case(TransportMethod::Patch, "PATCH")]
    #[test_case(TransportMethod::Delete, "DELETE")]
    fn display_method(method: TransportMethod, expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn fall_back_to_client_defaults_for_unset_options() {
        let request = TransportRequest::from(RequestOptions::default());

        assert_eq!(request, TransportRequest::default());
        assert!(request.verify_peer);
        assert!(!request.follow_redirects);
        assert!(!request.return_body);
    }

    #[test]
    fn take_every_set_option() {
        let options = RequestOptionsBuilder::default()
            .url("https://example.com/")
            .method(TransportMethod::Put)
            .body(b"payload".to_vec())
            .headers(vec!["X-Test: abc".to_string()])
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(5))
            .follow_redirects(true)
            .max_redirects(2_usize)
            .verify_peer(false)
            .verify_host(HostVerification::Disabled)
            .return_body(true)
            .user_agent("agent/1.0")
            .build()
            .unwrap();

        let request = TransportRequest::from(options);

        assert_eq!(request.url, "https://example.com/");
        assert_eq!(request.method, TransportMethod::Put);
        assert_eq!(request.body, Some(b"payload".to_vec()));
        assert_eq!(request.headers, vec!["X-Test: abc".to_string()]);
        assert_eq!(request.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert!(request.follow_redirects);
        assert_eq!(request.max_redirects, Some(2));
        assert!(!request.verify_peer);
        assert_eq!(request.verify_host, HostVerification::Disabled);
        assert!(request.return_body);
        assert_eq!(request.user_agent.as_deref(), Some("agent/1.0"));
    }
}
