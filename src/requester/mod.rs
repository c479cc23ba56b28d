//! # Requester
//!
//! GET and POST helpers with default options, custom headers and a switch
//! for TLS verification.
//!
//! Both operations build an effective option set the same way:
//!
//! 1. caller `options` are merged over the operation defaults with
//!    [`RequestOptions::merge`], so a caller option always wins;
//! 2. the `headers` argument is serialized into `Name: Value` lines and
//!    assigned last, replacing any header lines set in `options`.
//!
//! The [`get`] and [`post`] free functions use the bundled reqwest
//! transport. Use [`HttpRequester::with_transport`] to plug in another one.

#[doc(inline)]
pub use body::RequestBody;
pub mod body;

#[doc(inline)]
pub use result::Response;
pub mod result;

use log::{debug, warn};
use std::{collections::HashMap, time::Duration};

use crate::core::{
    utils::headers::to_header_lines, HostVerification, RequestOptions, Transport,
    TransportError, TransportMethod,
};
#[cfg(all(feature = "reqwest", feature = "blocking"))]
use crate::transport::TransportReqwest;

/// Header name to header value.
pub type Headers = HashMap<String, String>;

/// Connect timeout used unless the caller sets one.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless GET/POST requester.
///
/// Holds nothing but its transport, every call is independent of the others.
///
/// # Examples
/// ```no_run
/// use http_requester::requester::{Headers, HttpRequester};
/// use http_requester::core::RequestOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let requester = HttpRequester::new();
/// let headers = Headers::from([("Accept".into(), "text/plain".into())]);
///
/// let options = RequestOptions::default();
///
/// let response = requester.get("https://example.com/", &headers, options, true)?;
/// println!("{}: {}", response.status_code(), response.content());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct HttpRequester<T> {
    transport: T,
}

#[cfg(all(feature = "reqwest", feature = "blocking"))]
impl HttpRequester<TransportReqwest> {
    /// Create requester backed by [`TransportReqwest`].
    pub fn new() -> Self {
        Self::with_transport(TransportReqwest::new())
    }
}

impl<T> HttpRequester<T>
where
    T: Transport,
{
    /// Create requester which sends through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Issue a GET request.
    ///
    /// Defaults filled in under caller `options`: target `url`, body returned,
    /// 10 s connect timeout, redirects followed, and peer plus strict host
    /// verification when `ssl_verify` is set (both disabled otherwise).
    ///
    /// # Errors
    /// [`TransportError`] when the exchange could not be completed. HTTP
    /// error statuses are returned as [`Response`]s.
    pub fn get(
        &self,
        url: &str,
        headers: &Headers,
        options: RequestOptions,
        ssl_verify: bool,
    ) -> Result<Response, TransportError> {
        let defaults = RequestOptions {
            follow_redirects: Some(true),
            ..common_defaults(url, ssl_verify)
        };

        self.execute(effective_options(options, defaults, headers))
    }

    /// Issue a POST request with `data` as the body.
    ///
    /// Defaults filled in under caller `options`: target `url`, body returned,
    /// 10 s connect timeout, `POST` method, the encoded `data` as the body, and
    /// TLS verification as for [`get`]. Redirects are not followed unless the
    /// caller asks for it.
    ///
    /// # Errors
    /// [`TransportError`] when the exchange could not be completed.
    ///
    /// [`get`]: HttpRequester::get
    pub fn post<B>(
        &self,
        url: &str,
        data: B,
        headers: &Headers,
        options: RequestOptions,
        ssl_verify: bool,
    ) -> Result<Response, TransportError>
    where
        B: Into<RequestBody>,
    {
        let defaults = RequestOptions {
            method: Some(TransportMethod::Post),
            body: Some(data.into().encode()),
            ..common_defaults(url, ssl_verify)
        };

        self.execute(effective_options(options, defaults, headers))
    }

    fn execute(&self, options: RequestOptions) -> Result<Response, TransportError> {
        self.transport.send(options.into()).map(Response::from)
    }
}

fn common_defaults(url: &str, ssl_verify: bool) -> RequestOptions {
    if !ssl_verify {
        warn!("TLS verification disabled for {}", url);
    }

    RequestOptions {
        url: Some(url.to_string()),
        return_body: Some(true),
        connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
        verify_peer: Some(ssl_verify),
        verify_host: Some(if ssl_verify {
            HostVerification::Strict
        } else {
            HostVerification::Disabled
        }),
        ..Default::default()
    }
}

fn effective_options(
    options: RequestOptions,
    defaults: RequestOptions,
    headers: &Headers,
) -> RequestOptions {
    let mut effective = options.merge(defaults);
    effective.headers = Some(to_header_lines(headers));
    debug!("{}", describe(&effective));

    effective
}

/// One-line summary of an option set without header values or body.
fn describe(options: &RequestOptions) -> String {
    format!(
        "{} {} (connect timeout: {:?}, timeout: {:?}, follow redirects: {:?}, \
         verify peer: {:?}, verify host: {:?}, {} header(s), {} body byte(s))",
        options.method.unwrap_or_default(),
        options.url.as_deref().unwrap_or_default(),
        options.connect_timeout,
        options.timeout,
        options.follow_redirects,
        options.verify_peer,
        options.verify_host,
        options.headers.as_ref().map_or(0, Vec::len),
        options.body.as_ref().map_or(0, Vec::len),
    )
}

/// Issue a GET request with the bundled reqwest transport.
///
/// See [`HttpRequester::get`].
///
/// # Examples
/// ```no_run
/// use http_requester::{core::RequestOptions, requester::Headers};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = RequestOptions::default();
///
/// let response = http_requester::get("https://example.com/", &Headers::new(), options, true)?;
///
/// assert_eq!(response.status_code(), 200);
/// # Ok(())
/// # }
/// ```
#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub fn get(
    url: &str,
    headers: &Headers,
    options: RequestOptions,
    ssl_verify: bool,
) -> Result<Response, TransportError> {
    HttpRequester::new().get(url, headers, options, ssl_verify)
}

/// Issue a POST request with the bundled reqwest transport.
///
/// See [`HttpRequester::post`].
#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub fn post<B>(
    url: &str,
    data: B,
    headers: &Headers,
    options: RequestOptions,
    ssl_verify: bool,
) -> Result<Response, TransportError>
where
    B: Into<RequestBody>,
{
    HttpRequester::new().post(url, data, headers, options, ssl_verify)
}
