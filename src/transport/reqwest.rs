//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to perform exchanges using the blocking client of the
//! [`reqwest`] crate.
//!
//! It requires the [`reqwest` and `blocking` features] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` and `blocking` features]: ../../index.html#features

use bytes::Bytes;
use log::{debug, info};
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{self, HeaderMap, HeaderName, HeaderValue},
    redirect::Policy,
    Method, StatusCode,
};
use std::{collections::HashMap, error::Error as StdError, io};

use crate::core::{
    utils::headers::{
        contains_header, parse_header_line, APPLICATION_FORM_URLENCODED, CONTENT_TYPE,
    },
    HostVerification, Transport, TransportError, TransportErrorKind, TransportMethod,
    TransportRequest, TransportResponse,
};

/// This struct is used to perform exchanges using the [`reqwest`] crate.
///
/// Every [`send`] builds its own blocking client configured from the request
/// (timeouts, redirect policy, TLS verification) and drops it before
/// returning, so no connection outlives the call.
///
/// Must not be used from inside an async runtime worker thread, wrap the
/// call with `spawn_blocking` there.
///
/// # Example
/// ```no_run
/// use http_requester::core::{Transport, TransportRequest};
/// use http_requester::transport::TransportReqwest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let response = TransportReqwest::new().send(TransportRequest {
///     url: "https://example.com/".into(),
///     return_body: true,
///     ..Default::default()
/// })?;
///
/// println!("{}", response.status);
/// # Ok(())
/// # }
/// ```
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`send`]: Transport::send
#[derive(Clone, Debug, Default)]
pub struct TransportReqwest;

impl Transport for TransportReqwest {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        info!("{} {}", request.method, request.url);

        let headers = prepare_headers(&request)?;
        let client = prepare_client(&request)?;
        let return_body = request.return_body;

        let response = prepare_request(&client, request)
            .headers(headers)
            .send()
            .map_err(into_transport_error)?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        debug!("received {} response", status);

        if !return_body {
            return Ok(create_result(status, headers, Bytes::new()));
        }

        response
            .bytes()
            .map_err(into_transport_error)
            .map(|bytes| create_result(status, headers, bytes))
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    pub fn new() -> Self {
        Self
    }
}

fn prepare_client(request: &TransportRequest) -> Result<Client, TransportError> {
    let redirect = match (request.follow_redirects, request.max_redirects) {
        (false, _) => Policy::none(),
        (true, Some(max)) => Policy::limited(max),
        (true, None) => Policy::default(),
    };

    // rustls has no host-only switch
    if request.verify_peer && request.verify_host == HostVerification::Disabled {
        return Err(TransportError::with_source(
            TransportErrorKind::BadFunctionArgument,
            "host name check can't be disabled while peer verification is on",
        ));
    }

    let mut builder = Client::builder()
        .connect_timeout(request.connect_timeout)
        .timeout(request.timeout)
        .redirect(redirect)
        .danger_accept_invalid_certs(!request.verify_peer);

    if let Some(user_agent) = &request.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    builder
        .build()
        .map_err(|err| TransportError::with_source(TransportErrorKind::FailedInit, err))
}

fn prepare_request(client: &Client, request: TransportRequest) -> RequestBuilder {
    let builder = client.request(prepare_method(request.method), request.url);

    match request.body {
        Some(body) => builder.body(body),
        None => builder,
    }
}

fn prepare_method(method: TransportMethod) -> Method {
    match method {
        TransportMethod::Get => Method::GET,
        TransportMethod::Head => Method::HEAD,
        TransportMethod::Post => Method::POST,
        TransportMethod::Put => Method::PUT,
        TransportMethod::Patch => Method::PATCH,
        TransportMethod::Delete => Method::DELETE,
    }
}

fn prepare_headers(request: &TransportRequest) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::with_capacity(request.headers.len() + 1);

    for line in &request.headers {
        let (name, value) = parse_header_line(line).ok_or_else(|| {
            TransportError::with_source(
                TransportErrorKind::BadFunctionArgument,
                format!("malformed header line: {line}"),
            )
        })?;

        let name = HeaderName::from_bytes(name.as_bytes()).map_err(invalid_argument)?;
        let value = HeaderValue::from_str(value).map_err(invalid_argument)?;

        headers.append(name, value);
    }

    if request.body.is_some() && !contains_header(&request.headers, CONTENT_TYPE) {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_FORM_URLENCODED),
        );
    }

    Ok(headers)
}

fn invalid_argument<E>(error: E) -> TransportError
where
    E: StdError + Send + Sync + 'static,
{
    TransportError::with_source(TransportErrorKind::BadFunctionArgument, error)
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)))
        .fold(HashMap::new(), |mut acc, (name, value)| {
            acc.entry(name.to_string())
                .and_modify(|existing: &mut String| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
            acc
        })
}

fn create_result(
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Bytes,
) -> TransportResponse {
    TransportResponse {
        status: status.as_u16(),
        headers,
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}

fn into_transport_error(error: reqwest::Error) -> TransportError {
    let kind = classify(&error);
    debug!("transport failure ({}): {}", kind.code(), error);

    TransportError::with_source(kind, error)
}

fn classify(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        return TransportErrorKind::OperationTimedOut;
    }

    if error.is_redirect() {
        return TransportErrorKind::TooManyRedirects;
    }

    if error.is_builder() {
        return match error.url() {
            Some(url) if !matches!(url.scheme(), "http" | "https") => {
                TransportErrorKind::UnsupportedProtocol
            }
            _ => TransportErrorKind::UrlMalformat,
        };
    }

    if error.is_connect() {
        return classify_connect(error);
    }

    if error.is_body() || error.is_decode() {
        return TransportErrorKind::RecvError;
    }

    if error.is_request() {
        return TransportErrorKind::SendError;
    }

    TransportErrorKind::RecvError
}

/// Walks the cause chain for a typed I/O or TLS failure, falling back to the
/// chain messages for resolver errors which hyper doesn't expose as a type.
fn classify_connect(error: &(dyn StdError + 'static)) -> TransportErrorKind {
    let mut cause = Some(error);

    while let Some(current) = cause {
        if let Some(kind) = classify_cause(current) {
            return kind;
        }
        cause = current.source();
    }

    classify_message(&error_chain(error))
}

fn classify_cause(error: &(dyn StdError + 'static)) -> Option<TransportErrorKind> {
    if let Some(tls) = error.downcast_ref::<rustls::Error>() {
        return Some(classify_tls(tls));
    }

    let io = error.downcast_ref::<io::Error>()?;

    // `io::Error::source` skips the wrapped error itself
    if let Some(tls) = io
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<rustls::Error>())
    {
        return Some(classify_tls(tls));
    }

    match io.kind() {
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::AddrNotAvailable => Some(TransportErrorKind::CouldntConnect),
        io::ErrorKind::TimedOut => Some(TransportErrorKind::OperationTimedOut),
        // only the TLS handshake reads while connecting
        io::ErrorKind::UnexpectedEof => Some(TransportErrorKind::SslConnectError),
        _ => None,
    }
}

fn classify_tls(error: &rustls::Error) -> TransportErrorKind {
    match error {
        rustls::Error::InvalidCertificate(_) => TransportErrorKind::PeerFailedVerification,
        _ => TransportErrorKind::SslConnectError,
    }
}

fn classify_message(chain: &str) -> TransportErrorKind {
    if chain.contains("dns error") || chain.contains("failed to lookup address") {
        TransportErrorKind::CouldntResolveHost
    } else {
        TransportErrorKind::CouldntConnect
    }
}

/// Lowercased messages of the error and all of its causes.
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }

    chain.to_lowercase()
}
