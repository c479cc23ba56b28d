//! # Error types
//!
//! This module contains the error type returned when an exchange with the
//! remote server could not be completed.
//!
//! HTTP error statuses (`4xx`, `5xx`) are not errors here: they come back as
//! ordinary [`Response`]s and it is up to the caller to interpret them.
//!
//! [`Response`]: crate::requester::Response

use std::{error::Error as StdError, fmt::Display};

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// Category of a transport failure.
///
/// Every kind maps onto a stable, non-zero numeric [`code`]. The numbering
/// follows the classic libcurl error codes, so callers which used to match on
/// those values keep working.
///
/// [`code`]: TransportErrorKind::code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// URL scheme is something other than `http` or `https`.
    UnsupportedProtocol,

    /// Underlying client could not be constructed.
    FailedInit,

    /// URL is missing or can't be parsed.
    UrlMalformat,

    /// Host name could not be resolved.
    CouldntResolveHost,

    /// Connection refused, reset or host unreachable.
    CouldntConnect,

    /// Connect timeout or total timeout elapsed.
    OperationTimedOut,

    /// TLS handshake failed.
    SslConnectError,

    /// One of the request parts (e.g. a header line) is malformed.
    BadFunctionArgument,

    /// Redirect limit reached.
    TooManyRedirects,

    /// Request could not be written to the peer.
    SendError,

    /// Response could not be read from the peer.
    RecvError,

    /// Peer certificate was rejected.
    PeerFailedVerification,
}

impl TransportErrorKind {
    /// Numeric code of the failure. Never zero.
    pub fn code(&self) -> u32 {
        match self {
            Self::UnsupportedProtocol => 1,
            Self::FailedInit => 2,
            Self::UrlMalformat => 3,
            Self::CouldntResolveHost => 6,
            Self::CouldntConnect => 7,
            Self::OperationTimedOut => 28,
            Self::SslConnectError => 35,
            Self::BadFunctionArgument => 43,
            Self::TooManyRedirects => 47,
            Self::SendError => 55,
            Self::RecvError => 56,
            Self::PeerFailedVerification => 60,
        }
    }

    /// Human-readable description of the failure category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedProtocol => "unsupported protocol",
            Self::FailedInit => "failed initialization",
            Self::UrlMalformat => "URL using bad/illegal format or missing URL",
            Self::CouldntResolveHost => "couldn't resolve host name",
            Self::CouldntConnect => "couldn't connect to server",
            Self::OperationTimedOut => "timeout was reached",
            Self::SslConnectError => "SSL connect error",
            Self::BadFunctionArgument => "a request part was given a bad argument",
            Self::TooManyRedirects => "number of redirects hit maximum amount",
            Self::SendError => "failed sending data to the peer",
            Self::RecvError => "failure when receiving data from the peer",
            Self::PeerFailedVerification => "SSL peer certificate was not OK",
        }
    }
}

impl Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Transport error type
///
/// Returned when the transport layer could not complete the request/response
/// exchange (DNS, connect, TLS, timeout, I/O failures). It carries the numeric
/// code of the failure and a message of the form
/// `"transport error: <description>"`.
///
/// # Examples
/// ```
/// use http_requester::core::{TransportError, TransportErrorKind};
///
/// let error = TransportError::new(TransportErrorKind::CouldntConnect);
///
/// assert_eq!(error.code(), 7);
/// assert_eq!(error.message(), "transport error: couldn't connect to server");
/// ```
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    kind: TransportErrorKind,

    message: String,

    #[source]
    source: Option<BoxedSource>,
}

impl TransportError {
    /// Create error of the given kind without an underlying cause.
    pub fn new(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            message: format!("transport error: {}", kind.description()),
            source: None,
        }
    }

    /// Create error of the given kind caused by `source`.
    pub fn with_source<E>(kind: TransportErrorKind, source: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        Self {
            source: Some(source.into()),
            ..Self::new(kind)
        }
    }

    /// Failure category.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// Numeric code reported by the transport layer.
    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    /// `"transport error: <description>"`
    pub fn message(&self) -> &str {
        &self.message
    }
}
