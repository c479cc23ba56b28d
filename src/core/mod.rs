//! # Core
//!
//! Transport-agnostic building blocks of the requester.
//!
//! The `core` module contains the error type, the request option set and the
//! [`Transport`] seam that the bundled reqwest transport (or your own)
//! implements.

pub use error::{TransportError, TransportErrorKind};
pub mod error;

pub use transport::Transport;
pub mod transport;

pub use transport_request::{HostVerification, TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use request_options::{RequestOptions, RequestOptionsBuilder, RequestOptionsBuilderError};
pub mod request_options;

pub mod utils;
