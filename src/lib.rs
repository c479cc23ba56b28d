//! # HTTP Requester
//!
//! Blocking GET and POST helpers returning a uniform [`Response`] (status code
//! and body) and failing with a typed [`TransportError`] only when the
//! exchange itself could not be completed.
//!
//! ## Overview
//!
//! ```no_run
//! use http_requester::{core::RequestOptions, requester::Headers};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let headers = Headers::from([("X-Test".into(), "abc".into())]);
//!
//! // caller options win over the defaults
//! let options = RequestOptions::builder()
//!     .connect_timeout(Duration::from_secs(2))
//!     .build()?;
//!
//! let response = http_requester::get("https://example.com/", &headers, options, true)?;
//! println!("{}", response.status_code());
//!
//! let response = http_requester::post(
//!     "https://example.com/form",
//!     [("a", "1"), ("b", "two words")],
//!     &headers,
//!     RequestOptions::default(),
//!     true,
//! )?;
//! println!("{}", response.content());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `reqwest` (default) - bundled [`TransportReqwest`] built on the `reqwest`
//!   crate
//! * `blocking` (default) - enables the blocking `reqwest` client, required by
//!   [`TransportReqwest`] and the [`get`] / [`post`] free functions
//!
//! Without them, implement [`Transport`] and use
//! [`HttpRequester::with_transport`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//!
//! [`Response`]: crate::requester::Response
//! [`TransportError`]: crate::core::TransportError
//! [`Transport`]: crate::core::Transport
//! [`HttpRequester::with_transport`]: crate::requester::HttpRequester::with_transport
//! [`TransportReqwest`]: crate::transport::TransportReqwest
//! [`log`]: https://docs.rs/log

#![warn(missing_docs)]

pub mod core;

pub mod requester;

pub mod transport;

#[doc(inline)]
pub use crate::core::{RequestOptions, TransportError, TransportErrorKind};

#[doc(inline)]
pub use requester::{HttpRequester, RequestBody, Response};

#[cfg(all(feature = "reqwest", feature = "blocking"))]
#[doc(inline)]
pub use requester::{get, post};
