//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by
//! [`HttpRequester`].
//!
//! [`HttpRequester`]: crate::requester::HttpRequester

#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub use self::reqwest::TransportReqwest;
#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub mod reqwest;
