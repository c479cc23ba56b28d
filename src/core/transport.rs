//! # Transport module
//!
//! This module contains the [`Transport`] trait.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.

use crate::core::{TransportError, TransportRequest, TransportResponse};

/// This trait is used to perform a single blocking request/response exchange.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// Implementations acquire whatever connection resources they need inside
/// [`send`] and release them before returning, on success and on failure.
///
/// # Examples
/// ```
/// use http_requester::core::{Transport, TransportError, TransportRequest, TransportResponse};
///
/// struct MyTransport;
///
/// impl Transport for MyTransport {
///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, TransportError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
///
/// [`send`]: Transport::send
pub trait Transport {
    /// Perform the exchange described by `req`.
    ///
    /// # Errors
    /// Should return a [`TransportError`] if the exchange cannot be completed.
    /// HTTP error statuses are successful exchanges.
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, TransportError>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(req)
    }
}
