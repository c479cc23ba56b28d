//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response of a completed exchange.
//! It is used as the response type for the [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html

use std::collections::HashMap;

/// This struct is used to represent the response of a completed exchange.
/// It is used as the response type for the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response, `0` if unknown
    pub status: u16,

    /// headers of the response
    pub headers: HashMap<String, String>,

    /// body of the response, `None` if empty or not requested
    pub body: Option<Vec<u8>>,
}
