//! # Request options
//!
//! This module contains the [`RequestOptions`] struct and its builder.
//!
//! Options are a mapping from option name to value, where every field left as
//! `None` means "not set". Two sets are combined with
//! [`RequestOptions::merge`], which always lets the receiver win.

use derive_builder::Builder;
use std::time::Duration;

use crate::core::{HostVerification, TransportMethod};

/// Options used to configure a single exchange.
///
/// Use [`RequestOptionsBuilder`] to set only the options you need; everything
/// else stays unset and is filled in from the defaults of the operation it is
/// passed to.
///
/// # Examples
/// ```
/// use http_requester::core::RequestOptionsBuilder;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = RequestOptionsBuilder::default()
///     .connect_timeout(Duration::from_secs(1))
///     .user_agent("my-agent/1.0")
///     .build()?;
///
/// assert_eq!(options.connect_timeout, Some(Duration::from_secs(1)));
/// assert_eq!(options.follow_redirects, None);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq)]
#[builder(pattern = "owned", default, setter(into, strip_option))]
pub struct RequestOptions {
    /// Target URL.
    pub url: Option<String>,

    /// Hand the response body back as a string.
    pub return_body: Option<bool>,

    /// Maximum time allowed for establishing the connection.
    pub connect_timeout: Option<Duration>,

    /// Maximum time allowed for the whole exchange.
    pub timeout: Option<Duration>,

    /// Follow `3xx` responses carrying a `Location` header.
    pub follow_redirects: Option<bool>,

    /// Redirect cap.
    pub max_redirects: Option<usize>,

    /// Verify the peer certificate chain.
    pub verify_peer: Option<bool>,

    /// Host name check against the peer certificate.
    ///
    /// The bundled reqwest transport can only drop the host check together
    /// with the certificate check, so [`HostVerification::Disabled`] combined
    /// with `verify_peer` set to `true` fails with [`BadFunctionArgument`].
    ///
    /// [`BadFunctionArgument`]: crate::core::TransportErrorKind::BadFunctionArgument
    pub verify_host: Option<HostVerification>,

    /// Request method.
    pub method: Option<TransportMethod>,

    /// Raw request body.
    pub body: Option<Vec<u8>>,

    /// `User-Agent` header value.
    pub user_agent: Option<String>,

    /// Header lines in `Name: Value` form.
    ///
    /// Both request operations overwrite this with the serialized `headers`
    /// argument after merging, so setting it here has no effect there.
    pub headers: Option<Vec<String>>,
}

impl RequestOptions {
    /// Create a [`RequestOptionsBuilder`].
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }

    /// Left-biased merge.
    ///
    /// Every option set on `self` is kept. Options missing on `self` are
    /// taken from `defaults`.
    pub fn merge(self, defaults: RequestOptions) -> RequestOptions {
        RequestOptions {
            url: self.url.or(defaults.url),
            return_body: self.return_body.or(defaults.return_body),
            connect_timeout: self.connect_timeout.or(defaults.connect_timeout),
            timeout: self.timeout.or(defaults.timeout),
            follow_redirects: self.follow_redirects.or(defaults.follow_redirects),
            max_redirects: self.max_redirects.or(defaults.max_redirects),
            verify_peer: self.verify_peer.or(defaults.verify_peer),
            verify_host: self.verify_host.or(defaults.verify_host),
            method: self.method.or(defaults.method),
            body: self.body.or(defaults.body),
            user_agent: self.user_agent.or(defaults.user_agent),
            headers: self.headers.or(defaults.headers),
        }
    }
}
