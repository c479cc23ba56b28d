//! Encoding and header helpers shared by the requester and the transports.

pub mod encoding;
pub mod headers;
