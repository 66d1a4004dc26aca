//! HTTP layer.
//!
//! This module provides:
//! - The `Transport` seam that performs raw GET requests
//! - A reqwest-backed transport
//! - `HttpClient`, which merges configured headers onto every request

pub mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod reqwest_transport;
pub mod transport;

pub use client::{header_map, HttpClient};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{ByteStream, Transport, TransportResponse};
