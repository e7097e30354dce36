use std::future::Future;
use std::time::Duration;

use anyhow::Result;

pub mod http;

/// A single HTTP GET capability with a per-request timeout.
///
/// Resolves to the response status code once the response has been fully
/// received, or to an error for any transport-level failure (DNS, connect,
/// TLS, timeout, malformed URL, broken body).
pub trait HttpProbe {
    fn get(&self, url: &str, timeout: Duration) -> impl Future<Output = Result<u16>>;
}
