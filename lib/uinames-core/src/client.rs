//! HTTP client trait.
//!
//! [`HttpClient`] is the transport seam used by
//! [`Request::send`](crate::Request::send): given a request descriptor it
//! returns the completed exchange as a [`Response`], or a transport error.
//! The bundled hyper implementation lives in the `uinames` crate; tests
//! inject canned implementations instead.

use std::future::Future;

use crate::{Request, Response, Result};

/// HTTP transport capability.
///
/// Implementations perform one GET exchange: execute the request, read the
/// body to completion, and hand back the status code plus body bytes. Any
/// timeout policy belongs to the implementation; this layer has no opinion
/// on it.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the completed response.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails before the body is fully
    /// read:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
