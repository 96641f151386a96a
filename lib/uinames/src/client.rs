//! HTTP client implementation using hyper-util.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::{debug, warn};
use uinames_core::{Error, HttpClient, Request, Response, Result};

/// Default overall per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the uinames service, backed by hyper-util with rustls.
///
/// One overall timeout bounds each exchange: connecting, sending, and
/// reading the body. There are no retries, pooling knobs, or middleware;
/// the transport is a single straight-line GET.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use uinames::HyperClient;
///
/// let client = HyperClient::with_timeout(Duration::from_secs(10));
/// assert_eq!(client.timeout(), Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct HyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    timeout: Duration,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a client with the default 30 second timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom overall per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector());
        Self { inner, timeout }
    }

    /// Overall per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build a hyper request from a request descriptor.
    fn build_hyper_request(request: &Request) -> Result<http::Request<Empty<Bytes>>> {
        http::Request::builder()
            .method(request.method())
            .uri(request.url().as_str())
            .body(Empty::new())
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        debug!(url = %request.url(), "sending request");
        let hyper_request = Self::build_hyper_request(&request)?;

        // The timeout spans the whole exchange, body read included; hyper
        // resolves the request future as soon as headers arrive.
        let exchange = async {
            let response = self
                .inner
                .request(hyper_request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)??;

        if status == 200 {
            debug!(status, bytes = body.len(), "request completed");
        } else {
            warn!(status, "service returned non-success status");
        }

        Ok(Response::new(status, body))
    }
}

/// HTTPS connector with rustls and the Mozilla root certificates.
///
/// Plain HTTP is allowed alongside HTTPS so requests can target local test
/// servers.
fn https_connector() -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_default_timeout() {
        let client = HyperClient::new();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn client_custom_timeout() {
        let client = HyperClient::with_timeout(Duration::from_secs(60));
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn client_is_clone() {
        let client = HyperClient::new();
        let _cloned = client.clone();
    }

    #[test]
    fn client_is_debug() {
        let client = HyperClient::new();
        let debug = format!("{client:?}");
        assert!(debug.contains("HyperClient"));
    }

    #[test]
    fn build_hyper_request_carries_method_and_url() {
        let request = Request::new([]).expect("request");

        let hyper_request = HyperClient::build_hyper_request(&request).expect("hyper request");

        assert_eq!(hyper_request.method(), http::Method::GET);
        assert_eq!(hyper_request.uri(), "https://uinames.com/api/");
    }
}
