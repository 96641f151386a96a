//! Client for the uinames fake-identity service.
//!
//! Builds parameterized GET requests against `https://uinames.com/api/`,
//! sends them over a bundled hyper transport, and decodes the JSON
//! responses into [`Identity`] records.
//!
//! # Example
//!
//! ```no_run
//! use uinames::{Gender, HyperClient, Request, RequestOption};
//!
//! # async fn demo() -> uinames::Result<()> {
//! let request = Request::new([
//!     RequestOption::Amount(3),
//!     RequestOption::ExtraData,
//!     RequestOption::Gender(Gender::Female),
//! ])?;
//!
//! // The descriptor is immutable and can be sent as often as needed.
//! let identities = request.send(&HyperClient::new()).await?;
//! for identity in &identities {
//!     println!("{} {} ({})", identity.name, identity.surname, identity.region);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! For one-off calls, [`fetch`] wraps the build-send-decode cycle.

mod client;
pub mod prelude;

pub use client::HyperClient;

// Re-export core types
pub use uinames_core::{
    BASE_URL, CreditCard, Error, Gender, HttpClient, Identity, Method, Request, RequestOption,
    Response, Result, StatusCode, from_json, to_query_string,
};

// Re-export url so callers can hand Request::with_base_url an alternate endpoint
pub use url;

/// Fetch identities from the uinames service in one call.
///
/// Builds a request from `options` against [`BASE_URL`] and sends it
/// through a fresh [`HyperClient`] with the default timeout. Build the
/// client yourself to tune the timeout or reuse connections across calls.
///
/// # Errors
///
/// Returns an error if an option fails validation, the exchange fails, or
/// the response cannot be decoded.
///
/// # Example
///
/// ```no_run
/// use uinames::RequestOption;
///
/// # async fn demo() -> uinames::Result<()> {
/// let identities = uinames::fetch([RequestOption::Amount(5)]).await?;
/// assert_eq!(identities.len(), 5);
/// # Ok(())
/// # }
/// ```
pub async fn fetch(options: impl IntoIterator<Item = RequestOption>) -> Result<Vec<Identity>> {
    Request::new(options)?.send(&HyperClient::new()).await
}
