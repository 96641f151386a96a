//! Request building for the uinames service.
//!
//! [`Request::new`] applies [`RequestOption`]s in order to an empty query
//! parameter set and produces an immutable GET descriptor that can be sent
//! any number of times.
//!
//! # Example
//!
//! ```
//! use uinames_core::{Request, RequestOption};
//!
//! let request = Request::new([RequestOption::Amount(3), RequestOption::ExtraData])
//!     .expect("valid options");
//! assert_eq!(
//!     request.url().as_str(),
//!     "https://uinames.com/api/?amount=3&ext="
//! );
//! ```

use std::collections::BTreeMap;

use derive_more::Display;
use url::Url;

use crate::{Error, HttpClient, Identity, Method, Result, to_query_string};

/// Base endpoint of the uinames service.
pub const BASE_URL: &str = "https://uinames.com/api/";

/// Accumulating query parameter set.
///
/// The ordered map keeps the encoded query canonical: sorted by key, not by
/// insertion order.
type QueryParams = BTreeMap<&'static str, String>;

/// Gender restriction for generated identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Gender {
    /// Only female identities.
    #[display("female")]
    Female,
    /// Only male identities.
    #[display("male")]
    Male,
}

/// A named query option applied while building a [`Request`].
///
/// Options are applied in the order given; the last write per query key
/// wins. A failing option aborts construction without mutating previously
/// applied parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Count of identities to request.
    ///
    /// Valid amounts are 1 through 500 (inclusive); anything else fails
    /// with [`Error::InvalidAmount`].
    Amount(u16),
    /// Request full identity data.
    ///
    /// Without this flag the service fills only name, surname, gender, and
    /// region; every other field comes back empty, zero, or absent.
    ExtraData,
    /// Restrict returned identities to one gender.
    Gender(Gender),
    /// Maximum number of characters in returned names.
    MaximumLength(u32),
    /// Minimum number of characters in returned names.
    MinimumLength(u32),
    /// Restrict returned identities to a geographic region.
    Region(String),
}

impl RequestOption {
    /// Apply this option to the accumulating parameter set.
    fn apply(self, params: &mut QueryParams) -> Result<()> {
        match self {
            Self::Amount(amount) => {
                if !(1..=500).contains(&amount) {
                    return Err(Error::InvalidAmount { amount });
                }
                params.insert("amount", amount.to_string());
            }
            Self::ExtraData => {
                params.insert("ext", String::new());
            }
            Self::Gender(gender) => {
                params.insert("gender", gender.to_string());
            }
            Self::MaximumLength(length) => {
                params.insert("maxlen", length.to_string());
            }
            Self::MinimumLength(length) => {
                params.insert("minlen", length.to_string());
            }
            Self::Region(region) => {
                params.insert("region", region);
            }
        }

        Ok(())
    }
}

/// An immutable GET request descriptor for the uinames service.
///
/// Built once per desired query shape and reusable across repeated
/// [`send`](Request::send) calls; nothing mutates after construction. The
/// descriptor owns no pacing: the service rate-limits callers, and
/// respecting that limit is the caller's business.
#[derive(Debug, Clone)]
pub struct Request {
    url: Url,
}

impl Request {
    /// Build a request against the fixed [`BASE_URL`] endpoint.
    ///
    /// Options are applied in order; the first failing option aborts
    /// construction and its error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if an option fails validation or the query cannot
    /// be encoded.
    pub fn new(options: impl IntoIterator<Item = RequestOption>) -> Result<Self> {
        Self::with_base_url(Url::parse(BASE_URL)?, options)
    }

    /// Build a request against an alternate compatible endpoint, such as a
    /// mirror or a test server.
    ///
    /// # Errors
    ///
    /// Returns an error if an option fails validation or the query cannot
    /// be encoded.
    pub fn with_base_url(
        base_url: Url,
        options: impl IntoIterator<Item = RequestOption>,
    ) -> Result<Self> {
        let mut params = QueryParams::new();
        for option in options {
            option.apply(&mut params)?;
        }

        let query = to_query_string(&params)?;
        let mut url = base_url;
        url.set_query((!query.is_empty()).then_some(query.as_str()));

        Ok(Self { url })
    }

    /// Fully-resolved request URL: endpoint plus encoded query string.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method; always GET.
    #[must_use]
    pub fn method(&self) -> Method {
        Method::GET
    }

    /// Send this request through `client` and decode the response into
    /// identity records.
    ///
    /// One exchange per call: execute the request, read the body, decode.
    /// The descriptor itself is untouched and can be sent again.
    ///
    /// # Errors
    ///
    /// Returns a transport error from `client` unchanged, a service error
    /// for a well-formed non-200 response, or a decode error when the body
    /// cannot be interpreted.
    pub async fn send(&self, client: &impl HttpClient) -> Result<Vec<Identity>> {
        let response = client.execute(self.clone()).await?;
        response.into_identities()
    }
}
