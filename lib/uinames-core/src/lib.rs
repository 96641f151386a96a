//! Core types for the uinames fake-identity service client.
//!
//! This crate provides the transport-independent pieces:
//! - [`Request`] and [`RequestOption`] - building GET requests against the service
//! - [`Response`] - decoding a completed exchange into identity records
//! - [`Identity`] and [`CreditCard`] - the decoded records
//! - [`Error`] and [`Result`] - error handling
//! - [`HttpClient`] - transport trait for executing requests
//! - [`Method`] and [`StatusCode`] - re-exported from the `http` crate
//!
//! Building a request is pure; the one network exchange per
//! [`Request::send`] goes through an injected [`HttpClient`]. The bundled
//! hyper transport lives in the `uinames` crate.

mod client;
mod codec;
mod error;
mod identity;
pub mod prelude;
mod request;
mod response;

pub use client::HttpClient;
pub use codec::{from_json, to_query_string};
pub use error::{Error, Result};
pub use identity::{CreditCard, Identity};
pub use request::{BASE_URL, Gender, Request, RequestOption};
pub use response::Response;

// Re-export http crate types for methods and status codes
pub use http::{Method, StatusCode};
