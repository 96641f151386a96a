//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions for
//! easy glob importing:
//!
//! ```ignore
//! use uinames::prelude::*;
//! ```

pub use crate::{
    BASE_URL, CreditCard, Error, Gender, HttpClient, HyperClient, Identity, Method, Request,
    RequestOption, Response, Result, StatusCode, fetch,
};
