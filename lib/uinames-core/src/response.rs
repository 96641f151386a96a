//! HTTP response handling.
//!
//! [`Response`] is the plain data result of one completed exchange: status
//! code plus fully-read body bytes. [`Response::into_identities`] turns it
//! into identity records, surfacing service-side rejections as
//! [`Error::Service`].

use bytes::Bytes;
use serde::Deserialize;

use crate::identity::IdentityRecord;
use crate::{Error, Identity, Result, from_json};

/// Wire shape of the service's error payload.
///
/// A payload without the `error` field maps to an empty message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: String,
}

/// HTTP response with status code and body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Bytes,
}

impl Response {
    /// Creates a response from a status code and fully-read body bytes.
    ///
    /// An absent body is represented by empty bytes.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Status is 200, the only success status the service emits.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Decode this response into identity records.
    ///
    /// A 200 body whose first non-whitespace byte is `[` decodes as a list,
    /// elementwise; any other 200 body decodes as a single record wrapped
    /// in a one-element vector. A non-200 body decodes as the service's
    /// error payload and comes back as [`Error::Service`].
    ///
    /// # Errors
    ///
    /// - [`Error::MissingBody`] when the body is empty, regardless of
    ///   status code.
    /// - [`Error::Service`] for a well-formed non-200 response.
    /// - A decode error when either payload is malformed JSON, or when an
    ///   embedded birthdate or photo fails conversion.
    pub fn into_identities(self) -> Result<Vec<Identity>> {
        if self.body.is_empty() {
            return Err(Error::MissingBody);
        }

        if !self.is_success() {
            let payload: ErrorBody = from_json(&self.body)?;
            return Err(Error::service(self.status, payload.error));
        }

        let records = if self.leading_byte() == Some(b'[') {
            from_json::<Vec<IdentityRecord>>(&self.body)?
        } else {
            vec![from_json::<IdentityRecord>(&self.body)?]
        };

        records.into_iter().map(Identity::try_from).collect()
    }

    /// First non-whitespace byte of the body.
    fn leading_byte(&self) -> Option<u8> {
        self.body
            .iter()
            .copied()
            .find(|byte| !byte.is_ascii_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str =
        r#"{"name":"Hannah","surname":"Schmidt","gender":"female","region":"Germany"}"#;

    #[test]
    fn response_basic() {
        let response = Response::new(200, ITEM);

        assert_eq!(response.status(), 200);
        assert!(response.is_success());
        assert_eq!(response.body().as_ref(), ITEM.as_bytes());
    }

    #[test]
    fn non_200_is_not_success() {
        for status in [201, 301, 400, 404, 500] {
            assert!(!Response::new(status, ITEM).is_success(), "status {status}");
        }
    }

    #[test]
    fn object_body_yields_single_record() {
        let identities = Response::new(200, ITEM)
            .into_identities()
            .expect("identities");

        assert_eq!(identities.len(), 1);
        let identity = identities.first().expect("first identity");
        assert_eq!(identity.name, "Hannah");
        assert_eq!(identity.region, "Germany");
    }

    #[test]
    fn array_body_decodes_elementwise() {
        let body = format!(
            r#"[{ITEM},{{"name":"Ahmet","surname":"Erbay","gender":"male","region":"Turkey"}}]"#
        );

        let identities = Response::new(200, body)
            .into_identities()
            .expect("identities");

        assert_eq!(identities.len(), 2);
        assert_eq!(identities.first().expect("first").name, "Hannah");
        assert_eq!(identities.last().expect("last").name, "Ahmet");
    }

    #[test]
    fn list_marker_found_past_leading_whitespace() {
        let body = format!(" \n\t[{ITEM}]");

        let identities = Response::new(200, body)
            .into_identities()
            .expect("identities");

        assert_eq!(identities.len(), 1);
    }

    #[test]
    fn non_200_decodes_service_error() {
        let response = Response::new(400, r#"{"error":"Region or language not found"}"#);

        let err = response.into_identities().expect_err("should fail");

        assert!(err.is_service(), "expected service error, got: {err}");
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Bad Request - Region or language not found"
        );
    }

    #[test]
    fn error_body_without_message_yields_empty_service_message() {
        let response = Response::new(400, "{}");

        let err = response.into_identities().expect_err("should fail");

        assert!(err.is_service(), "expected service error, got: {err}");
        assert_eq!(err.to_string(), "Bad Request - ");
    }

    #[test]
    fn malformed_error_body_returns_decode_error() {
        let response = Response::new(400, "Clearly this is not JSON");

        let err = response.into_identities().expect_err("should fail");

        assert!(
            matches!(err, Error::JsonDeserialization { .. }),
            "got: {err}"
        );
    }

    #[test]
    fn empty_body_is_missing_body_regardless_of_status() {
        for status in [200, 400, 500] {
            let err = Response::new(status, Bytes::new())
                .into_identities()
                .expect_err("should fail");
            assert_eq!(err.to_string(), "missing HTTP response body");
        }
    }

    #[test]
    fn malformed_success_body_returns_decode_error() {
        let err = Response::new(200, "Clearly this is not JSON")
            .into_identities()
            .expect_err("should fail");

        let msg = err.to_string();
        assert!(
            msg.contains("expected value"),
            "expected parser detail in: {msg}"
        );
    }

    #[test]
    fn malformed_birthdate_surfaces_conversion_error() {
        let body = r#"{"name":"Hannah","birthday":{"mdy":"31/14/1984"}}"#;

        let err = Response::new(200, body)
            .into_identities()
            .expect_err("should fail");

        assert!(matches!(err, Error::InvalidBirthdate(_)), "got: {err}");
    }

    #[test]
    fn decode_error_in_list_names_the_element() {
        let body = format!(r#"[{ITEM},{{"name":"Ahmet","age":"old"}}]"#);

        let err = Response::new(200, body)
            .into_identities()
            .expect_err("should fail");

        let msg = err.to_string();
        assert!(msg.contains("[1].age"), "expected path in: {msg}");
    }
}
