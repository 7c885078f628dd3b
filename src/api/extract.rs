//! Request Body Extractor
//!
//! JSON bodies for the write endpoints. A request without a JSON body is read
//! as an empty object, so the handlers answer with their field-set message
//! instead of a content-type complaint.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// JSON request body that falls back to `T::default()` when absent.
///
/// Only a JSON body that fails to parse is rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            debug!("Request body is not JSON, treating it as empty");
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateBookRequest;
    use axum::body::Body;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<CreateBookRequest, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/api/books");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        JsonBody::<CreateBookRequest>::from_request(req, &())
            .await
            .map(|JsonBody(value)| value)
    }

    #[tokio::test]
    async fn test_json_body_is_parsed() {
        let req = extract(Some("application/json"), r#"{"isbn13":"9780553173253"}"#)
            .await
            .unwrap();
        assert_eq!(req.isbn13.as_deref(), Some("9780553173253"));
        assert!(req.author.is_none());
    }

    #[tokio::test]
    async fn test_content_type_parameters_are_accepted() {
        let req = extract(Some("application/json; charset=utf-8"), r#"{"title":"Dune"}"#)
            .await
            .unwrap();
        assert_eq!(req.title.as_deref(), Some("Dune"));
    }

    #[tokio::test]
    async fn test_missing_content_type_reads_as_empty() {
        let req = extract(None, "").await.unwrap();
        assert!(req.isbn13.is_none() && req.author.is_none() && req.title.is_none());

        let req = extract(Some("text/plain"), "isbn13=9780553173253").await.unwrap();
        assert!(req.isbn13.is_none());
    }

    #[tokio::test]
    async fn test_empty_json_body_reads_as_empty() {
        let req = extract(Some("application/json"), "  \n").await.unwrap();
        assert!(req.isbn13.is_none());
    }

    #[tokio::test]
    async fn test_broken_json_is_rejected() {
        let err = extract(Some("application/json"), r#"{"invalid json"#)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
