//! Request extractors that reject with [`AppError`].
//!
//! Axum's built-in `Json` and `Query` extractors answer failures with plain-text bodies
//! and a mix of 400/415/422 statuses. These wrappers funnel every rejection through
//! `AppError::Validation`, so malformed input always yields 422 with an `{"error": ...}`
//! body.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body validated against `T`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

/// Query string deserialized into `T`.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        limit: i64,
    }

    /// Tests that a well-formed query string is deserialized.
    ///
    /// Expected: Ok with the parsed value
    #[tokio::test]
    async fn parses_query_string() {
        let req = Request::builder()
            .uri("/api/items?limit=5")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let ApiQuery(params) = ApiQuery::<Params>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(params.limit, 5);
    }

    /// Tests that a non-numeric query value is rejected as a validation error.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn rejects_malformed_query_value() {
        let req = Request::builder()
            .uri("/api/items?limit=many")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let result = ApiQuery::<Params>::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    /// Tests that a body missing required fields is rejected as a validation error.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn rejects_body_missing_fields() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"other": 1}"#))
            .unwrap();

        let result = ApiJson::<Params>::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    /// Tests that a body without a JSON content type is rejected as a validation error.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn rejects_body_without_json_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(r#"{"limit": 1}"#))
            .unwrap();

        let result = ApiJson::<Params>::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
