//! Query-string extractor for Axum
//!
//! `ApiQuery<T>` works like `axum::extract::Query<T>`, but a malformed
//! query string is answered inside the `ApiResponse` envelope instead of
//! axum's plain-text rejection.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiResponse;

/// An extractor that deserializes the query string.
///
/// # Usage
///
/// ```ignore
/// async fn handler(ApiQuery(query): ApiQuery<FreeQuery>) {
///     // `query.at` parsed, or the request was already answered with 400
/// }
/// ```
pub struct ApiQuery<T>(pub T);

/// Error type for `ApiQuery` extraction failures.
pub struct ApiQueryRejection(QueryRejection);

impl IntoResponse for ApiQueryRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(format!("Invalid query: {}", self.0.body_text()));
        (self.0.status(), Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiQueryRejection)?;

        Ok(ApiQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
