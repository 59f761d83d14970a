//! Request extractors that report failures as [`DirectoryError`] bodies.

use axum::extract::{Form, FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::DirectoryError;

/// Submission body accepted either as `application/x-www-form-urlencoded`
/// or as `application/json`, picked by the `Content-Type` header.
///
/// Anything that is not JSON is decoded as a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = DirectoryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| DirectoryError::Validation(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| DirectoryError::Validation(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// Path parameter extractor whose rejection is a validation error body
/// instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = DirectoryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| DirectoryError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
