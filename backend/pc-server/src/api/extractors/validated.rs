//! Body extractors whose rejections use the API error shape.
//!
//! axum's own `Json` answers shape errors with 422 and a plain-text body;
//! these wrappers turn every body rejection into a 400 `VALIDATION_ERROR`.

use crate::ApiError;

use std::future::Future;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that must deserialize into `T`
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(Self(value)),
                Err(rejection) => Err(ApiError::validation(None, rejection.body_text())),
            }
        }
    }
}

/// `application/x-www-form-urlencoded` body that must deserialize into `T`
#[derive(Debug)]
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Self(value)),
                Err(rejection) => Err(ApiError::validation(None, rejection.body_text())),
            }
        }
    }
}
