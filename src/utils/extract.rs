//! Extractores propios
//!
//! `AppJson` envuelve `axum::Json` para que los rechazos del cuerpo
//! (JSON inválido, tipos incorrectos, content-type ausente) salgan con el
//! mismo formato `{error, message, details, code}` que el resto de errores.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::utils::errors::AppError;

/// Cuerpo JSON cuyos rechazos se convierten en `AppError::BadRequest`
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
