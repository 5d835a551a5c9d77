use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingField(String),

    #[error("La categoria indicada no existe")]
    InvalidReference,

    #[error("No se enviaron campos para actualizar")]
    NoFieldsProvided,

    #[error("No se puede eliminar la categoria porque tiene productos asociados")]
    HasDependents,

    #[error("{0}")]
    NotFound(String),

    #[error("Error en la base de datos")]
    Db(#[from] sqlx::Error),

    #[error("Error interno del servidor")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidReference
            | AppError::NoFieldsProvided
            | AppError::HasDependents => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::Db(err) => Some(err.to_string()),
            AppError::Internal(err) if detail_enabled() => Some(err.to_string()),
            _ => None,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = ApiResponse::failure(self.to_string(), error);
        (status, Json(body)).into_response()
    }
}

// The original gates 500 detail on NODE_ENV=development.
fn detail_enabled() -> bool {
    std::env::var("APP_ENV").is_ok_and(|env| env == "development")
}

pub type AppResult<T> = Result<T, AppError>;
