use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

use crate::templates::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] DbErr),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Splits driver errors into constraint violations and everything else, so
/// a dangling foreign key is reported differently from a lost connection.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Database(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Constraint(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to a visitor; database details stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            Self::Database(_) => "Database error occurred",
            Self::Constraint(_) => "The record conflicts with existing data",
            Self::Validation(msg) | Self::NotFound(msg) => msg.as_str(),
            Self::Internal(_) | Self::Other(_) => "An unexpected error occurred",
        }
    }

    /// Log at a level matching the kind of failure.
    pub fn log(&self) {
        match self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal(msg) => tracing::error!("Internal error: {}", msg),
            Self::Other(e) => tracing::error!("Unexpected error: {}", e),
            Self::Constraint(msg) => tracing::warn!("Constraint violation: {}", msg),
            Self::Validation(msg) => tracing::debug!("Rejected form: {}", msg),
            Self::NotFound(msg) => tracing::debug!("Not found: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let page = error_page(status, self.public_message());
        (status, Html(page.into_string())).into_response()
    }
}

/// JSON flavour of [`AppError`] for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();

        let body = Json(json!({
            "error": err.public_message(),
            "details": err.to_string(),
        }));

        (err.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;
