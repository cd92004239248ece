//! Pets Error Types
//!
//! This module provides pets-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::sqlx_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::PetId;
use thiserror::Error;

use crate::domain::value_objects::PetNameError;

/// Pets-specific result type alias
pub type PetsResult<T> = Result<T, PetsError>;

/// Pets-specific error variants
#[derive(Debug, Error)]
pub enum PetsError {
    /// No pet with this id
    #[error("Pet {0} not found")]
    PetNotFound(PetId),

    /// Feeding rejected because hunger is zero
    #[error("{name} isn't hungry!")]
    NotHungry { name: String },

    /// Pet name failed validation
    #[error("{0}")]
    InvalidPetName(#[from] PetNameError),

    /// Path or body could not be read
    #[error("{0}")]
    InvalidRequest(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PetsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PetsError::PetNotFound(_) => ErrorKind::NotFound,
            PetsError::NotHungry { .. }
            | PetsError::InvalidPetName(_)
            | PetsError::InvalidRequest(_) => ErrorKind::BadRequest,
            PetsError::Database(e) => sqlx_error_kind(e),
        }
    }

    /// Convert to AppError
    ///
    /// Database details stay in the logs; the response only carries the
    /// reason phrase.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        match self {
            PetsError::Database(_) => AppError::new(kind, kind.as_str()),
            PetsError::NotHungry { .. } => AppError::new(kind, self.to_string())
                .with_action("Play with the pet before feeding it"),
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PetsError::Database(e) if self.kind().is_server_error() => {
                tracing::error!(error = %e, kind = %self.kind(), "Pets database error");
            }
            PetsError::Database(e) => {
                tracing::warn!(error = %e, "Pets database rejected write");
            }
            PetsError::NotHungry { name } => {
                tracing::info!(pet_name = %name, "Feeding rejected, pet isn't hungry");
            }
            _ => {
                tracing::debug!(error = %self, "Pets error");
            }
        }
    }
}

impl From<PathRejection> for PetsError {
    fn from(rejection: PathRejection) -> Self {
        PetsError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for PetsError {
    fn from(rejection: JsonRejection) -> Self {
        PetsError::InvalidRequest(rejection.body_text())
    }
}

impl From<PetsError> for AppError {
    fn from(err: PetsError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for PetsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
