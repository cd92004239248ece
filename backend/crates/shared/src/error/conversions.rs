//! Error conversions
//!
//! Classification of database failures into [`ErrorKind`], and the HTTP
//! rendering of [`AppError`] when the `axum` feature is on.

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx classification (feature-gated)
// ============================================================================

/// Map a database failure to the kind of response it deserves.
///
/// Connection-level trouble is 503, bad data rejected by a constraint is
/// 400, everything else is 500.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // not_null_violation, check_violation
            Some("23502" | "23514") => ErrorKind::BadRequest,
            // Class 53: insufficient resources, class 57: operator intervention
            Some(code) if code.starts_with("53") || code.starts_with("57") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details, plus `message` for clients that read
        // the plain error text
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "message": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_error_kind() {
        use super::*;

        assert_eq!(
            sqlx_error_kind(&sqlx::Error::PoolTimedOut),
            ErrorKind::ServiceUnavailable
        );
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_eq!(
            sqlx_error_kind(&sqlx::Error::Io(io)),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            sqlx_error_kind(&sqlx::Error::RowNotFound),
            ErrorKind::InternalServerError
        );
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_body() {
        use crate::error::{app_error::AppError, kind::ErrorKind};
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::BadRequest, "Rex isn't hungry!")
            .with_action("Play with the pet before feeding it")
            .into_response();
        assert_eq!(response.status().as_u16(), 400);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["detail"], "Rex isn't hungry!");
        assert_eq!(json["message"], "Rex isn't hungry!");
        assert_eq!(json["action"], "Play with the pet before feeding it");
    }
}
