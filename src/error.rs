use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CareError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{field} is out of range")]
    OutOfRange { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Invalid {key} value: {reason}")]
    Config { key: String, reason: String },

    #[error("Directory lock poisoned")]
    LockPoisoned,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CareResult<T> = Result<T, CareError>;

impl CareError {
    pub fn member_not_found(id: impl ToString) -> Self {
        CareError::NotFound {
            entity_type: "Member".into(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CareError::BlankField { .. }
            | CareError::NonPositive { .. }
            | CareError::MalformedPayload => StatusCode::BAD_REQUEST,
            CareError::NotFound { .. } => StatusCode::NOT_FOUND,
            CareError::AlreadyExists { .. } => StatusCode::CONFLICT,
            CareError::Config { .. }
            | CareError::OutOfRange { .. }
            | CareError::LockPoisoned
            | CareError::Database(_)
            | CareError::Io(_)
            | CareError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Lookup failures do not echo the requested id.
    pub fn public_message(&self) -> String {
        match self {
            CareError::NotFound { entity_type, .. } => format!("{} not found", entity_type),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for CareError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = json!({ "success": false, "message": self.public_message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_not_found_has_plain_message() {
        let err = CareError::member_not_found(999);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Member not found");
        assert_eq!(err.to_string(), "Member not found: 999");
    }

    #[test]
    fn blank_field_is_bad_request() {
        let err = CareError::BlankField {
            field: "firstName".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "firstName cannot be blank");
    }
}
