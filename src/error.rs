use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rejections a signup request can end in. The `Display` text doubles as the
/// `detail` field of the JSON error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Missing required parameter: email")]
    MissingEmail,

    #[error("{0}")]
    InvalidRequest(String),
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::ActivityFull => StatusCode::BAD_REQUEST,
            SignupError::MissingEmail | SignupError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Problems with a catalog handed to the registry at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity name must not be empty")]
    EmptyName,

    #[error("duplicate activity name: {0}")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(SignupError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::AlreadySignedUp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SignupError::ActivityFull.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            SignupError::MissingEmail.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            SignupError::InvalidRequest("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn detail_text_matches_api_contract() {
        assert_eq!(SignupError::NotFound.to_string(), "Activity not found");
        assert_eq!(
            SignupError::AlreadySignedUp.to_string(),
            "Student already signed up for this activity"
        );
    }
}
