use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use userhub_core::{ClientCode, UserHubError};

/// HTTP face of [`UserHubError`].
#[derive(Debug)]
pub struct ApiError(pub UserHubError);

impl From<UserHubError> for ApiError {
    fn from(e: UserHubError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(UserHubError::BadRequest(msg.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
