use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use userhub_core::UserHubError;

use crate::api::ApiError;
use crate::app_state::AppState;

/// Reject with 429 when the limiter has no token; otherwise run the request.
pub async fn admit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.limiter().try_acquire() {
        state.metrics().admission_rejections.inc(&[]);
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "admission rejected");
        return ApiError(UserHubError::RateLimited).into_response();
    }
    next.run(req).await
}
