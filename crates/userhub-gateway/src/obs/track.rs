use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

/// Count the request and observe its handling duration, labeled by method and
/// matched route template (raw path when no route matched).
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let labels = [("method", method.as_str()), ("endpoint", endpoint.as_str())];
    let metrics = state.metrics();
    metrics.http_requests.inc(&labels);

    let start = Instant::now();
    let resp = next.run(req).await;
    metrics.http_duration.observe(&labels, start.elapsed());

    resp
}
