//! Axum router wiring.
//!
//! `/api/users` routes sit behind admission control (outermost), request
//! metrics, and a per-request timeout; the operational routes are merged in
//! unguarded.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tower_http::timeout::TimeoutLayer;

use crate::{api::users, app_state::AppState, config::ServerSection, obs, ops, policy};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .layer(DefaultBodyLimit::max(state.cfg().server.max_body_bytes))
        .layer(request_timeout(&state.cfg().server))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .layer(middleware::from_fn_with_state(state.clone(), policy::admit));

    let ops = Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics));

    api.merge(ops).with_state(state)
}

/// Requests still running after `request_timeout_ms` are answered with 408.
pub(crate) fn request_timeout(server: &ServerSection) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_millis(server.request_timeout_ms))
}
