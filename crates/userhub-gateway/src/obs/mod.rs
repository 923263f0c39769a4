//! Lightweight in-process metrics.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.
//! `track_requests` records per-request count and latency for the API routes.

pub mod metrics;
pub mod track;

pub use metrics::GatewayMetrics;
pub use track::track_requests;
