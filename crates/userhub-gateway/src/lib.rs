//! userhub gateway library entry.
//!
//! Wires config, the shared store and limiter, admission and metrics
//! middleware, the user CRUD handlers, and the event sinks into one axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod events;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
