//! userhub core: the user record model, the in-memory store, the admission
//! limiter, and the error surface shared with the gateway.
//!
//! This crate carries no transport or runtime dependencies. Every operation is
//! synchronous and in-memory, so the gateway can call it from async handlers
//! without holding a lock across an `.await`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `UserHubError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod admission;
pub mod error;
pub mod model;
pub mod store;

pub use admission::AdmissionLimiter;
/// Shared result type.
pub use error::{ClientCode, Result, UserHubError};
pub use model::{User, UserId, UserInput};
pub use store::UserStore;
