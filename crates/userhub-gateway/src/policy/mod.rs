//! Admission policy layer.
//!
//! Gates every API request on the shared token bucket before any handler
//! logic (or store access) runs.

pub mod admission;

pub use admission::admit;
