//! Top-level facade crate for userhub.
//!
//! Re-exports the core store/limiter types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use userhub_core::*;
}

pub mod gateway {
    pub use userhub_gateway::*;
}
