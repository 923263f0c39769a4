//! Fire-and-forget observers for committed user mutations.
//!
//! Sinks run on their own tasks after the store change commits. A sink that
//! fails or hangs is invisible to the caller: nothing is awaited and no error
//! flows back into the response.

pub mod bus;
pub mod sinks;

pub use bus::{EventBus, EventSink, UserAction, UserEvent};
pub use sinks::{AuditLog, Notifier};
