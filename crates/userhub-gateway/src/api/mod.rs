//! User CRUD endpoints and their HTTP error mapping.

pub mod error;
pub mod users;

pub use error::ApiError;
