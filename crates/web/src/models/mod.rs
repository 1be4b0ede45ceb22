//! Types stored outside the database.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};
