//! CLI command implementations.

pub mod check;
pub mod session;
pub mod users;
pub mod version;
