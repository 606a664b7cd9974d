//! Database schema and queries

pub mod init;
pub mod queries;

pub use init::*;
pub use queries::*;
