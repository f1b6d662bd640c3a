//! Core Module
//!
//! Shared infrastructure for the employee manager: the data access layer
//! and the error type every other module reports through.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use db::Database;
pub use error::{EmsError, Result};
