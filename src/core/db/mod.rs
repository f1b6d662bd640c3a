//! Database Module
//!
//! The data access layer, split into focused submodules:
//! - **Connection Management** (`connection.rs`): opens and owns the single connection
//! - **Schema** (`schema.rs`): creates or verifies the employee/role/department tables
//! - **Queries** (`query.rs`): detailed and brief read projections
//! - **Commands** (`command.rs`): single-row inserts and partial updates
//!
//! All operations are methods on [`Database`], so nothing can run before a
//! connection exists.
pub mod command;
pub mod connection;
pub mod query;
pub mod schema;

pub use connection::Database;
