//! Outbound adapters implementing the repository ports.
//!
//! - **memory**: process-local store used for tests and demo runs.
//! - **persistence**: PostgreSQL repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! contain no matching logic.

pub mod memory;
pub mod persistence;
