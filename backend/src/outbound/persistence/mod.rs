//! PostgreSQL persistence adapters using Diesel.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private; only the repositories, the pool, and the migration runner are
//! exported. Connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use skillswap_backend::outbound::persistence::{
//!     DbPool, DieselProfileRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/skillswap")).await?;
//! let profiles = DieselProfileRepository::new(pool.clone());
//! ```

mod diesel_basic_error_mapping;
mod diesel_profile_repository;
mod diesel_skill_index_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_profile_repository::DieselProfileRepository;
pub use diesel_skill_index_repository::DieselSkillIndexRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
