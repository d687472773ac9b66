//! # superheroes-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `superheroes-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `superheroes-app` (for port traits) and `superheroes-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod hero_power_repo;
mod hero_repo;
mod pool;
mod power_repo;

pub use error::StorageError;
pub use hero_power_repo::SqliteHeroPowerRepository;
pub use hero_repo::SqliteHeroRepository;
pub use pool::{Config, DEFAULT_MAX_CONNECTIONS, Database};
pub use power_repo::SqlitePowerRepository;
