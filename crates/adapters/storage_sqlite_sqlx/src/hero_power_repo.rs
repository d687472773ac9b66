//! `SQLite` implementation of [`HeroPowerRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use superheroes_app::ports::HeroPowerRepository;
use superheroes_domain::error::SuperheroError;
use superheroes_domain::hero_power::{HeroPower, NewHeroPower};
use superheroes_domain::id::HeroPowerId;

use crate::error::StorageError;

const INSERT: &str = "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?)";

/// `SQLite`-backed hero power repository.
pub struct SqliteHeroPowerRepository {
    pool: SqlitePool,
}

impl SqliteHeroPowerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HeroPowerRepository for SqliteHeroPowerRepository {
    fn create(
        &self,
        hero_power: NewHeroPower,
    ) -> impl Future<Output = Result<HeroPower, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&hero_power.strength)
                .bind(hero_power.hero_id.as_i64())
                .bind(hero_power.power_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(hero_power.with_id(HeroPowerId::from_raw(result.last_insert_rowid())))
        }
    }
}
