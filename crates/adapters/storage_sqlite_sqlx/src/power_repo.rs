//! `SQLite` implementation of [`PowerRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use superheroes_app::ports::PowerRepository;
use superheroes_domain::error::SuperheroError;
use superheroes_domain::id::{HeroId, PowerId};
use superheroes_domain::power::{NewPower, Power};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Power`].
struct Wrapper(Power);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Power> {
        value.map(|w| w.0)
    }

    fn many(values: Vec<Self>) -> Vec<Power> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Power {
            id: PowerId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO powers (name, description) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, description FROM powers WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, description FROM powers ORDER BY id";
const SELECT_BY_HERO: &str = "SELECT p.id, p.name, p.description \
     FROM hero_powers hp \
     INNER JOIN powers p ON p.id = hp.power_id \
     WHERE hp.hero_id = ? \
     ORDER BY hp.id";
const UPDATE: &str = "UPDATE powers SET name = ?, description = ? WHERE id = ?";

/// `SQLite`-backed power repository.
pub struct SqlitePowerRepository {
    pool: SqlitePool,
}

impl SqlitePowerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PowerRepository for SqlitePowerRepository {
    fn create(
        &self,
        power: NewPower,
    ) -> impl Future<Output = Result<Power, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&power.name)
                .bind(&power.description)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(power.with_id(PowerId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PowerId,
    ) -> impl Future<Output = Result<Option<Power>, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn find_by_hero_id(
        &self,
        hero_id: HeroId,
    ) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_HERO)
                .bind(hero_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(&self, power: Power) -> impl Future<Output = Result<Power, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&power.name)
                .bind(&power.description)
                .bind(power.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(power)
        }
    }
}
