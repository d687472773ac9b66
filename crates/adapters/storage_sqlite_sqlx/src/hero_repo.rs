//! `SQLite` implementation of [`HeroRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use superheroes_app::ports::HeroRepository;
use superheroes_domain::error::SuperheroError;
use superheroes_domain::hero::{Hero, NewHero};
use superheroes_domain::id::HeroId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Hero`].
struct Wrapper(Hero);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Hero> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Hero {
            id: HeroId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            supername: row.try_get("supername")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO heroes (name, supername) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, supername FROM heroes WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, supername FROM heroes ORDER BY id";

/// `SQLite`-backed hero repository.
pub struct SqliteHeroRepository {
    pool: SqlitePool,
}

impl SqliteHeroRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HeroRepository for SqliteHeroRepository {
    fn create(&self, hero: NewHero) -> impl Future<Output = Result<Hero, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&hero.name)
                .bind(&hero.supername)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(hero.with_id(HeroId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: HeroId,
    ) -> impl Future<Output = Result<Option<Hero>, SuperheroError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hero>, SuperheroError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
