//! Storage port — repository traits for persistence.
//!
//! Ids are assigned by the store: `create` takes a `New*` record and returns
//! the persisted one.

use std::future::Future;

use superheroes_domain::error::SuperheroError;
use superheroes_domain::hero::{Hero, NewHero};
use superheroes_domain::hero_power::{HeroPower, NewHeroPower};
use superheroes_domain::id::{HeroId, PowerId};
use superheroes_domain::power::{NewPower, Power};

/// Repository for persisting and querying [`Hero`]es.
pub trait HeroRepository {
    /// Insert a new hero and return it with its generated id.
    fn create(&self, hero: NewHero) -> impl Future<Output = Result<Hero, SuperheroError>> + Send;

    /// Get a hero by its identifier.
    fn get_by_id(
        &self,
        id: HeroId,
    ) -> impl Future<Output = Result<Option<Hero>, SuperheroError>> + Send;

    /// Get all heroes, in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Hero>, SuperheroError>> + Send;
}

/// Repository for persisting and querying [`Power`]s.
pub trait PowerRepository {
    /// Insert a new power and return it with its generated id.
    fn create(&self, power: NewPower)
    -> impl Future<Output = Result<Power, SuperheroError>> + Send;

    /// Get a power by its identifier.
    fn get_by_id(
        &self,
        id: PowerId,
    ) -> impl Future<Output = Result<Option<Power>, SuperheroError>> + Send;

    /// Get all powers, in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send;

    /// Get the powers linked to a hero through its associations.
    ///
    /// One entry per association, in association creation order, so a power
    /// linked twice appears twice.
    fn find_by_hero_id(
        &self,
        hero_id: HeroId,
    ) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send;

    /// Overwrite an existing power.
    fn update(&self, power: Power) -> impl Future<Output = Result<Power, SuperheroError>> + Send;
}

/// Repository for persisting [`HeroPower`] associations.
pub trait HeroPowerRepository {
    /// Insert a new association and return it with its generated id.
    fn create(
        &self,
        hero_power: NewHeroPower,
    ) -> impl Future<Output = Result<HeroPower, SuperheroError>> + Send;
}
