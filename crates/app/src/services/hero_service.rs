//! Hero service — use-cases for managing heroes.

use superheroes_domain::error::{NotFoundError, SuperheroError};
use superheroes_domain::hero::{Hero, HeroProfile, NewHero};
use superheroes_domain::id::HeroId;

use crate::ports::{HeroRepository, PowerRepository};

/// Application service for hero operations.
pub struct HeroService<HR, PR> {
    heroes: HR,
    powers: PR,
}

impl<HR, PR> HeroService<HR, PR>
where
    HR: HeroRepository,
    PR: PowerRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(heroes: HR, powers: PR) -> Self {
        Self { heroes, powers }
    }

    /// Persist a new hero.
    ///
    /// No uniqueness check is made against existing heroes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, hero), fields(hero_name = %hero.name))]
    pub async fn create_hero(&self, hero: NewHero) -> Result<Hero, SuperheroError> {
        let created = self.heroes.create(hero).await?;
        tracing::debug!(hero_id = %created.id, "hero created");
        Ok(created)
    }

    /// List all heroes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_heroes(&self) -> Result<Vec<Hero>, SuperheroError> {
        self.heroes.get_all().await
    }

    /// Look up a hero by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SuperheroError::NotFound`] when no hero with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_hero(&self, id: HeroId) -> Result<Hero, SuperheroError> {
        self.heroes.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Hero",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up a hero together with the powers linked to it.
    ///
    /// # Errors
    ///
    /// Returns [`SuperheroError::NotFound`] when no hero with `id` exists,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_hero_profile(&self, id: HeroId) -> Result<HeroProfile, SuperheroError> {
        let hero = self.get_hero(id).await?;
        let powers = self.powers.find_by_hero_id(id).await?;
        Ok(HeroProfile { hero, powers })
    }
}
