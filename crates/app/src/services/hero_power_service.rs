//! Hero power service — linking heroes to powers.

use superheroes_domain::error::{SuperheroError, ValidationError};
use superheroes_domain::hero::HeroProfile;
use superheroes_domain::hero_power::NewHeroPower;

use crate::ports::{HeroPowerRepository, HeroRepository, PowerRepository};

/// Application service creating hero/power associations.
pub struct HeroPowerService<HR, PR, HPR> {
    heroes: HR,
    powers: PR,
    hero_powers: HPR,
}

impl<HR, PR, HPR> HeroPowerService<HR, PR, HPR>
where
    HR: HeroRepository,
    PR: PowerRepository,
    HPR: HeroPowerRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(heroes: HR, powers: PR, hero_powers: HPR) -> Self {
        Self {
            heroes,
            powers,
            hero_powers,
        }
    }

    /// Link a hero to a power and return the hero with its updated powers.
    ///
    /// Both records must exist; otherwise nothing is written. Linking the
    /// same pair again adds another association.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownHeroOrPower`] when either referenced
    /// record is missing, or a storage error from the repositories.
    #[tracing::instrument(
        skip(self, link),
        fields(hero_id = %link.hero_id, power_id = %link.power_id)
    )]
    pub async fn create_hero_power(
        &self,
        link: NewHeroPower,
    ) -> Result<HeroProfile, SuperheroError> {
        let hero = self.heroes.get_by_id(link.hero_id).await?;
        let power = self.powers.get_by_id(link.power_id).await?;
        let (Some(hero), Some(_)) = (hero, power) else {
            tracing::debug!("rejecting link to unknown hero or power");
            return Err(ValidationError::UnknownHeroOrPower.into());
        };

        let created = self.hero_powers.create(link).await?;
        tracing::debug!(hero_power_id = %created.id, strength = %created.strength, "hero power created");

        let powers = self.powers.find_by_hero_id(hero.id).await?;
        Ok(HeroProfile { hero, powers })
    }
}
