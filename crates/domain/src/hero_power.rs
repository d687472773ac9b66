//! Hero power — the association between a hero and a power.
//!
//! Each association is an independent row: the same hero/power pair may be
//! linked more than once.

use crate::error::{SuperheroError, ValidationError};
use crate::id::{HeroId, HeroPowerId, PowerId};

/// Strength recorded when the caller does not provide one.
pub const DEFAULT_STRENGTH: &str = "Average";

/// A persisted association between a hero and a power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPower {
    pub id: HeroPowerId,
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: String,
}

impl HeroPower {
    /// Create a builder for an association that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewHeroPowerBuilder {
        NewHeroPowerBuilder::default()
    }
}

/// An association waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHeroPower {
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: String,
}

impl NewHeroPower {
    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: HeroPowerId) -> HeroPower {
        HeroPower {
            id,
            hero_id: self.hero_id,
            power_id: self.power_id,
            strength: self.strength,
        }
    }
}

/// Step-by-step builder for [`NewHeroPower`].
#[derive(Debug, Default)]
pub struct NewHeroPowerBuilder {
    hero_id: Option<HeroId>,
    power_id: Option<PowerId>,
    strength: Option<String>,
}

impl NewHeroPowerBuilder {
    #[must_use]
    pub fn hero_id(mut self, hero_id: HeroId) -> Self {
        self.hero_id = Some(hero_id);
        self
    }

    #[must_use]
    pub fn power_id(mut self, power_id: PowerId) -> Self {
        self.power_id = Some(power_id);
        self
    }

    #[must_use]
    pub fn strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = Some(strength.into());
        self
    }

    /// Consume the builder and return a [`NewHeroPower`].
    ///
    /// `strength` falls back to [`DEFAULT_STRENGTH`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingHeroPowerIds`] if either id was
    /// never set.
    pub fn build(self) -> Result<NewHeroPower, SuperheroError> {
        let (Some(hero_id), Some(power_id)) = (self.hero_id, self.power_id) else {
            return Err(ValidationError::MissingHeroPowerIds.into());
        };
        Ok(NewHeroPower {
            hero_id,
            power_id,
            strength: self
                .strength
                .unwrap_or_else(|| DEFAULT_STRENGTH.to_string()),
        })
    }
}
