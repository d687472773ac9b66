//! Hero — a named character with a "super" alias.

use crate::error::{SuperheroError, ValidationError};
use crate::id::HeroId;
use crate::power::Power;

/// A persisted hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub supername: String,
}

impl Hero {
    /// Create a builder for a hero that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewHeroBuilder {
        NewHeroBuilder::default()
    }
}

/// A hero waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub supername: String,
}

impl NewHero {
    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: HeroId) -> Hero {
        Hero {
            id,
            name: self.name,
            supername: self.supername,
        }
    }
}

/// Step-by-step builder for [`NewHero`].
#[derive(Debug, Default)]
pub struct NewHeroBuilder {
    name: Option<String>,
    supername: Option<String>,
}

impl NewHeroBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn supername(mut self, supername: impl Into<String>) -> Self {
        self.supername = Some(supername.into());
        self
    }

    /// Consume the builder and return a [`NewHero`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingHeroFields`] if `name` or
    /// `supername` was never set.
    pub fn build(self) -> Result<NewHero, SuperheroError> {
        match (self.name, self.supername) {
            (Some(name), Some(supername)) => Ok(NewHero { name, supername }),
            _ => Err(ValidationError::MissingHeroFields.into()),
        }
    }
}

/// A hero together with every power it holds, one entry per association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProfile {
    pub hero: Hero,
    pub powers: Vec<Power>,
}
