//! Power — a named capability with a descriptive text.

use serde::Serialize;

use crate::error::{SuperheroError, ValidationError};
use crate::id::PowerId;

/// Minimum description length, in characters, enforced on update.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// A persisted power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Power {
    pub id: PowerId,
    pub name: String,
    pub description: String,
}

impl Power {
    /// Create a builder for a power that has not been stored yet.
    #[must_use]
    pub fn builder() -> NewPowerBuilder {
        NewPowerBuilder::default()
    }

    /// Replace the description after checking its length.
    ///
    /// The stored description is left untouched when the check fails.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DescriptionTooShort`] when `description`
    /// is shorter than [`MIN_DESCRIPTION_LEN`] characters.
    pub fn set_description(&mut self, description: String) -> Result<(), SuperheroError> {
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }
}

/// Check that a description meets the minimum length.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`ValidationError::DescriptionTooShort`] when the check fails.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// A power waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPower {
    pub name: String,
    pub description: String,
}

impl NewPower {
    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: PowerId) -> Power {
        Power {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Step-by-step builder for [`NewPower`].
///
/// Only presence is checked here: creation accepts descriptions of any
/// length, the minimum applies to updates.
#[derive(Debug, Default)]
pub struct NewPowerBuilder {
    name: Option<String>,
    description: Option<String>,
}

impl NewPowerBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder and return a [`NewPower`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPowerFields`] if `name` or
    /// `description` was never set.
    pub fn build(self) -> Result<NewPower, SuperheroError> {
        match (self.name, self.description) {
            (Some(name), Some(description)) => Ok(NewPower { name, description }),
            _ => Err(ValidationError::MissingPowerFields.into()),
        }
    }
}
