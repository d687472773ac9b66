//! Power service — use-cases for managing powers.

use superheroes_domain::error::{NotFoundError, SuperheroError, ValidationError};
use superheroes_domain::id::PowerId;
use superheroes_domain::power::{NewPower, Power};

use crate::ports::PowerRepository;

/// Application service for power operations.
pub struct PowerService<R> {
    repo: R,
}

impl<R: PowerRepository> PowerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new power.
    ///
    /// The description length is not checked here, only on update.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, power), fields(power_name = %power.name))]
    pub async fn create_power(&self, power: NewPower) -> Result<Power, SuperheroError> {
        let created = self.repo.create(power).await?;
        tracing::debug!(power_id = %created.id, "power created");
        Ok(created)
    }

    /// List all powers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_powers(&self) -> Result<Vec<Power>, SuperheroError> {
        self.repo.get_all().await
    }

    /// Look up a power by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SuperheroError::NotFound`] when no power with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_power(&self, id: PowerId) -> Result<Power, SuperheroError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Power",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Replace the description of a power already loaded with
    /// [`get_power`](Self::get_power).
    ///
    /// Presence of `description` is checked before its length. Nothing is
    /// written unless both checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`SuperheroError::Validation`] when `description` is missing or
    /// too short, or a storage error from the repository.
    #[tracing::instrument(skip(self, power, description), fields(power_id = %power.id))]
    pub async fn update_description(
        &self,
        mut power: Power,
        description: Option<String>,
    ) -> Result<Power, SuperheroError> {
        let description = description.ok_or(ValidationError::MissingDescription)?;
        power.set_description(description)?;
        self.repo.update(power).await
    }
}
