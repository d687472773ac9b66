//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SuperheroError`] via `#[from]` (or an explicit `From` impl for
//! adapter errors that must stay out of this crate).

/// Top-level error shared by the domain, the application services, and the
/// port traits.
#[derive(Debug, thiserror::Error)]
pub enum SuperheroError {
    /// A request or a record broke a domain rule.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A record looked up by id does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain rule violations, detected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Hero creation without `name` or `supername`.
    #[error("Missing name or supername")]
    MissingHeroFields,

    /// Power creation without `name` or `description`.
    #[error("Missing name or description")]
    MissingPowerFields,

    /// Power update without `description`.
    #[error("Validation error: Missing description")]
    MissingDescription,

    /// Power description below the minimum length.
    #[error("Validation error: Description must be at least {min} characters long")]
    DescriptionTooShort { min: usize },

    /// Hero power creation without one of the referenced ids.
    #[error("Validation error: Missing power_id or hero_id")]
    MissingHeroPowerIds,

    /// Hero power creation referencing an unknown hero or power.
    #[error("Validation error: Hero or Power not found")]
    UnknownHeroOrPower,
}

/// A direct lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Hero"`.
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}
