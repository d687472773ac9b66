//! # superheroes-domain
//!
//! Pure domain model for the superheroes API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Heroes** (named characters with a "super" alias)
//! - Define **Powers** (named capabilities with a description)
//! - Define **Hero powers** (association of a hero with a power and a strength)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod hero;
pub mod hero_power;
pub mod power;
