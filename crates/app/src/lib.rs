//! # superheroes-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HeroRepository` — create, get, list heroes
//!   - `PowerRepository` — create, get, list, update powers; powers of a hero
//!   - `HeroPowerRepository` — create associations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HeroService` — create, list, get with powers
//!   - `PowerService` — create, list, get, update description
//!   - `HeroPowerService` — link a hero to a power
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `superheroes-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
