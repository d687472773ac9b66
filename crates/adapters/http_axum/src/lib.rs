//! # superheroes-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for heroes, powers, and hero powers
//!   (`/heroes`, `/powers`, `/heropowers`, `/add_hero`, `/add_power`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Request payloads
//! Every endpoint that reads a body declares it as a struct whose fields are
//! all `Option`s. Presence is checked by the domain builders, so a missing
//! field produces the domain's validation message instead of a generic
//! deserialization error.
//!
//! ## Dependency rule
//! Depends on `superheroes-app` (for port traits and services) and
//! `superheroes-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
