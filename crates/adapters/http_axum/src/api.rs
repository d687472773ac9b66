//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod hero_powers;
#[allow(clippy::missing_errors_doc)]
pub mod heroes;
#[allow(clippy::missing_errors_doc)]
pub mod powers;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<HR, PR, HPR>() -> Router<AppState<HR, PR, HPR>>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    Router::new()
        // Heroes
        .route("/add_hero", post(heroes::create::<HR, PR, HPR>))
        .route("/heroes", get(heroes::list::<HR, PR, HPR>))
        .route("/heroes/{id}", get(heroes::get::<HR, PR, HPR>))
        // Powers
        .route("/add_power", post(powers::create::<HR, PR, HPR>))
        .route("/powers", get(powers::list::<HR, PR, HPR>))
        .route(
            "/powers/{id}",
            get(powers::get::<HR, PR, HPR>).patch(powers::update::<HR, PR, HPR>),
        )
        // Hero powers
        .route("/heropowers", post(hero_powers::create::<HR, PR, HPR>))
}

/// Parse a path id, treating anything but a plain run of digits as unknown.
fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::not_found(entity, raw));
    }
    T::from_str(raw).map_err(|_| ApiError::not_found(entity, raw))
}
