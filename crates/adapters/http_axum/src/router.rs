//! Axum router assembly.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};

use crate::state::AppState;

/// Path the root URL redirects to.
pub const HOME_REDIRECT: &str = "/heropowers";

/// Build the top-level axum [`Router`].
///
/// Merges the API routes with the root redirect and a health check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<HR, PR, HPR>(state: AppState<HR, PR, HPR>) -> Router
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, HOME_REDIRECT)])
}

async fn health_check() -> &'static str {
    "OK"
}
