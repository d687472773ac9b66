//! Shared application state for axum handlers.

use std::sync::Arc;

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use superheroes_app::services::hero_power_service::HeroPowerService;
use superheroes_app::services::hero_service::HeroService;
use superheroes_app::services::power_service::PowerService;

/// Application state shared across all axum handlers.
///
/// Generic over the three repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<HR, PR, HPR> {
    /// Hero use-cases.
    pub hero_service: Arc<HeroService<HR, PR>>,
    /// Power use-cases.
    pub power_service: Arc<PowerService<PR>>,
    /// Hero power use-cases.
    pub hero_power_service: Arc<HeroPowerService<HR, PR, HPR>>,
}

impl<HR, PR, HPR> Clone for AppState<HR, PR, HPR> {
    fn clone(&self) -> Self {
        Self {
            hero_service: Arc::clone(&self.hero_service),
            power_service: Arc::clone(&self.power_service),
            hero_power_service: Arc::clone(&self.hero_power_service),
        }
    }
}

impl<HR, PR, HPR> AppState<HR, PR, HPR>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        hero_service: HeroService<HR, PR>,
        power_service: PowerService<PR>,
        hero_power_service: HeroPowerService<HR, PR, HPR>,
    ) -> Self {
        Self {
            hero_service: Arc::new(hero_service),
            power_service: Arc::new(power_service),
            hero_power_service: Arc::new(hero_power_service),
        }
    }
}
