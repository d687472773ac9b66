//! In-memory port implementations shared by the service tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use superheroes_domain::error::SuperheroError;
use superheroes_domain::hero::{Hero, NewHero};
use superheroes_domain::hero_power::{HeroPower, NewHeroPower};
use superheroes_domain::id::{HeroId, HeroPowerId, PowerId};
use superheroes_domain::power::{NewPower, Power};

use crate::ports::{HeroPowerRepository, HeroRepository, PowerRepository};

#[derive(Default)]
struct Tables {
    heroes: Vec<Hero>,
    powers: Vec<Power>,
    hero_powers: Vec<HeroPower>,
}

/// One store backing all three repositories, cloned into each service.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn hero_power_count(&self) -> usize {
        self.tables.lock().unwrap().hero_powers.len()
    }
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap() + 1
}

impl HeroRepository for InMemoryStore {
    fn create(&self, hero: NewHero) -> impl Future<Output = Result<Hero, SuperheroError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let hero = hero.with_id(HeroId::from_raw(next_id(tables.heroes.len())));
        tables.heroes.push(hero.clone());
        async { Ok(hero) }
    }

    fn get_by_id(
        &self,
        id: HeroId,
    ) -> impl Future<Output = Result<Option<Hero>, SuperheroError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.heroes.iter().find(|h| h.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hero>, SuperheroError>> + Send {
        let result = self.tables.lock().unwrap().heroes.clone();
        async { Ok(result) }
    }
}

impl PowerRepository for InMemoryStore {
    fn create(
        &self,
        power: NewPower,
    ) -> impl Future<Output = Result<Power, SuperheroError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let power = power.with_id(PowerId::from_raw(next_id(tables.powers.len())));
        tables.powers.push(power.clone());
        async { Ok(power) }
    }

    fn get_by_id(
        &self,
        id: PowerId,
    ) -> impl Future<Output = Result<Option<Power>, SuperheroError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result = tables.powers.iter().find(|p| p.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send {
        let result = self.tables.lock().unwrap().powers.clone();
        async { Ok(result) }
    }

    fn find_by_hero_id(
        &self,
        hero_id: HeroId,
    ) -> impl Future<Output = Result<Vec<Power>, SuperheroError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Power> = tables
            .hero_powers
            .iter()
            .filter(|link| link.hero_id == hero_id)
            .filter_map(|link| tables.powers.iter().find(|p| p.id == link.power_id))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, power: Power) -> impl Future<Output = Result<Power, SuperheroError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.powers.iter_mut().find(|p| p.id == power.id) {
            *existing = power.clone();
        }
        async { Ok(power) }
    }
}

impl HeroPowerRepository for InMemoryStore {
    fn create(
        &self,
        hero_power: NewHeroPower,
    ) -> impl Future<Output = Result<HeroPower, SuperheroError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let link = hero_power.with_id(HeroPowerId::from_raw(next_id(tables.hero_powers.len())));
        tables.hero_powers.push(link.clone());
        async { Ok(link) }
    }
}
