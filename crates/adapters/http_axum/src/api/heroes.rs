//! JSON handlers for heroes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use superheroes_domain::hero::{Hero, HeroProfile};
use superheroes_domain::id::HeroId;
use superheroes_domain::power::Power;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a hero. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateHeroRequest {
    pub name: Option<String>,
    pub supername: Option<String>,
}

/// Acknowledgment returned after a successful creation.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Entry of the hero list. The alias is emitted as `super_name` here.
#[derive(Debug, Serialize)]
pub struct HeroSummary {
    pub id: HeroId,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroSummary {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.supername,
        }
    }
}

/// A hero with its powers. The alias is emitted as `supername` here.
#[derive(Debug, Serialize)]
pub struct HeroDetail {
    pub id: HeroId,
    pub name: String,
    pub supername: String,
    pub powers: Vec<Power>,
}

impl From<HeroProfile> for HeroDetail {
    fn from(profile: HeroProfile) -> Self {
        Self {
            id: profile.hero.id,
            name: profile.hero.name,
            supername: profile.hero.supername,
            powers: profile.powers,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<HeroSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<HeroDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Message>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /add_hero`
pub async fn create<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    payload: Result<Json<CreateHeroRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = Hero::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(supername) = req.supername {
        builder = builder.supername(supername);
    }

    state.hero_service.create_hero(builder.build()?).await?;
    Ok(CreateResponse::Created(Json(Message {
        message: "Hero added successfully",
    })))
}

/// `GET /heroes`
pub async fn list<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
) -> Result<ListResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let heroes = state.hero_service.list_heroes().await?;
    Ok(ListResponse::Ok(Json(
        heroes.into_iter().map(HeroSummary::from).collect(),
    )))
}

/// `GET /heroes/{id}`
pub async fn get<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let hero_id: HeroId = super::parse_id(&id, "Hero")?;
    let profile = state.hero_service.get_hero_profile(hero_id).await?;
    Ok(GetResponse::Ok(Json(profile.into())))
}
