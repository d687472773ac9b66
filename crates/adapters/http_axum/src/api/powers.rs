//! JSON handlers for powers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use superheroes_domain::id::PowerId;
use superheroes_domain::power::Power;

use crate::api::heroes::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a power. Both fields are required; the
/// description may be of any length.
#[derive(Debug, Deserialize)]
pub struct CreatePowerRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for updating a power.
#[derive(Debug, Deserialize)]
pub struct UpdatePowerRequest {
    pub description: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Power>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Power>),
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

/// `POST /add_power`
pub async fn create<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    payload: Result<Json<CreatePowerRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = Power::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(description) = req.description {
        builder = builder.description(description);
    }

    state.power_service.create_power(builder.build()?).await?;
    Ok(CreateResponse::Created(Json(Message {
        message: "Power added successfully",
    })))
}

/// `GET /powers`
pub async fn list<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
) -> Result<ListResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let powers = state.power_service.list_powers().await?;
    Ok(ListResponse::Ok(Json(powers)))
}

/// `GET /powers/{id}`
pub async fn get<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let power_id: PowerId = super::parse_id(&id, "Power")?;
    let power = state.power_service.get_power(power_id).await?;
    Ok(GetResponse::Ok(Json(power)))
}

/// `PATCH /powers/{id}`
///
/// An unknown id is reported before the body is looked at.
pub async fn update<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let power_id: PowerId = super::parse_id(&id, "Power")?;
    let power = state.power_service.get_power(power_id).await?;
    let Json(req) = payload?;

    let updated = state
        .power_service
        .update_description(power, req.description)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}
