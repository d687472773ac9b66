//! JSON handler linking heroes to powers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use superheroes_app::ports::{HeroPowerRepository, HeroRepository, PowerRepository};
use superheroes_domain::error::{SuperheroError, ValidationError};
use superheroes_domain::hero_power::HeroPower;
use superheroes_domain::id::{HeroId, PowerId};

use crate::api::heroes::HeroDetail;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for linking a hero to a power. `strength` is optional.
///
/// Ids are kept as raw JSON so that an absent key (`None`) can be told apart
/// from a key that is present but `null` or not an id (`Some(_)`).
#[derive(Debug, Deserialize)]
pub struct CreateHeroPowerRequest {
    #[serde(default, deserialize_with = "present")]
    pub hero_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub power_id: Option<Value>,
    pub strength: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Read a record id from an integer or a string of digits.
fn record_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            raw.parse().ok()
        }
        _ => None,
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<HeroDetail>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /heropowers`
///
/// Responds with the hero and its full, updated list of powers. A key that is
/// absent is reported as missing; one that is `null` or holds something other
/// than an id is reported as an unknown record.
pub async fn create<HR, PR, HPR>(
    State(state): State<AppState<HR, PR, HPR>>,
    payload: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HeroRepository + Send + Sync + 'static,
    PR: PowerRepository + Send + Sync + 'static,
    HPR: HeroPowerRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let (Some(hero_id), Some(power_id)) = (req.hero_id, req.power_id) else {
        return Err(SuperheroError::from(ValidationError::MissingHeroPowerIds).into());
    };
    let (Some(hero_id), Some(power_id)) = (record_id(&hero_id), record_id(&power_id)) else {
        return Err(SuperheroError::from(ValidationError::UnknownHeroOrPower).into());
    };

    let mut builder = HeroPower::builder()
        .hero_id(HeroId::from_raw(hero_id))
        .power_id(PowerId::from_raw(power_id));
    if let Some(strength) = req.strength {
        builder = builder.strength(strength);
    }

    let profile = state
        .hero_power_service
        .create_hero_power(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(profile.into())))
}
