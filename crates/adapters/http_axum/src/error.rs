//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use superheroes_domain::error::{SuperheroError, ValidationError};

/// JSON error body returned by API endpoints.
///
/// Most failures carry a single `error` message; the power update and hero
/// power endpoints report theirs as an `errors` list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Single { error: String },
    List { errors: Vec<String> },
}

/// Maps [`SuperheroError`] and body rejections to an HTTP response with
/// the appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the application layer.
    Domain(SuperheroError),
    /// The request body could not be read as the expected JSON payload.
    Payload(JsonRejection),
}

impl ApiError {
    /// Build a 404 for a path id that does not even parse.
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::Domain(
            superheroes_domain::error::NotFoundError {
                entity,
                id: id.to_string(),
            }
            .into(),
        )
    }
}

impl From<SuperheroError> for ApiError {
    fn from(err: SuperheroError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection)
    }
}

fn validation_body(err: &ValidationError) -> ErrorBody {
    match err {
        ValidationError::MissingHeroFields | ValidationError::MissingPowerFields => {
            ErrorBody::Single {
                error: err.to_string(),
            }
        }
        ValidationError::MissingDescription
        | ValidationError::DescriptionTooShort { .. }
        | ValidationError::MissingHeroPowerIds
        | ValidationError::UnknownHeroOrPower => ErrorBody::List {
            errors: vec![err.to_string()],
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Domain(SuperheroError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, validation_body(err))
            }
            Self::Domain(SuperheroError::NotFound(err)) => (
                StatusCode::NOT_FOUND,
                ErrorBody::Single {
                    error: err.to_string(),
                },
            ),
            Self::Domain(SuperheroError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::Single {
                        error: "internal server error".to_string(),
                    },
                )
            }
            Self::Payload(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                let status = match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    _ => rejection.status(),
                };
                (
                    status,
                    ErrorBody::Single {
                        error: rejection.body_text(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
