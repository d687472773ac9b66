//! End-to-end smoke tests for the full superheroesd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use superheroes_adapter_http_axum::router;
use superheroes_adapter_http_axum::state::AppState;
use superheroes_adapter_storage_sqlite_sqlx::{
    Config, SqliteHeroPowerRepository, SqliteHeroRepository, SqlitePowerRepository,
};
use superheroes_app::services::hero_power_service::HeroPowerService;
use superheroes_app::services::hero_service::HeroService;
use superheroes_app::services::power_service::PowerService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    app_with_pool().await.0
}

/// Same as [`app`], also handing back the pool for direct assertions.
async fn app_with_pool() -> (axum::Router, SqlitePool) {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        HeroService::new(
            SqliteHeroRepository::new(pool.clone()),
            SqlitePowerRepository::new(pool.clone()),
        ),
        PowerService::new(SqlitePowerRepository::new(pool.clone())),
        HeroPowerService::new(
            SqliteHeroRepository::new(pool.clone()),
            SqlitePowerRepository::new(pool.clone()),
            SqliteHeroPowerRepository::new(pool.clone()),
        ),
    );

    (router::build(state), pool)
}

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn add_hero(app: &axum::Router, name: &str, supername: &str) {
    let (status, _) = call(
        app,
        "POST",
        "/add_hero",
        Some(json!({ "name": name, "supername": supername })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn add_power(app: &axum::Router, name: &str, description: &str) {
    let (status, _) = call(
        app,
        "POST",
        "/add_power",
        Some(json!({ "name": name, "description": description })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Root & health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, _) = call(&app().await, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn should_redirect_root_to_hero_power_creation() {
    let resp = app()
        .await
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()["location"], "/heropowers");
}

// ---------------------------------------------------------------------------
// Heroes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_created_hero_with_generated_id() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/heroes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = call(
        &app,
        "POST",
        "/add_hero",
        Some(json!({ "name": "Kamala Khan", "supername": "Ms. Marvel" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Hero added successfully" }));

    let (status, body) = call(&app, "GET", "/heroes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" }])
    );
}

#[tokio::test]
async fn should_not_deduplicate_heroes() {
    let app = app().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;

    let (_, body) = call(&app, "GET", "/heroes", None).await;
    let heroes = body.as_array().unwrap();
    assert_eq!(heroes.len(), 2);
    assert_ne!(heroes[0]["id"], heroes[1]["id"]);
}

#[tokio::test]
async fn should_reject_hero_with_missing_field() {
    let app = app().await;

    let (status, body) = call(&app, "POST", "/add_hero", Some(json!({ "supername": "Ms. Marvel" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing name or supername" }));

    let (_, body) = call(&app, "GET", "/heroes", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_return_hero_detail_with_empty_powers() {
    let app = app().await;
    add_hero(&app, "Doreen Green", "Squirrel Girl").await;

    let (status, body) = call(&app, "GET", "/heroes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Doreen Green", "supername": "Squirrel Girl", "powers": [] })
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_hero() {
    let (status, body) = call(&app().await, "GET", "/heroes/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Hero not found" }));
}

// ---------------------------------------------------------------------------
// Powers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_power_lifecycle() {
    let app = app().await;

    let (status, body) = call(
        &app,
        "POST",
        "/add_power",
        Some(json!({ "name": "Flight", "description": "Ability to fly through the air" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Power added successfully" }));

    let (status, body) = call(&app, "GET", "/powers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Flight", "description": "Ability to fly through the air" }])
    );

    let (status, body) = call(
        &app,
        "PATCH",
        "/powers/1",
        Some(json!({ "description": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Validation error: Description must be at least 20 characters long"] })
    );

    let (_, body) = call(&app, "GET", "/powers/1", None).await;
    assert_eq!(body["description"], "Ability to fly through the air");

    let (status, body) = call(
        &app,
        "PATCH",
        "/powers/1",
        Some(json!({ "description": "Ability to soar above the clouds" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Flight", "description": "Ability to soar above the clouds" })
    );

    let (status, body) = call(&app, "GET", "/powers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Ability to soar above the clouds");
}

#[tokio::test]
async fn should_return_404_for_unknown_power() {
    let (status, body) = call(&app().await, "GET", "/powers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn should_accept_short_description_on_creation() {
    let app = app().await;
    add_power(&app, "Blink", "short").await;

    let (_, body) = call(&app, "GET", "/powers/1", None).await;
    assert_eq!(body["description"], "short");
}

#[tokio::test]
async fn should_reject_power_with_missing_field() {
    let (status, body) = call(
        &app().await,
        "POST",
        "/add_power",
        Some(json!({ "name": "Flight" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing name or description" }));
}

#[tokio::test]
async fn should_report_missing_description_on_update() {
    let app = app().await;
    add_power(&app, "Flight", "Ability to fly through the air").await;

    let (status, body) = call(&app, "PATCH", "/powers/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["Validation error: Missing description"] }));
}

#[tokio::test]
async fn should_return_404_when_updating_unknown_power() {
    let (status, body) = call(
        &app().await,
        "PATCH",
        "/powers/9",
        Some(json!({ "description": "Ability to soar above the clouds" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

// ---------------------------------------------------------------------------
// Hero powers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_link_power_and_return_full_hero() {
    let app = app().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_power(&app, "Elasticity", "Can stretch the body to any shape").await;

    let (status, body) = call(
        &app,
        "POST",
        "/heropowers",
        Some(json!({ "hero_id": 1, "power_id": 1, "strength": "Strong" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Kamala Khan",
            "supername": "Ms. Marvel",
            "powers": [
                { "id": 1, "name": "Elasticity", "description": "Can stretch the body to any shape" }
            ]
        })
    );

    let (_, detail) = call(&app, "GET", "/heroes/1", None).await;
    assert_eq!(detail, body);
}

#[tokio::test]
async fn should_append_power_again_when_linked_twice() {
    let app = app().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_power(&app, "Elasticity", "Can stretch the body to any shape").await;

    let link = json!({ "hero_id": 1, "power_id": 1 });
    call(&app, "POST", "/heropowers", Some(link.clone())).await;
    let (status, body) = call(&app, "POST", "/heropowers", Some(link)).await;

    assert_eq!(status, StatusCode::CREATED);
    let powers = body["powers"].as_array().unwrap();
    assert_eq!(powers.len(), 2);
    assert_eq!(powers[0]["id"], 1);
    assert_eq!(powers[1]["id"], 1);
}

#[tokio::test]
async fn should_reject_link_to_unknown_records_without_writing() {
    let app = app().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_power(&app, "Elasticity", "Can stretch the body to any shape").await;

    for link in [
        json!({ "hero_id": 1, "power_id": 99 }),
        json!({ "hero_id": 99, "power_id": 1 }),
    ] {
        let (status, body) = call(&app, "POST", "/heropowers", Some(link)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["Validation error: Hero or Power not found"] }));
    }

    let (_, detail) = call(&app, "GET", "/heroes/1", None).await;
    assert_eq!(detail["powers"], json!([]));
}

#[tokio::test]
async fn should_reject_link_with_missing_id() {
    let (status, body) = call(
        &app().await,
        "POST",
        "/heropowers",
        Some(json!({ "power_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Validation error: Missing power_id or hero_id"] })
    );
}

#[tokio::test]
async fn should_treat_null_or_malformed_id_as_unknown_record() {
    let app = app().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_power(&app, "Elasticity", "Can stretch the body to any shape").await;

    for link in [
        json!({ "hero_id": null, "power_id": 1 }),
        json!({ "hero_id": 1, "power_id": "abc" }),
    ] {
        let (status, body) = call(&app, "POST", "/heropowers", Some(link)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["Validation error: Hero or Power not found"] }));
    }
}

#[tokio::test]
async fn should_store_average_strength_when_omitted() {
    let (app, pool) = app_with_pool().await;
    add_hero(&app, "Kamala Khan", "Ms. Marvel").await;
    add_power(&app, "Elasticity", "Can stretch the body to any shape").await;

    let (status, _) = call(
        &app,
        "POST",
        "/heropowers",
        Some(json!({ "hero_id": 1, "power_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let strength: String = sqlx::query_scalar("SELECT strength FROM hero_powers WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(strength, "Average");
}

#[tokio::test]
async fn should_reject_mistyped_field_with_bad_request() {
    let (status, body) = call(
        &app().await,
        "POST",
        "/add_hero",
        Some(json!({ "name": 5, "supername": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
