//! End-to-end API integration tests
//!
//! These tests verify the complete HTTP API flows including:
//! - Admin login and bearer-token protection
//! - Team registration and listing
//! - Player registration, roster cap and team resolution
//! - Error bodies for validation failures

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Duration;
use esports_registration_api::api::{self, AppState, TokenSettings};
use esports_registration_api::auth::AdminCredentials;
use esports_registration_api::infrastructure::repositories::InMemoryRegistrationRepository;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

const ADMIN_USER: &str = "admin";
const ADMIN_PASSWORD: &str = "tournament-pass";
const SECRET: &str = "integration-test-secret";

/// Setup test application with a fresh in-memory registry
fn setup_app() -> Router {
    let admin = AdminCredentials::with_cost(ADMIN_USER, ADMIN_PASSWORD, 4).expect("hash password");
    let state = AppState::new(
        Arc::new(InMemoryRegistrationRepository::new()),
        admin,
        TokenSettings {
            secret: SECRET.to_string(),
            ttl: Duration::minutes(30),
        },
    );
    api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}

fn post_json(uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &Router) -> String {
    let (status, json) = send(
        app,
        post_json(
            "/api/auth/login",
            None,
            &json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["token"].as_str().unwrap().to_string()
}

async fn create_team(app: &Router, token: &str, name: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/teams",
            Some(token),
            &json!({ "name": name, "captain": "Captain", "contact": "cap@example.com" }),
        ),
    )
    .await
}

async fn create_player(app: &Router, token: &str, team_id: &str, nickname: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/players",
            Some(token),
            &json!({
                "name": "Real Name",
                "nickname": nickname,
                "role": "jungle",
                "rank": "Platinum",
                "gender": "F",
                "team_id": team_id
            }),
        ),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_login_reports_previous_login() {
    let app = setup_app();
    let payload = json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD });

    let (status, first) = send(&app, post_json("/api/auth/login", None, &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(first["previous_login"].is_null());
    assert_eq!(first["expires_in"], 30 * 60);
    assert!(!first["token"].as_str().unwrap().is_empty());

    let (_, second) = send(&app, post_json("/api/auth/login", None, &payload)).await;
    assert!(second["previous_login"].is_string());
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = setup_app();

    let (status, json) = send(
        &app,
        post_json(
            "/api/auth/login",
            None,
            &json!({ "username": ADMIN_USER, "password": "wrong" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_registration_routes_require_token() {
    let app = setup_app();

    let (status, _) = send(
        &app,
        Request::builder().uri("/api/teams").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/api/players", "not-a-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = create_team(&app, "not-a-token", "Alpha").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_teams() {
    let app = setup_app();
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/teams",
            Some(&token),
            &json!({ "name": "  Alpha ", "captain": " Ana ", "contact": "ana@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/api/teams");

    create_team(&app, &token, "Bravo").await;

    let (status, json) = send(&app, get("/api/teams", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let teams = json.as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0]["name"], "Alpha");
    assert_eq!(teams[0]["captain"], "Ana");
    assert_eq!(teams[1]["name"], "Bravo");
    assert!(teams[0]["id"].is_string());
}

#[tokio::test]
async fn test_duplicate_team_name_conflicts() {
    let app = setup_app();
    let token = login(&app).await;

    let (status, _) = create_team(&app, &token, "Alpha").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = create_team(&app, &token, "alpha").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "duplicate_team");
    assert_eq!(json["team"], "alpha");

    let (_, teams) = send(&app, get("/api/teams", &token)).await;
    assert_eq!(teams.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_team_fields() {
    let app = setup_app();
    let token = login(&app).await;

    let (status, json) = send(
        &app,
        post_json("/api/teams", Some(&token), &json!({ "name": "Alpha", "captain": "Ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "all fields required");
    assert_eq!(json["code"], "missing_fields");
    assert_eq!(json["field"], "contact");
}

#[tokio::test]
async fn test_player_roster_cap() {
    let app = setup_app();
    let token = login(&app).await;

    let (_, team) = create_team(&app, &token, "Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_string();

    for i in 0..5 {
        let (status, json) = create_player(&app, &token, &team_id, &format!("p{i}")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["team_name"], "Alpha");
    }

    let (status, json) = create_player(&app, &token, &team_id, "p5").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "roster_full");
    assert_eq!(json["team"], "Alpha");

    let (_, players) = send(&app, get("/api/players", &token)).await;
    let players = players.as_array().unwrap();
    assert_eq!(players.len(), 5);
    assert_eq!(players[0]["nickname"], "p0");
    assert_eq!(players[0]["team_id"], team_id.as_str());
}

#[tokio::test]
async fn test_player_with_unknown_team() {
    let app = setup_app();
    let token = login(&app).await;
    create_team(&app, &token, "Alpha").await;

    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, json) = create_player(&app, &token, &unknown, "ghost").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_team");
    assert_eq!(json["error"], "invalid team");
    assert_eq!(json["team_id"], unknown.as_str());
}

#[tokio::test]
async fn test_null_team_field_counts_as_missing() {
    let app = setup_app();
    let token = login(&app).await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/teams",
            Some(&token),
            &json!({ "name": null, "captain": "Ana", "contact": "ana@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "all fields required");
    assert_eq!(json["code"], "missing_fields");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_numeric_team_id_is_invalid_team() {
    let app = setup_app();
    let token = login(&app).await;
    create_team(&app, &token, "Alpha").await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/players",
            Some(&token),
            &json!({
                "name": "Solo",
                "nickname": "solo",
                "role": "Mid",
                "rank": "Gold",
                "gender": "F",
                "team_id": 42
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_team");
    assert_eq!(json["team_id"], "42");
}

#[tokio::test]
async fn test_wrong_field_type_returns_json_error() {
    let app = setup_app();
    let token = login(&app).await;

    let (status, json) = send(
        &app,
        post_json(
            "/api/teams",
            Some(&token),
            &json!({ "name": "Alpha", "captain": true, "contact": "ana@example.com" }),
        ),
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(json["code"], "invalid_body");
    assert!(json["error"].is_string());

    let (_, teams) = send(&app, get("/api/teams", &token)).await;
    assert!(teams.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_player_missing_fields() {
    let app = setup_app();
    let token = login(&app).await;

    let (status, json) = send(
        &app,
        post_json("/api/players", Some(&token), &json!({ "name": "Solo" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "all player fields required");
    assert_eq!(json["field"], "nickname");
}
