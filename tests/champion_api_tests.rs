//! Champion enrichment tests against a mock upstream feed
//!
//! A throwaway axum server on an ephemeral port plays the Data Dragon
//! feed, serving fixture versions and champion payloads. Tests cover the
//! service directly (where the internal error kinds matter) and the full
//! router with a real bearer token.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use riftgate_server::auth::{jwt, AuthService};
use riftgate_server::ddragon::{DataDragonService, DdragonError};
use riftgate_server::routes;
use riftgate_server::state::AppState;

const SECRET: &str = "test-secret";
const VERSION: &str = "15.9.1";

async fn versions() -> Json<Value> {
    Json(json!([VERSION, "15.8.1", "15.7.1"]))
}

async fn roster_pt_br() -> Json<Value> {
    Json(json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": VERSION,
        "data": {
            "Ahri": {
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "a Raposa de Nove Caudas",
                "tags": ["Mage", "Assassin"],
            },
            "Garen": {
                "id": "Garen",
                "key": "86",
                "name": "Garen",
                "title": "o Poder de Demacia",
                "tags": ["Fighter", "Tank"],
            },
        },
    }))
}

async fn roster_en_us() -> Json<Value> {
    Json(json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": VERSION,
        "data": {
            "Ahri": {
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "the Nine-Tailed Fox",
                "tags": ["Mage", "Assassin"],
            },
        },
    }))
}

async fn ahri_detail() -> Json<Value> {
    Json(json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": VERSION,
        "data": {
            "Ahri": {
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "a Raposa de Nove Caudas",
                "lore": "Conectada de forma inata à magia do reino espiritual...",
                "skins": [
                    {"id": "103000", "num": 0, "name": "default", "chromas": false},
                    {"id": "103001", "num": 1, "name": "Ahri Dinastia", "chromas": false},
                    {"id": "103002", "num": 2, "name": "Ahri Raposa de Fogo", "chromas": true},
                ],
            },
        },
    }))
}

/// Detail payload whose data map does not contain the requested key.
async fn mismatched_detail() -> Json<Value> {
    Json(json!({
        "data": {
            "SomeoneElse": {
                "id": "SomeoneElse",
                "name": "Someone Else",
                "skins": [],
            },
        },
    }))
}

/// Spawn the fixture feed on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/api/versions.json", get(versions))
        .route("/cdn/15.9.1/data/pt_BR/champion.json", get(roster_pt_br))
        .route("/cdn/15.9.1/data/en_US/champion.json", get(roster_en_us))
        .route("/cdn/15.9.1/data/pt_BR/champion/Ahri.json", get(ahri_detail))
        .route(
            "/cdn/15.9.1/data/pt_BR/champion/Weird.json",
            get(mismatched_detail),
        );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
async fn dead_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn app_for(base_url: String) -> Router {
    let auth_service = Arc::new(AuthService::new(SECRET.to_string(), 3600, 4));
    let ddragon = Arc::new(DataDragonService::new(base_url, "pt_BR".to_string()));
    let state = AppState::new(auth_service, ddragon);

    Router::new()
        .merge(routes::auth_routes())
        .merge(routes::champion_routes())
        .with_state(state)
}

async fn get_authed(app: &Router, uri: &str) -> (StatusCode, Value) {
    let token = jwt::issue_token("jane@example.com", SECRET, 3600).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// Service-level behavior
// ============================================================================

#[tokio::test]
async fn test_latest_version_is_first_entry() {
    let base = spawn_upstream().await;
    let service = DataDragonService::new(base, "pt_BR".to_string());

    assert_eq!(service.latest_version().await.unwrap(), VERSION);
}

#[tokio::test]
async fn test_latest_version_fails_on_dead_upstream() {
    let base = dead_upstream().await;
    let service = DataDragonService::new(base, "pt_BR".to_string());

    assert!(matches!(
        service.latest_version().await,
        Err(DdragonError::Request(_))
    ));
}

#[tokio::test]
async fn test_champion_absent_from_payload_is_not_found() {
    let base = spawn_upstream().await;
    let service = DataDragonService::new(base, "pt_BR".to_string());

    // The fixture answers for Weird, but its data map holds someone else.
    let err = service.champion("Weird", "pt_BR").await.unwrap_err();
    assert!(matches!(err, DdragonError::ChampionNotFound(name) if name == "Weird"));
}

#[tokio::test]
async fn test_champion_fetch_failure_stays_distinct_from_not_found() {
    let base = spawn_upstream().await;
    let service = DataDragonService::new(base, "pt_BR".to_string());

    // No fixture route at all: the feed answers 404 and the error keeps
    // its transport kind rather than being folded into ChampionNotFound.
    let err = service.champion("Unknown", "pt_BR").await.unwrap_err();
    assert!(matches!(err, DdragonError::Request(_)));
}

#[tokio::test]
async fn test_champions_honors_requested_language() {
    let base = spawn_upstream().await;
    let service = DataDragonService::new(base, "pt_BR".to_string());

    let champions = service.champions("en_US").await.unwrap();
    assert_eq!(champions.len(), 1);

    let out = serde_json::to_value(&champions[0]).unwrap();
    assert_eq!(out["title"], "the Nine-Tailed Fox");
}

// ============================================================================
// Router-level behavior
// ============================================================================

#[tokio::test]
async fn test_list_champions_enriches_every_entry() {
    let base = spawn_upstream().await;
    let app = app_for(base.clone());

    let (status, body) = get_authed(&app, "/champions").await;
    assert_eq!(status, StatusCode::OK);

    let champions = body.as_array().unwrap();
    assert_eq!(champions.len(), 2);

    for champion in champions {
        let id = champion["id"].as_str().unwrap();
        let splash = champion["images"]["splash"].as_str().unwrap();
        let icon = champion["images"]["icon"].as_str().unwrap();

        assert!(splash.contains(id));
        assert!(splash.starts_with(&base));
        assert!(icon.contains(VERSION));
        // Upstream fields ride along untouched.
        assert!(!champion["title"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_get_champion_rewrites_skins() {
    let base = spawn_upstream().await;
    let app = app_for(base);

    let (status, body) = get_authed(&app, "/champions/Ahri").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["id"], "Ahri");
    assert_eq!(body["title"], "a Raposa de Nove Caudas");
    assert!(body["lore"].as_str().unwrap().starts_with("Conectada"));

    let skins = body["skins"].as_array().unwrap();
    assert_eq!(skins.len(), 3);

    // The default skin takes the champion's display name; others keep theirs.
    assert_eq!(skins[0]["name"], "Ahri");
    assert_eq!(skins[1]["name"], "Ahri Dinastia");
    assert_eq!(skins[2]["name"], "Ahri Raposa de Fogo");

    assert!(skins[1]["splash"].as_str().unwrap().ends_with("Ahri_1.jpg"));
    assert!(skins[2]["loading"]
        .as_str()
        .unwrap()
        .ends_with("Ahri_2.jpg"));
}

#[tokio::test]
async fn test_get_unknown_champion_is_not_found() {
    let base = spawn_upstream().await;
    let app = app_for(base);

    let (status, body) = get_authed(&app, "/champions/Unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CHAMPION_NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("Unknown"));
}

#[tokio::test]
async fn test_list_champions_with_dead_upstream_is_server_error() {
    let base = dead_upstream().await;
    let app = app_for(base);

    let (status, body) = get_authed(&app, "/champions").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPSTREAM_UNAVAILABLE");
}

// ============================================================================
// Full flow: register, login, fetch
// ============================================================================

#[tokio::test]
async fn test_register_login_then_fetch_champions() {
    let base = spawn_upstream().await;
    let app = app_for(base);

    let register = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Jane Doe",
                "birthDate": "1990-01-01",
                "username": "jane@example.com",
                "password": "Abc123!@",
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(register).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"username": "jane@example.com", "password": "Abc123!@"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let token = body["token"].as_str().unwrap().to_string();

    let champions = Request::builder()
        .method("GET")
        .uri("/champions")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(champions).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    for champion in body.as_array().unwrap() {
        let id = champion["id"].as_str().unwrap();
        let splash = champion["images"]["splash"].as_str().unwrap();
        assert!(!splash.is_empty());
        assert!(splash.contains(id));
    }
}
