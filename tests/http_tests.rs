//! Integration tests for the HTTP routes, driven without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use mcu_graph::config::LimitSettings;
use mcu_graph::graphql::{McuSchema, build_schema, router};
use mcu_graph::model::{Character, Movie};
use mcu_graph::storage::Catalog;
use serde_json::{Value, json};
use tower::ServiceExt;

fn builtin_schema() -> McuSchema {
    build_schema(
        Arc::new(Catalog::builtin().unwrap()),
        &LimitSettings::default(),
    )
}

async fn post_graphql(app: axum::Router, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// POST /graphql
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_graphql_returns_cast_in_order() {
    let app = router(builtin_schema(), true);
    let (status, body) = post_graphql(app, "{ pictures { title characters { name } } }").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["pictures"][0]["title"], "Iron Man");
    assert_eq!(
        body["data"]["pictures"][0]["characters"],
        json!([
            { "name": "Tony Stark" },
            { "name": "James Rhodes" },
            { "name": "Nick Fury" },
            { "name": "Phil Coulson" }
        ])
    );
}

#[tokio::test]
async fn post_graphql_single_movie_catalog() {
    let catalog = Catalog::builder()
        .character(Character::new("tony-stark", "Tony Stark"))
        .character(Character::new("james-rhodes", "James Rhodes"))
        .movie(Movie::new(
            "iron-man",
            "Iron Man",
            1,
            NaiveDate::from_ymd_opt(2008, 5, 2).unwrap(),
        ))
        .cast("iron-man", ["tony-stark", "james-rhodes"])
        .build()
        .unwrap();
    let schema = build_schema(Arc::new(catalog), &LimitSettings::default());

    let (status, body) = post_graphql(
        router(schema, false),
        "{ pictures { title characters { name } } }",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none());
    assert_eq!(
        body["data"],
        json!({
            "pictures": [{
                "title": "Iron Man",
                "characters": [{ "name": "Tony Stark" }, { "name": "James Rhodes" }]
            }]
        })
    );
}

#[tokio::test]
async fn post_graphql_nulls_only_the_missing_cast() {
    let catalog = Catalog::builder()
        .character(Character::new("bruce-banner", "Bruce Banner"))
        .movie(Movie::new(
            "hulk",
            "The Incredible Hulk",
            1,
            NaiveDate::from_ymd_opt(2008, 6, 13).unwrap(),
        ))
        .build()
        .unwrap();
    let schema = build_schema(Arc::new(catalog), &LimitSettings::default());

    let (status, body) = post_graphql(
        router(schema, false),
        "{ pictures { title characters { name } } }",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "pictures": [{ "title": "The Incredible Hulk", "characters": null }] })
    );
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["pictures", 0, "characters"]));
    assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(errors[0]["message"], "No cast recorded for picture: hulk");
}

#[tokio::test]
async fn post_graphql_reports_validation_errors() {
    let app = router(builtin_schema(), true);
    let (_, body) = post_graphql(app, "{ characters { weapon } }").await;

    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert!(body["data"].is_null());
}

// ---------------------------------------------------------------------------
// GET routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_graphql_serves_graphiql_when_enabled() {
    let app = router(builtin_schema(), true);
    let (status, body) = get(app, "/graphql").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn get_graphql_not_allowed_when_playground_disabled() {
    let app = router(builtin_schema(), false);
    let (status, _) = get(app, "/graphql").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = router(builtin_schema(), false);
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = router(builtin_schema(), true);
    let (status, _) = get(app, "/this-route-does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
