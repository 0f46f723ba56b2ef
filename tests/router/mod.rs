//! Tests for the assembled application router.
//!
//! Requests are sent through the full middleware stack with `tower::ServiceExt::oneshot`,
//! verifying path wiring (including the legacy paths clients depend on), the sitemap and the
//! OpenAPI document.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use holocron::server::{model::app::AppState, startup::build_app};
use holocron_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::{body_json, body_text};

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn app(test: &TestContext) -> Router {
    build_app(test.to_app_state())
}

/// Expect the sitemap to link the parameterless GET endpoints only
#[tokio::test]
async fn serves_sitemap_at_root() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    for path in ["/characters", "/favorites", "/films", "/planets", "/user", "/user/favorites"] {
        assert!(
            html.contains(&format!("<a href=\"{path}\">")),
            "Sitemap is missing {path}"
        );
    }
    assert!(!html.contains('{'));

    Ok(())
}

/// Expect a created planet to be retrievable by its generated ID
#[tokio::test]
async fn creates_and_fetches_planet() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let app = app(&test);

    let payload = json!({
        "climate": "arid",
        "name": "Tatooine",
        "resident_id": 1,
        "film_id": 1,
    });
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/planets", &payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Success! Planet added." })
    );

    let resp = app
        .oneshot(empty_request(Method::GET, "/planets/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "planet_id": 1,
            "climate": "arid",
            "name": "Tatooine",
            "resident_id": 1,
            "film_id": 1,
        })
    );

    Ok(())
}

/// Expect 400 with an `error` field when the body is not valid JSON
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/planets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

/// Expect the current user's favorites with and without a trailing slash
#[tokio::test]
async fn serves_user_favorites_with_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Tatooine")
        .with_favorite(1, None, Some(1))
        .build()
        .await?;
    let app = app(&test);

    for uri in ["/user/favorites", "/user/favorites/"] {
        let resp = app
            .clone()
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(
            body_json(resp).await,
            json!([{ "id": 1, "user_id": 1, "fav_type": "planet", "fav_id": 1 }])
        );
    }

    Ok(())
}

/// Expect favorites to be read for the configured user
#[tokio::test]
async fn uses_configured_favorites_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_user(Some("leia"))
        .with_mock_planet("Alderaan")
        .with_favorite(1, None, Some(1))
        .with_favorite(2, None, Some(1))
        .build()
        .await?;

    let state = AppState {
        favorites_user_id: 2,
        ..test.to_app_state()
    };
    let resp = build_app(state)
        .oneshot(empty_request(Method::GET, "/user/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{ "id": 2, "user_id": 2, "fav_type": "planet", "fav_id": 1 }])
    );

    Ok(())
}

/// Expect favorite characters to be added and removed through their legacy paths
#[tokio::test]
async fn routes_favorite_character_paths() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", 1)
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::POST, "/favorites/characters/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Deleted successfully" })
    );

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/favorites/character/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/favorites/chaaracter/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::GET, "/favorites"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect a favorite planet to be added and removed on the same path
#[tokio::test]
async fn routes_favorite_planet_paths() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Hoth")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::POST, "/favorites/planet/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/favorites/planet/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::DELETE, "/favorites/planet/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to describe the registered paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/planets/{id}"]["get"].is_object());
    assert!(doc["paths"]["/favorites/chaaracter/{id}"]["delete"].is_object());

    Ok(())
}

/// Expect 404 with an `error` field when an ID is not a number
#[tokio::test]
async fn rejects_non_numeric_id_as_not_found() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let app = app(&test);

    for (method, uri) in [
        (Method::GET, "/characters/abc"),
        (Method::GET, "/planets/abc"),
        (Method::POST, "/favorites/planet/abc"),
        (Method::DELETE, "/favorites/chaaracter/abc"),
    ] {
        let resp = app
            .clone()
            .oneshot(empty_request(method.clone(), uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert!(body_json(resp).await["error"].is_string());
    }

    Ok(())
}
