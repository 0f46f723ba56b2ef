//! Tests for the user endpoints.
//!
//! Verifies user listing never exposes passwords and that the favorites of the current user
//! are returned in the `fav_type`/`fav_id` shape.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    user::{get_user_favorites, get_users},
    util::current_user::CurrentUser,
};
use serde_json::json;

use super::*;

/// Expect every user to be listed without a password field
#[tokio::test]
async fn lists_users_without_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_user(None)
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            { "id": 1, "username": "luke" },
            { "id": 2, "username": null },
        ])
    );

    Ok(())
}

/// Expect favorites of the current user to be typed by their reference
#[tokio::test]
async fn lists_current_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_user(Some("leia"))
        .with_mock_planet("Alderaan")
        .with_mock_character("Leia Organa", 1)
        .with_favorite(1, Some(1), None)
        .with_favorite(1, None, Some(1))
        .with_favorite(2, None, Some(1))
        .with_favorite(1, None, None)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([
            { "id": 1, "user_id": 1, "fav_type": "character", "fav_id": 1 },
            { "id": 2, "user_id": 1, "fav_type": "planet", "fav_id": 1 },
            { "id": 4, "user_id": 1, "fav_type": "unknown", "fav_id": null },
        ])
    );

    Ok(())
}

/// Expect an empty array for an existing user without favorites
#[tokio::test]
async fn lists_no_favorites_for_user_without_any() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("han"))
        .build()
        .await?;

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect 404 with the `message` field when the current user does not exist
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "User not found" })
    );

    Ok(())
}
