//! Tests for the favorite endpoints.
//!
//! Verifies adding and removing favorites for the current user, including the response
//! messages existing clients match on and the 400 responses for missing targets.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::favorite::CreateFavoriteDto,
    server::controller::{
        favorite::{
            add_favorite, add_favorite_character, add_favorite_planet, delete_favorite_character,
            delete_favorite_planet, get_favorites,
        },
        user::get_user_favorites,
        util::current_user::CurrentUser,
    },
};
use serde_json::json;

use super::*;

/// Builds a context with one user, one planet and one character living on it
async fn galaxy_with_user() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", 1)
        .build()
        .await
}

/// Expect favorites of every user to be listed
#[tokio::test]
async fn lists_favorites_of_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_user(Some("leia"))
        .with_mock_planet("Alderaan")
        .with_favorite(1, None, Some(1))
        .with_favorite(2, None, Some(1))
        .build()
        .await?;

    let resp = get_favorites(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["user_id"], 2);
    assert_eq!(body[1]["fav_type"], "planet");

    Ok(())
}

/// Expect a favorite planet to be added with the success message
#[tokio::test]
async fn adds_favorite_from_body() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let payload = CreateFavoriteDto {
        character_id: None,
        planet_id: Some(1),
    };
    let resp = add_favorite(State(test.to_app_state()), CurrentUser(1), Ok(Json(payload)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Success! Favorite added." })
    );

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();
    assert_eq!(
        body_json(resp).await,
        json!([{ "id": 1, "user_id": 1, "fav_type": "planet", "fav_id": 1 }])
    );

    Ok(())
}

/// Expect the character to take precedence when both references are provided
#[tokio::test]
async fn adds_favorite_with_both_references() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let payload = CreateFavoriteDto {
        character_id: Some(1),
        planet_id: Some(1),
    };
    let resp = add_favorite(State(test.to_app_state()), CurrentUser(1), Ok(Json(payload)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body[0]["fav_type"], "character");
    assert_eq!(body[0]["fav_id"], 1);

    Ok(())
}

/// Expect 400 without inserting anything when neither reference is provided
#[tokio::test]
async fn rejects_favorite_without_target() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = add_favorite(
        State(test.to_app_state()),
        CurrentUser(1),
        Ok(Json(CreateFavoriteDto::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "You must provide either character_id or planet_id" })
    );

    let resp = get_favorites(State(test.to_app_state())).await.into_response();
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect the misspelled success message when adding a favorite planet
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = add_favorite_planet(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Sucess! Favorite planet added." })
    );

    Ok(())
}

/// Expect 400 when favoriting a planet that does not exist
#[tokio::test]
async fn rejects_favorite_for_missing_planet() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = add_favorite_planet(State(test.to_app_state()), CurrentUser(1), Ok(Path(99)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "The planet_id field is required." })
    );

    Ok(())
}

/// Expect "Deleted successfully" when adding a favorite character
#[tokio::test]
async fn adds_favorite_character() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = add_favorite_character(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Deleted successfully" })
    );

    let resp = get_user_favorites(State(test.to_app_state()), CurrentUser(1))
        .await
        .into_response();
    assert_eq!(body_json(resp).await[0]["fav_type"], "character");

    Ok(())
}

/// Expect 400 when favoriting a character that does not exist
#[tokio::test]
async fn rejects_favorite_for_missing_character() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = add_favorite_character(State(test.to_app_state()), CurrentUser(1), Ok(Path(7)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "You must provide a character_id" })
    );

    Ok(())
}

/// Expect only one of duplicate planet favorites to be removed
#[tokio::test]
async fn deletes_one_favorite_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Dagobah")
        .with_favorite(1, None, Some(1))
        .with_favorite(1, None, Some(1))
        .build()
        .await?;

    let resp = delete_favorite_planet(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Deleted successfully" })
    );

    let resp = get_favorites(State(test.to_app_state())).await.into_response();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Expect 400 when removing a planet the user never favorited
#[tokio::test]
async fn rejects_removing_planet_never_favorited() -> Result<(), TestError> {
    let test = galaxy_with_user().await?;

    let resp = delete_favorite_planet(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "You must provide a planet_id" })
    );

    Ok(())
}

/// Expect a favorite character to be removed
#[tokio::test]
async fn deletes_favorite_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", 1)
        .with_favorite(1, Some(1), None)
        .build()
        .await?;

    let resp = delete_favorite_character(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "response": "Deleted successfully" })
    );

    let resp = get_favorites(State(test.to_app_state())).await.into_response();
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect 400 when removing another user's favorite character
#[tokio::test]
async fn rejects_removing_other_users_favorite_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_user(Some("luke"))
        .with_user(Some("leia"))
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", 1)
        .with_favorite(2, Some(1), None)
        .build()
        .await?;

    let resp = delete_favorite_character(State(test.to_app_state()), CurrentUser(1), Ok(Path(1)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "You must provide a character_id" })
    );

    Ok(())
}
