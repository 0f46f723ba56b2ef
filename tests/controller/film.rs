use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::film::get_films;
use serde_json::json;

use super::*;

/// Expect films to be listed with their director and title
#[tokio::test]
async fn lists_all_films() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_galaxy_tables()
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", 1)
        .with_mock_film("A New Hope", 1, 1)
        .build()
        .await?;

    let resp = get_films(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{
            "film_id": 1,
            "character_id": 1,
            "planet_id": 1,
            "director": "George Lucas",
            "title": "A New Hope",
        }])
    );

    Ok(())
}

/// Expect an empty array when no films exist
#[tokio::test]
async fn lists_no_films() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let resp = get_films(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}
