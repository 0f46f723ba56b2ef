use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        favorite::{CreateFavoriteDto, FavoriteDto},
    },
    server::{
        controller::util::current_user::CurrentUser, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// List the favorites of every user
#[utoipa::path(
    get,
    path = "/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Success when retrieving favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites: Vec<FavoriteDto> = favorite_service
        .get_favorites()
        .await?
        .into_iter()
        .map(FavoriteDto::from)
        .collect();

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a favorite character and/or planet for the current user
#[utoipa::path(
    post,
    path = "/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 200, description = "Favorite added", body = ResponseDto),
        (status = 400, description = "Neither ID provided or rejected by the database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<CreateFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.add_favorite(user_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new("Success! Favorite added.")),
    ))
}

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorites/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Favorite planet added", body = ResponseDto),
        (status = 400, description = "Planet not found or rejected by the database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = planet_id?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_favorite_planet(user_id, planet_id)
        .await?;

    // Message spelling kept for client compatibility
    Ok((
        StatusCode::OK,
        Json(ResponseDto::new("Sucess! Favorite planet added.")),
    ))
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorites/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Favorite planet removed", body = ResponseDto),
        (status = 400, description = "Planet is not a favorite of the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = planet_id?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(ResponseDto::new("Deleted successfully"))))
}

/// Remove a character from the current user's favorites
///
/// The path is misspelled, existing clients depend on it.
#[utoipa::path(
    delete,
    path = "/favorites/chaaracter/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Favorite character removed", body = ResponseDto),
        (status = 400, description = "Character is not a favorite of the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = character_id?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::OK, Json(ResponseDto::new("Deleted successfully"))))
}

/// Add a character to the current user's favorites
///
/// Responds with "Deleted successfully" on success, existing clients depend on it.
#[utoipa::path(
    post,
    path = "/favorites/characters/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Favorite character added", body = ResponseDto),
        (status = 400, description = "Character not found or rejected by the database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = character_id?;
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .add_favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::OK, Json(ResponseDto::new("Deleted successfully"))))
}
