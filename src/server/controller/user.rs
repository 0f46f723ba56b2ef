use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
        user::UserDto,
    },
    server::{
        controller::util::current_user::CurrentUser,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users: Vec<UserDto> = user_service
        .get_users()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// List the favorites of the current user
#[utoipa::path(
    get,
    path = "/user/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites: Vec<FavoriteDto> = favorite_service
        .get_user_favorites(user_id)
        .await?
        .into_iter()
        .map(FavoriteDto::from)
        .collect();

    Ok((StatusCode::OK, Json(favorites)))
}
