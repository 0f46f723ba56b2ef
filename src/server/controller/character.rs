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
        api::{ErrorDto, NotFoundDto, ResponseDto},
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{error::Error, model::app::AppState, service::character::CharacterService},
};

pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters: Vec<CharacterDto> = character_service
        .get_characters()
        .await?
        .into_iter()
        .map(CharacterDto::from)
        .collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when the character exists", body = CharacterDto),
        (status = 404, description = "Character not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = character_id?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service.get_character(character_id).await?;

    Ok((StatusCode::OK, Json(CharacterDto::from(character))))
}

/// Create a character
///
/// Gender, name, homeworld ID and film ID are all required. The name must be unique and the
/// homeworld must be an existing planet.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = ResponseDto),
        (status = 400, description = "Missing field or rejected by the database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;
    let character_service = CharacterService::new(&state.db);

    character_service.create_character(payload).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new("Success! Character added.")),
    ))
}
