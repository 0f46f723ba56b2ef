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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets: Vec<PlanetDto> = planet_service
        .get_planets()
        .await?
        .into_iter()
        .map(PlanetDto::from)
        .collect();

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when the planet exists", body = PlanetDto),
        (status = 404, description = "Planet not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = planet_id?;
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service.get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Planet created", body = ResponseDto),
        (status = 400, description = "Missing field or rejected by the database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;
    let planet_service = PlanetService::new(&state.db);

    planet_service.create_planet(payload).await?;

    Ok((StatusCode::OK, Json(ResponseDto::new("Success! Planet added."))))
}
