use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, film::FilmDto},
    server::{error::Error, model::app::AppState, service::film::FilmService},
};

pub static FILM_TAG: &str = "film";

/// List every film
#[utoipa::path(
    get,
    path = "/films",
    tag = FILM_TAG,
    responses(
        (status = 200, description = "Success when retrieving films", body = Vec<FilmDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_films(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let film_service = FilmService::new(&state.db);

    let films: Vec<FilmDto> = film_service
        .get_films()
        .await?
        .into_iter()
        .map(FilmDto::from)
        .collect();

    Ok((StatusCode::OK, Json(films)))
}
