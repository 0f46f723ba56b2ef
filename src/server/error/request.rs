use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{MessageDto, NotFoundDto},
    server::error::bad_request,
};

/// Failures caused by the content of a request.
///
/// The `Display` text is meant for logs, the text returned to the client is produced by the
/// `IntoResponse` implementation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Character payload is missing a required field")]
    IncompleteCharacter,
    #[error("Planet payload is missing a required field")]
    IncompletePlanet,
    #[error("Favorite payload provides neither character_id nor planet_id")]
    MissingFavoriteTarget,
    #[error("Character ID {0} not found")]
    CharacterNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Cannot favorite character ID {0} as it does not exist")]
    FavoriteCharacterMissing(i32),
    #[error("Cannot favorite planet ID {0} as it does not exist")]
    FavoritePlanetMissing(i32),
    #[error("User ID {user_id} has no favorite for character ID {character_id}")]
    CharacterFavoriteNotFound { user_id: i32, character_id: i32 },
    #[error("User ID {user_id} has no favorite for planet ID {planet_id}")]
    PlanetFavoriteNotFound { user_id: i32, planet_id: i32 },
}

impl RequestError {
    fn not_found(msg: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(NotFoundDto {
                msg: msg.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::IncompleteCharacter => {
                bad_request("Gender, name, homeworld_id and film_id are required fields")
            }
            Self::IncompletePlanet => {
                bad_request("Climate, name, resident_id and film_id are required fields")
            }
            Self::MissingFavoriteTarget => {
                bad_request("You must provide either character_id or planet_id")
            }
            Self::CharacterNotFound(_) => Self::not_found("This character doesn't exist"),
            Self::PlanetNotFound(_) => Self::not_found("This planet doesn't exist."),
            Self::UserNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto {
                    message: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::FavoritePlanetMissing(_) => bad_request("The planet_id field is required."),
            Self::PlanetFavoriteNotFound { .. } => bad_request("You must provide a planet_id"),
            Self::FavoriteCharacterMissing(_) | Self::CharacterFavoriteNotFound { .. } => {
                bad_request("You must provide a character_id")
            }
        }
    }
}
