//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, Swagger UI is
//! served at `/api/docs` and the root path serves a sitemap generated from the same document.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /user` - List users
/// - `GET /user/favorites` - List favorites of the current user (also with a trailing slash)
/// - `GET, POST /characters` - List or create characters
/// - `GET /characters/{id}` - Get a character
/// - `GET, POST /planets` - List or create planets
/// - `GET /planets/{id}` - Get a planet
/// - `GET /films` - List films
/// - `GET, POST /favorites` - List all favorites or add one for the current user
/// - `POST, DELETE /favorites/planet/{id}` - Add or remove a favorite planet
/// - `DELETE /favorites/chaaracter/{id}` - Remove a favorite character
/// - `POST /favorites/characters/{id}` - Add a favorite character
/// - `GET /` - Sitemap
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::film::FILM_TAG, description = "Film API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::film::get_films))
        .routes(routes!(
            controller::favorite::get_favorites,
            controller::favorite::add_favorite
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(controller::favorite::delete_favorite_character))
        .routes(routes!(controller::favorite::add_favorite_character))
        .split_for_parts();

    let links = controller::sitemap::sitemap_links(&api);

    routes
        .route(
            "/user/favorites/",
            get(controller::user::get_user_favorites),
        )
        .route("/", get(move || controller::sitemap::sitemap(links.clone())))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
