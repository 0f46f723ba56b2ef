use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::model::app::AppState;

/// The user a request acts on behalf of.
///
/// There is no authentication, every request acts as the user configured through
/// `FAVORITES_USER_ID`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.favorites_user_id))
    }
}
