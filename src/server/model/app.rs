use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_FAVORITES_USER_ID;

/// State shared with every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
    /// User ID favorites are read and written for
    pub favorites_user_id: i32,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            favorites_user_id: DEFAULT_FAVORITES_USER_ID,
        }
    }
}
