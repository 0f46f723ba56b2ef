use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a resource requested by ID does not exist
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundDto {
    pub msg: String,
}

/// The response when the acting user does not exist
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// The response for a successful write
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResponseDto {
    pub response: String,
}

impl ResponseDto {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
