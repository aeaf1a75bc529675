use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Acknowledgement returned by series membership operations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
}
