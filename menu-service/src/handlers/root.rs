use axum::Json;

use crate::dtos::MessageResponse;

pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "McDonald's API is running".to_string(),
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to McDonald's API".to_string(),
    })
}
