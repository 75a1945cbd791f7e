use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

pub fn response_success(message: &str) -> (StatusCode, Json<StatusResponse>) {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "success".to_string(),
            message: message.to_string(),
        }),
    )
}

pub fn response_error(message: String) -> StatusResponse {
    StatusResponse {
        status: "error".to_string(),
        message,
    }
}
