use crate::custom_errors::store_errors::StoreError;
use crate::utilities::responses::response_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub enum ServiceError {
    InvalidPayload,
    MissingField(&'static str),
    InvalidField(&'static str),
    Store(StoreError),
}

impl ServiceError {
    pub fn error_message(&self) -> String {
        match self {
            Self::InvalidPayload => "Request body must be a JSON object".to_string(),
            Self::MissingField(field) => format!("Missing required field: {}", field),
            Self::InvalidField(field) => format!("Invalid value for field: {}", field),
            Self::Store(err) => format!("Database operation failed: {}", err),
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::MissingField(_) | Self::InvalidField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let http_status = self.status_code();
        let body = Json(response_error(self.error_message()));
        error!("service error encountered : {:?}", self);

        (http_status, body).into_response()
    }
}
