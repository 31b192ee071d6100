use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum InferenceError {
    AdapterLoadFailed,
    GenerationFailed,
}

impl InferenceError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::AdapterLoadFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to load adapter.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate image.".to_string(),
            },
        }
    }
}
