use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerateError {
    InvalidDimension,
}

impl GenerateError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidDimension => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "width and height must round to a positive multiple of 16."
                    .to_string(),
            },
        }
    }
}
