use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum UploadError {
    PresignFailed,
    UploadFailed,
}

impl UploadError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PresignFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to presign upload.".to_string(),
            },
            Self::UploadFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to upload file.".to_string(),
            },
        }
    }
}
