use std::fs;
use std::path::PathBuf;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::{
    app::models::api_error::ApiError, inference::models::generation_result::GenerationResult,
};

/// Writes the rendered image under the output directory using a per-request
/// unique name, so no two requests ever share a path on disk.
pub fn save_image(result: &GenerationResult, output_dir: &str) -> Result<PathBuf, ApiError> {
    if let Err(e) = fs::create_dir_all(output_dir) {
        tracing::error!(%e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to create output directory.".to_string(),
        });
    }

    let file_name = format!("{}.{}", Uuid::new_v4().simple(), result.format);
    let path = PathBuf::from(output_dir).join(file_name);

    match fs::write(&path, &result.image_bytes) {
        Ok(_) => Ok(path),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to write image to disk.".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn result() -> GenerationResult {
        GenerationResult {
            image_bytes: Bytes::from_static(b"not a real png"),
            format: "png".to_string(),
        }
    }

    #[test]
    fn writes_a_unique_png_per_call() {
        let dir = std::env::temp_dir().join("flux-worker-files-test");
        let dir = dir.to_str().unwrap();

        let first = save_image(&result(), dir).unwrap();
        let second = save_image(&result(), dir).unwrap();

        assert_ne!(first, second);
        assert_eq!(first.extension().unwrap(), "png");
        assert_eq!(fs::read(&first).unwrap(), b"not a real png");
    }

    #[test]
    fn unwritable_output_dir_is_an_error() {
        let result = save_image(&result(), "/proc/flux-worker-nope");

        assert!(result.is_err());
    }
}
