use std::path::Path;

use axum::http::StatusCode;
use reqwest::{header, multipart};
use serde_json::json;
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use uuid::Uuid;

use crate::app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError};

use super::{
    config::API_URL,
    errors::UploadError,
    models::upload_artifact::UploadArtifact,
    structs::uploadthing_presign_response::{UploadthingPresignResponse, UploadthingPresignedFile},
};

/// Runs the two-phase presigned upload with bounded backoff. The file is
/// read once up front; only the network calls sit inside the retry. A
/// presign that succeeded before a failed upload leaves an orphaned slot
/// behind, which is accepted.
pub async fn upload_file(file_path: &Path, envy: &Envy) -> Result<UploadArtifact, ApiError> {
    let Ok(file_content) = tokio::fs::read(file_path).await
    else {
        tracing::error!("failed to read {}", file_path.display());
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to read image file.".to_string(),
        });
    };

    let extension = match file_path.extension() {
        Some(extension) => extension.to_string_lossy().to_string(),
        None => "png".to_string(),
    };

    let retry_strategy = ExponentialBackoff::from_millis(10).take(3);

    Retry::spawn(retry_strategy, || async {
        try_upload_file(&file_content, &extension, envy).await
    })
    .await
}

async fn try_upload_file(
    file_content: &[u8],
    extension: &str,
    envy: &Envy,
) -> Result<UploadArtifact, ApiError> {
    let file_name = format!("{}.{}", Uuid::new_v4().simple(), extension);
    let mime_type = mime_type_for_extension(extension);

    let api_url = envy.uploadthing_api_url.as_deref().unwrap_or(API_URL);
    let client = reqwest::Client::new();

    let presigned = presign(
        &client,
        api_url,
        &envy.uploadthing_api_key,
        &file_name,
        file_content.len(),
        &mime_type,
    )
    .await?;

    let mut form = multipart::Form::new();

    for (key, value) in presigned.fields {
        form = form.text(key, value);
    }

    let part = match multipart::Part::bytes(file_content.to_vec())
        .file_name(file_name.to_string())
        .mime_str(&mime_type)
    {
        Ok(part) => part,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let result = client
        .post(&presigned.url)
        .multipart(form.part("file", part))
        .send()
        .await;

    match result {
        Ok(res) => {
            if !res.status().is_success() {
                tracing::error!("upload returned {}", res.status());
                return Err(UploadError::UploadFailed.value());
            }

            Ok(UploadArtifact {
                file_name,
                file_url: presigned.file_url,
                status: res.status().as_u16(),
            })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(UploadError::UploadFailed.value())
        }
    }
}

async fn presign(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    file_name: &str,
    file_size: usize,
    mime_type: &str,
) -> Result<UploadthingPresignedFile, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert("x-uploadthing-api-key", api_key.parse().unwrap());

    let body = json!({
        "contentDisposition": "inline",
        "acl": "public-read",
        "files": [{
            "name": file_name,
            "size": file_size,
            "type": mime_type,
        }],
    });

    let url = format!("{}/v6/uploadFiles", api_url);
    let result = client.post(url).headers(headers).json(&body).send().await;

    match result {
        Ok(res) => {
            if !res.status().is_success() {
                tracing::error!("presign returned {}", res.status());
                return Err(UploadError::PresignFailed.value());
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str::<UploadthingPresignResponse>(&text) {
                    Ok(presign_response) => match presign_response.data.into_iter().next() {
                        Some(presigned) => Ok(presigned),
                        None => {
                            tracing::error!("presign response contained no files");
                            Err(UploadError::PresignFailed.value())
                        }
                    },
                    Err(_) => {
                        tracing::error!(%text);
                        Err(UploadError::PresignFailed.value())
                    }
                },
                Err(e) => {
                    tracing::error!(%e);
                    Err(UploadError::PresignFailed.value())
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(UploadError::PresignFailed.value())
        }
    }
}

fn mime_type_for_extension(extension: &str) -> String {
    let mime_type = match extension {
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        _ => mime::APPLICATION_OCTET_STREAM,
    };

    mime_type.to_string()
}
