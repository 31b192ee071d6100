use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UploadthingPresignResponse {
    pub data: Vec<UploadthingPresignedFile>,
}

#[derive(Debug, Deserialize)]
pub struct UploadthingPresignedFile {
    pub url: String,
    pub fields: HashMap<String, String>,
    #[serde(rename(deserialize = "fileUrl"))]
    pub file_url: String,
}
