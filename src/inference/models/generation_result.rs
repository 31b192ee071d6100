use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub image_bytes: Bytes,
    pub format: String,
}
