/// Outcome of a completed two-phase upload. `file_name` is a fresh random
/// token per upload (never content-derived), so identical bytes uploaded
/// twice land at different URLs.
#[derive(Debug, Clone)]
pub struct UploadArtifact {
    pub file_name: String,
    pub file_url: String,
    pub status: u16,
}
