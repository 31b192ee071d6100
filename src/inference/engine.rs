use std::path::Path;

use crate::inference::models::generation_result::GenerationResult;

#[derive(Debug)]
pub struct EngineError {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct EngineParams {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub steps: u32,
    pub guidance: f64,
    pub sampler_name: String,
    pub scheduler: String,
}

/// The diffusion backend. One instance lives for the whole process; calls
/// are blocking and must be externally serialized (see InferenceService).
pub trait InferenceEngine: Send {
    fn load_adapter(
        &mut self,
        path: &Path,
        strength_model: f64,
        strength_clip: f64,
    ) -> Result<(), EngineError>;

    fn unload_adapter(&mut self) -> Result<(), EngineError>;

    fn generate(&mut self, params: &EngineParams) -> Result<GenerationResult, EngineError>;
}
