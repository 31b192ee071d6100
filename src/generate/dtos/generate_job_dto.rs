use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateJobDto {
    pub input: GenerateInputDto,
}

// Every field is required; a missing field rejects the job instead of
// falling back to a default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateInputDto {
    #[validate(length(min = 1, message = "positive_prompt must not be empty."))]
    pub positive_prompt: String,
    pub width: i64,
    pub height: i64,
    pub seed: u64,
    pub steps: u32,
    pub guidance: f64,
    pub lora_strength_model: f64,
    pub lora_strength_clip: f64,
    pub sampler_name: String,
    pub scheduler: String,
    pub lora_file: String,
}
