/// Request fields after normalization: dimensions rounded, seed resolved,
/// prompt composed. This is what the inference engine receives.
#[derive(Debug, Clone)]
pub struct ResolvedParameters {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub steps: u32,
    pub guidance: f64,
    pub sampler_name: String,
    pub scheduler: String,
}
