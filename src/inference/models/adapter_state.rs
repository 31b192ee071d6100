/// Which style adapter is currently blended into the shared model. Mutated
/// at the start of every request that names an adapter and never reverted,
/// so it persists across requests until the next swap overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterState {
    pub loaded_adapter_id: Option<String>,
    pub strength_model: f64,
    pub strength_clip: f64,
}

impl Default for AdapterState {
    fn default() -> Self {
        Self {
            loaded_adapter_id: None,
            strength_model: 1.0,
            strength_clip: 1.0,
        }
    }
}
