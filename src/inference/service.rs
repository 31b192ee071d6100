use std::path::PathBuf;

use crate::{
    app::models::api_error::ApiError, generate::models::resolved_parameters::ResolvedParameters,
};

use super::{
    engine::{EngineParams, InferenceEngine},
    errors::InferenceError,
    models::{adapter_state::AdapterState, generation_result::GenerationResult},
};

/// Sole owner of the shared engine instance and its adapter state. Callers
/// reach the engine only through apply_adapter/run, and the AppState wraps
/// this service in one tokio::sync::Mutex held for an entire request, so
/// adapter swaps never interleave with in-flight inference.
pub struct InferenceService {
    engine: Box<dyn InferenceEngine + Send>,
    adapter_state: AdapterState,
    adapter_dir: PathBuf,
}

impl InferenceService {
    pub fn new(engine: Box<dyn InferenceEngine + Send>, adapter_dir: PathBuf) -> Self {
        Self {
            engine,
            adapter_state: AdapterState::default(),
            adapter_dir,
        }
    }

    pub fn adapter_state(&self) -> &AdapterState {
        &self.adapter_state
    }

    /// Swaps the style adapter blended into the shared model: unloads the
    /// current one (a no-op when none is loaded), then loads
    /// `adapter_dir/adapter_id` with the given strengths. Not transactional;
    /// a failure leaves the model with no adapter, or a partially applied
    /// one, and must abort the request.
    pub fn apply_adapter(
        &mut self,
        adapter_id: &str,
        strength_model: f64,
        strength_clip: f64,
    ) -> Result<(), ApiError> {
        if self.adapter_state.loaded_adapter_id.is_some() {
            if let Err(e) = self.engine.unload_adapter() {
                tracing::error!(%e.message);
                self.adapter_state = AdapterState::default();
                return Err(InferenceError::AdapterLoadFailed.value());
            }

            self.adapter_state = AdapterState::default();
        }

        let path = self.adapter_dir.join(adapter_id);

        if let Err(e) = self.engine.load_adapter(&path, strength_model, strength_clip) {
            tracing::error!(%e.message);
            return Err(InferenceError::AdapterLoadFailed.value());
        }

        self.adapter_state = AdapterState {
            loaded_adapter_id: Some(adapter_id.to_string()),
            strength_model,
            strength_clip,
        };

        Ok(())
    }

    pub fn run(&mut self, resolved: &ResolvedParameters) -> Result<GenerationResult, ApiError> {
        let params = EngineParams {
            prompt: resolved.prompt.to_string(),
            width: resolved.width,
            height: resolved.height,
            seed: resolved.seed,
            steps: resolved.steps,
            guidance: resolved.guidance,
            sampler_name: resolved.sampler_name.to_string(),
            scheduler: resolved.scheduler.to_string(),
        };

        match self.engine.generate(&params) {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::error!(%e.message);
                Err(InferenceError::GenerationFailed.value())
            }
        }
    }
}
