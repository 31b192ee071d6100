use std::io::Cursor;
use std::path::Path;

use bytes::Bytes;
use image::{ImageOutputFormat, Rgb, RgbImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::app::env::Envy;

use super::{
    engine::{EngineError, EngineParams, InferenceEngine},
    models::generation_result::GenerationResult,
};

/// Stand-in diffusion backend: renders deterministic seeded noise instead of
/// running a flux pipeline. Honors the full InferenceEngine contract
/// (adapter files must exist, generation is seed-deterministic) so the rest
/// of the worker behaves exactly as it would against a real backend.
pub struct FakerEngine {
    adapter: Option<String>,
}

impl FakerEngine {
    pub fn load(envy: &Envy) -> Result<FakerEngine, EngineError> {
        tracing::info!(
            model = %envy.model_path,
            clip = %envy.clip_path,
            vae = %envy.vae_path,
            device = %envy.device,
            flow_dtype = %envy.flow_dtype,
            text_enc_dtype = %envy.text_enc_dtype,
            ae_dtype = %envy.ae_dtype,
            "loading flux pipeline"
        );

        Ok(FakerEngine { adapter: None })
    }
}

impl InferenceEngine for FakerEngine {
    fn load_adapter(
        &mut self,
        path: &Path,
        _strength_model: f64,
        _strength_clip: f64,
    ) -> Result<(), EngineError> {
        if !path.exists() {
            return Err(EngineError {
                message: format!("adapter file not found: {}", path.display()),
            });
        }

        self.adapter = Some(path.display().to_string());

        Ok(())
    }

    fn unload_adapter(&mut self) -> Result<(), EngineError> {
        self.adapter = None;

        Ok(())
    }

    fn generate(&mut self, params: &EngineParams) -> Result<GenerationResult, EngineError> {
        if params.width == 0 || params.height == 0 {
            return Err(EngineError {
                message: "cannot generate an empty latent image".to_string(),
            });
        }

        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut img = RgbImage::new(params.width, params.height);

        for pixel in img.pixels_mut() {
            *pixel = Rgb([rng.gen(), rng.gen(), rng.gen()]);
        }

        let mut buf = Cursor::new(Vec::new());

        if let Err(e) = img.write_to(&mut buf, ImageOutputFormat::Png) {
            return Err(EngineError {
                message: format!("failed to encode image: {}", e),
            });
        }

        Ok(GenerationResult {
            image_bytes: Bytes::from(buf.into_inner()),
            format: "png".to_string(),
        })
    }
}
