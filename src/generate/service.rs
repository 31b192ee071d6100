use crate::{
    app::models::api_error::ApiError, files, upload, AppState,
};

use super::{
    dtos::generate_job_dto::GenerateJobDto,
    errors::GenerateError,
    models::resolved_parameters::ResolvedParameters,
    structs::generate_response::GenerateResponse,
    util::{prompt, rounding, seed},
};

use std::sync::Arc;

/// End-to-end handling of one generation job: normalize, resolve the seed,
/// swap the adapter on the shared model, compose the prompt, run inference,
/// persist and upload. The first failing stage aborts the request; nothing
/// is compensated, so a failed request leaves whatever adapter it loaded.
pub async fn handle(dto: &GenerateJobDto, state: &Arc<AppState>) -> Result<GenerateResponse, ApiError> {
    let input = &dto.input;

    let (width, height) = normalize_dimensions(input.width, input.height)?;
    let resolved_seed = seed::resolve_seed(input.seed);

    tracing::info!(seed = resolved_seed, "resolved seed");

    // The lock spans adapter swap, inference and upload: one request at a
    // time touches the shared model, whatever the dispatch layer does.
    let mut inference = state.inference.lock().await;

    inference.apply_adapter(
        &input.lora_file,
        input.lora_strength_model,
        input.lora_strength_clip,
    )?;

    let resolved = ResolvedParameters {
        prompt: prompt::compose(&input.positive_prompt, &input.lora_file, &state.prompt_prefixes),
        width,
        height,
        seed: resolved_seed,
        steps: input.steps,
        guidance: input.guidance,
        sampler_name: input.sampler_name.to_string(),
        scheduler: input.scheduler.to_string(),
    };

    let result = inference.run(&resolved)?;
    let path = files::service::save_image(&result, &state.envy.output_dir)?;
    let artifact = upload::service::upload_file(&path, &state.envy).await?;

    tracing::info!(file = %artifact.file_name, url = %artifact.file_url, "upload complete");

    Ok(GenerateResponse {
        file: artifact.file_name,
        result: artifact.file_url,
        status: "DONE".to_string(),
    })
}

pub fn normalize_dimensions(width: i64, height: i64) -> Result<(u32, u32), ApiError> {
    let (Some(width), Some(height)) = (
        rounding::round_to_multiple(width, 16),
        rounding::round_to_multiple(height, 16),
    )
    else {
        return Err(GenerateError::InvalidDimension.value());
    };

    if width <= 0 || height <= 0 {
        return Err(GenerateError::InvalidDimension.value());
    }

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(GenerateError::InvalidDimension.value()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use tokio::sync::Mutex;

    use crate::{
        generate::dtos::generate_job_dto::GenerateInputDto,
        inference::{faker::FakerEngine, service::InferenceService},
        upload::service::tests::{spawn_mock_uploadthing, test_envy},
    };

    use super::*;

    #[test]
    fn dimensions_round_to_multiples_of_16() {
        assert_eq!(normalize_dimensions(1000, 1000).unwrap(), (1008, 1008));
        assert_eq!(normalize_dimensions(1025, 1025).unwrap(), (1024, 1024));
        assert_eq!(normalize_dimensions(512, 768).unwrap(), (512, 768));
    }

    #[test]
    fn non_positive_rounded_dimensions_are_rejected() {
        assert!(normalize_dimensions(7, 1000).is_err());
        assert!(normalize_dimensions(1000, 0).is_err());
        assert!(normalize_dimensions(-1025, 1000).is_err());
    }

    #[test]
    fn dimensions_beyond_u32_are_rejected_not_truncated() {
        // 2^32 + 16 is already a multiple of 16; it must not wrap to 16
        assert!(normalize_dimensions(4294967312, 512).is_err());
        assert!(normalize_dimensions(512, 4294967312).is_err());
        assert!(normalize_dimensions(u32::MAX as i64 + 1, 512).is_err());
    }

    #[test]
    fn extreme_dimensions_are_rejected_not_panicked_on() {
        assert!(normalize_dimensions(i64::MAX, 512).is_err());
        assert!(normalize_dimensions(512, i64::MIN).is_err());
    }

    #[test]
    fn missing_fields_reject_the_job() {
        let json = r#"{ "input": { "positive_prompt": "a cat", "width": 1000 } }"#;

        assert!(serde_json::from_str::<GenerateJobDto>(json).is_err());
    }

    fn job(lora_file: &str) -> GenerateJobDto {
        GenerateJobDto {
            input: GenerateInputDto {
                positive_prompt: "a cat".to_string(),
                width: 1000,
                height: 1000,
                seed: 42,
                steps: 20,
                guidance: 3.5,
                lora_strength_model: 1.0,
                lora_strength_clip: 1.0,
                sampler_name: "euler".to_string(),
                scheduler: "simple".to_string(),
                lora_file: lora_file.to_string(),
            },
        }
    }

    async fn state_for(api_url: &str, test_name: &str) -> Arc<AppState> {
        let output_dir = std::env::temp_dir().join(format!("flux-worker-{}-out", test_name));
        let lora_dir = std::env::temp_dir().join(format!("flux-worker-{}-loras", test_name));
        fs::create_dir_all(&lora_dir).unwrap();
        fs::write(lora_dir.join("comic.safetensors"), b"weights").unwrap();

        let mut envy = test_envy(api_url);
        envy.output_dir = output_dir.to_string_lossy().to_string();
        envy.lora_dir = lora_dir.to_string_lossy().to_string();

        let engine = FakerEngine::load(&envy).unwrap();
        let inference = InferenceService::new(Box::new(engine), PathBuf::from(&envy.lora_dir));

        Arc::new(AppState {
            envy: Arc::new(envy),
            inference: Arc::new(Mutex::new(inference)),
            prompt_prefixes: Arc::new(HashMap::from([(
                "comic.safetensors".to_string(),
                "comic book style, ".to_string(),
            )])),
        })
    }

    #[tokio::test]
    async fn handle_runs_the_full_pipeline() {
        let api_url = spawn_mock_uploadthing(false).await;
        let state = state_for(&api_url, "e2e").await;

        let response = handle(&job("comic.safetensors"), &state).await.unwrap();

        assert_eq!(response.status, "DONE");
        assert!(response.result.starts_with("https://utfs.io/f/"));
        assert!(response.file.ends_with(".png"));

        let inference = state.inference.lock().await;
        assert_eq!(
            inference.adapter_state().loaded_adapter_id,
            Some("comic.safetensors".to_string())
        );
    }

    #[tokio::test]
    async fn missing_adapter_aborts_the_request() {
        let api_url = spawn_mock_uploadthing(false).await;
        let state = state_for(&api_url, "noadapter").await;

        let result = handle(&job("nope.safetensors"), &state).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn upload_failure_leaves_the_adapter_loaded() {
        let api_url = spawn_mock_uploadthing(true).await;
        let state = state_for(&api_url, "uploadfail").await;

        let result = handle(&job("comic.safetensors"), &state).await;

        assert!(result.is_err());

        // no rollback: the adapter this request loaded stays in place for
        // the next request to observe
        let inference = state.inference.lock().await;
        assert_eq!(
            inference.adapter_state().loaded_adapter_id,
            Some("comic.safetensors".to_string())
        );
    }
}
