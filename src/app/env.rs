use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub model_path: String,
    pub clip_path: String,
    pub vae_path: String,
    pub device: String,
    pub flow_dtype: String,
    pub text_enc_dtype: String,
    pub ae_dtype: String,

    pub lora_dir: String,
    pub output_dir: String,
    pub prompt_prefixes_path: Option<String>,

    pub uploadthing_api_key: String,
    pub uploadthing_api_url: Option<String>,
}
