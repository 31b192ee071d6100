use std::collections::HashMap;
use std::fs;

/// Prepends the trigger prefix configured for `adapter_id`; unknown adapters
/// leave the prompt untouched.
pub fn compose(prompt: &str, adapter_id: &str, prefixes: &HashMap<String, String>) -> String {
    match prefixes.get(adapter_id) {
        Some(prefix) => [prefix, prompt].concat(),
        None => prompt.to_string(),
    }
}

/// Loads the adapter-id → prompt-prefix table from a JSON file, falling back
/// to the built-in table when no path is configured.
pub fn load_prefixes(path: &Option<String>) -> Result<HashMap<String, String>, String> {
    let Some(path) = path
    else {
        return Ok(default_prefixes());
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return Err(format!("failed to read prompt prefixes file: {}", e)),
    };

    match serde_json::from_str(&text) {
        Ok(prefixes) => Ok(prefixes),
        Err(e) => Err(format!("failed to parse prompt prefixes file: {}", e)),
    }
}

// The adapters the worker ships with and their trigger words.
fn default_prefixes() -> HashMap<String, String> {
    HashMap::from(
        [
            ("bw_pixel_anime_v1.0.safetensors", "bw_pixel_anime "),
            ("ueno.safetensors", "Ueno a black and white drawing of "),
            (
                "immoralgirl.safetensors",
                "immoralgirl black and white manga page ",
            ),
            ("manga_style_f1d.safetensors", "Black-and-white manga scene "),
            ("j_cartoon_flux_bf16.safetensors", "Juaner_cartoon "),
            ("berserk_manga_style_flux.safetensors", "berserk style "),
            (
                "Manga_and_Anime_cartoon_style_v1.safetensors",
                "Manga and Anime cartoon style ",
            ),
        ]
        .map(|(adapter_id, prefix)| (adapter_id.to_string(), prefix.to_string())),
    )
}
