use std::{collections::HashMap, env, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;

use crate::{
    app::env::Envy,
    generate::util::prompt,
    inference::{faker::FakerEngine, service::InferenceService},
};

mod app;
mod files;
mod generate;
mod inference;
mod upload;

pub struct AppState {
    pub envy: Arc<Envy>,
    pub inference: Arc<Mutex<InferenceService>>,
    pub prompt_prefixes: Arc<HashMap<String, String>>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    // the model is loaded once and lives for the whole process
    let engine = FakerEngine::load(&envy).expect("failed to load inference engine");

    println!("model loaded");

    let prompt_prefixes =
        prompt::load_prefixes(&envy.prompt_prefixes_path).expect("failed to load prompt prefixes");

    let inference = InferenceService::new(Box::new(engine), PathBuf::from(&envy.lora_dir));

    let state = Arc::new(AppState {
        envy: Arc::new(envy),
        inference: Arc::new(Mutex::new(inference)),
        prompt_prefixes: Arc::new(prompt_prefixes),
    });

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        .route("/run", post(generate::controller::run))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
