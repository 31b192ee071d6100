pub mod engine;
pub mod errors;
pub mod faker;
pub mod models;
pub mod service;
