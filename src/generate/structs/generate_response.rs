use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub file: String,
    pub result: String,
    pub status: String,
}
