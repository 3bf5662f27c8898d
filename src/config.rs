use serde::Deserialize;
use std::fs;

const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/zulfikar03/analysis-e-commerce-data/main";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset_base_url: String,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 30,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
