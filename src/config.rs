use std::path::PathBuf;

const DEFAULT_COMPETITIONS_PATH: &str = "data/competitions.json";
const DEFAULT_MODEL_PATH: &str = "data/xg_model.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub competitions_path: PathBuf,
    pub model_path: PathBuf,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let competitions_path = std::env::var("COMPETITIONS_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPETITIONS_PATH));
        let model_path = std::env::var("XG_MODEL_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self {
            competitions_path,
            model_path,
            bind_addr,
        }
    }
}
