use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_DATA_FILE: &str = "data/content.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_mirror: Option<S3MirrorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3MirrorConfig {
    pub region: String,
    pub bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn upload_dir(&self) -> &str {
        self.upload_dir.as_deref().unwrap_or(DEFAULT_UPLOAD_DIR)
    }

    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }
}
