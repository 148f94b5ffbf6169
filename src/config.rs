//! Configuration management for the resume screener

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub scoring: ScoringConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the embedding similarity in the final score.
    pub semantic_weight: f64,
    /// Weight of the keyword overlap in the final score.
    pub skill_weight: f64,
    /// Lowercase keywords scanned in both documents by substring containment.
    pub skill_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-screener")
            .join("models");

        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8000".to_string(),
            },
            model: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            scoring: ScoringConfig::default(),
            client: ClientConfig {
                server_url: "http://127.0.0.1:8000".to_string(),
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            semantic_weight: 0.7,
            skill_weight: 0.3,
            skill_keywords: default_skill_keywords(),
        }
    }
}

/// Default skill vocabulary scanned in resumes and job descriptions.
fn default_skill_keywords() -> Vec<String> {
    [
        "python",
        "machine learning",
        "tensorflow",
        "pytorch",
        "llm",
        "rag",
        "vector database",
        "langchain",
        "langgraph",
        "api",
        "docker",
        "kubernetes",
        "fastapi",
        "aws",
        "azure",
        "gcp",
        "eks",
        "ci/cd",
        "gitlab",
        "mlops",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AnalysisError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AnalysisError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.model.models_dir
    }
}
