use crate::config::toml_config::TomlConfig;
use crate::config::ResolvedConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "syllabus-dash")]
#[command(about = "Generate and browse an AI-built HR Analytics syllabus in the terminal")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Generate once, print the dashboard and exit
    #[arg(long)]
    pub once: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併順序: CLI > TOML > 環境變數 > 預設值
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut resolved = ResolvedConfig::from_toml(&file);

        if let Some(endpoint) = &self.endpoint {
            resolved.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            resolved.model = model.clone();
        }
        if let Some(key) = &self.api_key {
            resolved.api_key = Some(key.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            resolved.timeout_seconds = timeout;
        }
        // --once 一定要先產生一次
        if self.once {
            resolved.auto_generate = true;
        }

        Ok(resolved)
    }
}
