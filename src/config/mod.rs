#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    reject_unresolved_placeholder, validate_non_empty_string, validate_range,
    validate_required_field, validate_url, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Final configuration after merging CLI flags, TOML file and environment.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub auto_generate: bool,
}

impl ResolvedConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key: Some(api_key.into()),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            auto_generate: true,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// 只用 TOML 與環境變數 (無 CLI 覆蓋)
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            endpoint: file
                .provider
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: file
                .provider
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: file
                .provider
                .api_key
                .clone()
                .or_else(|| std::env::var(API_KEY_ENV).ok())
                .filter(|key| !key.trim().is_empty()),
            timeout_seconds: file
                .provider
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            auto_generate: file.auto_generate(),
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        reject_unresolved_placeholder("provider.endpoint", &self.endpoint)?;
        validate_url("provider.endpoint", &self.endpoint)?;
        reject_unresolved_placeholder("provider.model", &self.model)?;
        validate_non_empty_string("provider.model", &self.model)?;
        let key = validate_required_field("provider.api_key", &self.api_key)?;
        reject_unresolved_placeholder("provider.api_key", key)?;
        validate_non_empty_string("provider.api_key", key)?;
        validate_range("provider.timeout_seconds", self.timeout_seconds, 1, 600)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SyllabusError;

    #[test]
    fn test_defaults_from_empty_toml() {
        let file = TomlConfig::default();
        let config = ResolvedConfig::from_toml(&file);

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.auto_generate);
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let config = ResolvedConfig::new("https://example.com", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = ResolvedConfig::new("https://example.com", "secret");
        config.api_key = None;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyllabusError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint_and_timeout() {
        let config = ResolvedConfig::new("not a url", "secret");
        assert!(config.validate().is_err());

        let config = ResolvedConfig::new("https://example.com", "secret").with_timeout_seconds(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unset_env_placeholder() {
        let file = TomlConfig::from_toml_str(
            r#"
[provider]
api_key = "${SYLLABUS_DASH_TEST_UNSET_KEY}"
model = "${SYLLABUS_DASH_TEST_UNSET_MODEL}"
"#,
        )
        .unwrap();
        let config = ResolvedConfig::from_toml(&file);
        assert_eq!(config.api_key.as_deref(), Some("${SYLLABUS_DASH_TEST_UNSET_KEY}"));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyllabusError::InvalidConfigValueError { .. }));
        assert!(err.to_string().contains("SYLLABUS_DASH_TEST_UNSET"));

        let config = ResolvedConfig::new("${SYLLABUS_DASH_TEST_UNSET_ENDPOINT}", "secret");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SYLLABUS_DASH_TEST_UNSET_ENDPOINT is not set"));
    }
}
