use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyllabusError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Provider returned HTTP {status}: {message}")]
    ProviderError { status: u16, message: String },

    #[error("Provider returned no syllabus content")]
    EmptyResponse,

    #[error("Response does not match the syllabus schema: {message}")]
    SchemaMismatch { message: String },

    #[error("Generation request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Generation task ended abnormally: {message}")]
    GenerationTaskFailed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Provider,
    Data,
    System,
}

impl SyllabusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_) | Self::Timeout { .. } => ErrorCategory::Network,
            Self::ProviderError { .. }
            | Self::EmptyResponse
            | Self::GenerationTaskFailed { .. } => ErrorCategory::Provider,
            Self::SerializationError(_) | Self::SchemaMismatch { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 生成失敗 (網路 / 供應商 / 回應格式) 都歸為同一種
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Provider | ErrorCategory::Data
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Yapılandırma hatası: {}", self),
            ErrorCategory::Network => "Model sağlayıcısına ulaşılamadı.".to_string(),
            ErrorCategory::Provider => "Model sağlayıcısı isteği reddetti.".to_string(),
            ErrorCategory::Data => "Model yanıtı ders programı biçimine uymuyor.".to_string(),
            ErrorCategory::System => format!("Sistem hatası: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => {
                "Set GEMINI_API_KEY or pass --api-key / [provider].api_key"
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Check the configuration file and CLI flags",
            Self::ApiError(_) | Self::Timeout { .. } => {
                "Check network connectivity or raise --timeout-seconds"
            }
            Self::ProviderError { status, .. } if *status == 401 || *status == 403 => {
                "Verify the API key has access to the selected model"
            }
            Self::ProviderError { .. }
            | Self::EmptyResponse
            | Self::GenerationTaskFailed { .. } => "Try refreshing the syllabus",
            Self::SerializationError(_) | Self::SchemaMismatch { .. } => {
                "The model answered in an unexpected shape; refresh to regenerate"
            }
            Self::IoError(_) => "Check terminal and file permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyllabusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failures_share_one_kind() {
        assert!(SyllabusError::EmptyResponse.is_generation_failure());
        assert!(SyllabusError::Timeout { seconds: 5 }.is_generation_failure());
        assert!(SyllabusError::SchemaMismatch {
            message: "missing field `weeks`".to_string()
        }
        .is_generation_failure());
        assert!(SyllabusError::ProviderError {
            status: 500,
            message: "internal".to_string()
        }
        .is_generation_failure());
        assert!(!SyllabusError::MissingConfigError {
            field: "provider.api_key".to_string()
        }
        .is_generation_failure());
    }

    #[test]
    fn test_recovery_suggestion_for_auth_failure() {
        let err = SyllabusError::ProviderError {
            status: 403,
            message: "permission denied".to_string(),
        };
        assert!(err.recovery_suggestion().contains("API key"));
        assert_eq!(err.category(), ErrorCategory::Provider);
    }
}
