use crate::utils::error::{Result, SyllabusError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> SyllabusError {
    SyllabusError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Provider endpoints must be absolute http(s) URLs.
pub fn validate_url(field: &str, raw: &str) -> Result<()> {
    let url =
        Url::parse(raw).map_err(|e| invalid(field, raw, format!("not an absolute URL ({e})")))?;

    if matches!(url.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(invalid(
            field,
            raw,
            format!("scheme '{}' is not http or https", url.scheme()),
        ))
    }
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    match value {
        Some(v) => Ok(v),
        None => Err(SyllabusError::MissingConfigError {
            field: field.to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(invalid(field, value, "must not be blank"))
    } else {
        Ok(())
    }
}

pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, format!("expected {min}..={max}")))
    }
}

/// TOML 替換後仍殘留 `${VAR}` 代表環境變數沒設
pub fn reject_unresolved_placeholder(field: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyllabusError::ConfigError {
        message: format!("placeholder pattern: {e}"),
    })?;

    match re.captures(value) {
        // 不回顯整個值，避免把 key 的其餘部分寫進錯誤訊息
        Some(caps) => Err(invalid(
            field,
            &caps[0],
            format!("environment variable {} is not set", &caps[1]),
        )),
        None => Ok(()),
    }
}
