use crate::app::generators::prompt::{self, WEEK_COUNT};
use crate::domain::model::SyllabusData;
use crate::domain::ports::{ConfigProvider, SyllabusGenerator};
use crate::utils::error::{Result, SyllabusError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Gemini `generateContent` client with a fixed syllabus prompt.
pub struct GeminiGenerator<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiGenerator<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self { config, client })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_endpoint().trim_end_matches('/'),
            self.config.model()
        )
    }

    fn map_transport_error(&self, err: reqwest::Error) -> SyllabusError {
        if err.is_timeout() {
            SyllabusError::Timeout {
                seconds: self.config.timeout_seconds(),
            }
        } else {
            SyllabusError::ApiError(err)
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> SyllabusGenerator for GeminiGenerator<C> {
    async fn generate(&self) -> Result<SyllabusData> {
        let url = self.request_url();
        tracing::debug!("Requesting syllabus from: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .json(&prompt::request_body())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| body.chars().take(200).collect());
            return Err(SyllabusError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = candidate_text(&envelope).ok_or(SyllabusError::EmptyResponse)?;
        let syllabus = parse_syllabus(&text)?;

        tracing::debug!(
            "Parsed syllabus '{}' with {} weeks and {} tools",
            syllabus.course_title,
            syllabus.weeks.len(),
            syllabus.tools.len()
        );
        if syllabus.weeks.len() != WEEK_COUNT {
            tracing::warn!(
                "Expected {} weeks, provider returned {}",
                WEEK_COUNT,
                syllabus.weeks.len()
            );
        }
        if !syllabus.is_week_order_consistent() {
            tracing::warn!("Week numbers are not ordered 1..n");
        }

        Ok(syllabus)
    }
}

fn candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 解析模型回傳的 JSON；容忍 ```json 圍欄
pub fn parse_syllabus(text: &str) -> Result<SyllabusData> {
    let trimmed = text.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(json.trim()).map_err(|e| SyllabusError::SchemaMismatch {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;

    const MINIMAL: &str =
        r#"{"courseTitle":"İK Analitiği","courseDescription":"Açıklama","tools":[],"weeks":[]}"#;

    #[test]
    fn test_parse_plain_json() {
        let syllabus = parse_syllabus(MINIMAL).unwrap();
        assert_eq!(syllabus.course_title, "İK Analitiği");
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", MINIMAL);
        let syllabus = parse_syllabus(&fenced).unwrap();
        assert_eq!(syllabus.course_description, "Açıklama");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_syllabus(r#"{"title": "no course fields"}"#).unwrap_err();
        assert!(matches!(err, SyllabusError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_candidate_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] }
            }]
        }))
        .unwrap();

        assert_eq!(candidate_text(&response).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_candidate_text_empty_when_no_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert!(candidate_text(&response).is_none());
    }

    #[test]
    fn test_request_url_trims_trailing_slash() {
        let config = ResolvedConfig::new("https://example.com/", "key").with_model("gemini-test");
        let generator = GeminiGenerator::new(config).unwrap();
        assert_eq!(
            generator.request_url(),
            "https://example.com/v1beta/models/gemini-test:generateContent"
        );
    }
}
