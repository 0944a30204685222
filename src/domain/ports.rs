use crate::domain::model::SyllabusData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// Produces one complete syllabus per call. The prompt is owned by the
/// implementation; callers pass nothing in.
#[async_trait]
pub trait SyllabusGenerator: Send + Sync {
    async fn generate(&self) -> Result<SyllabusData>;
}
