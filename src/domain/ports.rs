use crate::domain::model::{DateRange, RecordKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Read side of the school API.
pub trait SchoolSource: Send + Sync {
    fn access_token(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn fetch(
        &self,
        token: &str,
        kind: RecordKind,
        range: &DateRange,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Receives one fully encoded payload per run.
pub trait LineSink: Send + Sync {
    fn submit(&self, payload: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNames {
    pub line_prefix: String,
    pub updated_param: String,
}

impl LineNames {
    pub fn new(line_prefix: impl Into<String>, updated_param: impl Into<String>) -> Self {
        Self {
            line_prefix: line_prefix.into(),
            updated_param: updated_param.into(),
        }
    }

    pub fn defaults_for(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Marks => Self::new("grades_line", "grades_updated"),
            RecordKind::Homework => Self::new("homeworks_line", "homeworks_updated"),
            RecordKind::Events => Self::new("events_line", "events_updated"),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn line_names(&self, kind: RecordKind) -> LineNames;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Record: Send + Sync;

    fn kind(&self) -> RecordKind;
    async fn extract(&self, range: &DateRange) -> Result<Value>;
    fn transform(&self, payload: &Value, range: &DateRange) -> Vec<Self::Record>;
    fn encode(&self, records: &[Self::Record], generated_at: DateTime<Utc>) -> String;
    async fn load(&self, payload: &str) -> Result<()>;
}
