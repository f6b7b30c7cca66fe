use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::app::pipelines::fetch_with_token;
use crate::core::encoder::LineEncoder;
use crate::core::{CanonicalHomework, DateRange, LineNames, LineSink, Pipeline, RecordKind, SchoolSource};
use crate::domain::services::homework::{normalize_homework, order_homework, render_homework, DISPLAY_LIMIT};
use crate::utils::error::Result;

pub const EMPTY_MESSAGE: &str = "No homework";

pub struct HomeworkPipeline<S: SchoolSource, L: LineSink> {
    source: S,
    sink: L,
    names: LineNames,
}

impl<S: SchoolSource, L: LineSink> HomeworkPipeline<S, L> {
    pub fn new(source: S, sink: L, names: LineNames) -> Self {
        Self { source, sink, names }
    }
}

#[async_trait::async_trait]
impl<S: SchoolSource, L: LineSink> Pipeline for HomeworkPipeline<S, L> {
    type Record = CanonicalHomework;

    fn kind(&self) -> RecordKind {
        RecordKind::Homework
    }

    async fn extract(&self, range: &DateRange) -> Result<Value> {
        fetch_with_token(&self.source, RecordKind::Homework, range).await
    }

    fn transform(&self, payload: &Value, range: &DateRange) -> Vec<CanonicalHomework> {
        order_homework(normalize_homework(payload, range))
    }

    fn encode(&self, records: &[CanonicalHomework], generated_at: DateTime<Utc>) -> String {
        let lines: Vec<String> = records
            .iter()
            .map(|item| render_homework(item, generated_at))
            .collect();
        LineEncoder::new(&self.names)
            .with_limit(DISPLAY_LIMIT)
            .encode(&lines, EMPTY_MESSAGE, generated_at)
    }

    async fn load(&self, payload: &str) -> Result<()> {
        self.sink.submit(payload).await
    }
}
