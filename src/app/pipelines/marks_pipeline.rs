use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::app::pipelines::fetch_with_token;
use crate::core::encoder::LineEncoder;
use crate::core::{CanonicalMark, DateRange, LineNames, LineSink, Pipeline, RecordKind, SchoolSource};
use crate::domain::services::marks::{normalize_marks, order_marks, render_mark};
use crate::utils::error::Result;

pub const EMPTY_MESSAGE: &str = "No new marks";

pub struct MarksPipeline<S: SchoolSource, L: LineSink> {
    source: S,
    sink: L,
    names: LineNames,
}

impl<S: SchoolSource, L: LineSink> MarksPipeline<S, L> {
    pub fn new(source: S, sink: L, names: LineNames) -> Self {
        Self { source, sink, names }
    }
}

#[async_trait::async_trait]
impl<S: SchoolSource, L: LineSink> Pipeline for MarksPipeline<S, L> {
    type Record = CanonicalMark;

    fn kind(&self) -> RecordKind {
        RecordKind::Marks
    }

    async fn extract(&self, range: &DateRange) -> Result<Value> {
        fetch_with_token(&self.source, RecordKind::Marks, range).await
    }

    // The window already bounded the request; marks are ranked, not filtered.
    fn transform(&self, payload: &Value, _range: &DateRange) -> Vec<CanonicalMark> {
        order_marks(normalize_marks(payload))
    }

    fn encode(&self, records: &[CanonicalMark], generated_at: DateTime<Utc>) -> String {
        let lines: Vec<String> = records.iter().map(render_mark).collect();
        // records are newest first
        let updated_at = records.first().map(|m| m.edit_date).unwrap_or(generated_at);
        LineEncoder::new(&self.names).encode(&lines, EMPTY_MESSAGE, updated_at)
    }

    async fn load(&self, payload: &str) -> Result<()> {
        self.sink.submit(payload).await
    }
}
