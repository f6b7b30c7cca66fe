use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::app::pipelines::fetch_with_token;
use crate::core::encoder::LineEncoder;
use crate::core::{CanonicalEvent, DateRange, LineNames, LineSink, Pipeline, RecordKind, SchoolSource};
use crate::domain::services::events::{filter_events, normalize_events, order_events, render_event};
use crate::utils::error::Result;

pub const EMPTY_MESSAGE: &str = "No events";

pub struct EventsPipeline<S: SchoolSource, L: LineSink> {
    source: S,
    sink: L,
    names: LineNames,
}

impl<S: SchoolSource, L: LineSink> EventsPipeline<S, L> {
    pub fn new(source: S, sink: L, names: LineNames) -> Self {
        Self { source, sink, names }
    }
}

#[async_trait::async_trait]
impl<S: SchoolSource, L: LineSink> Pipeline for EventsPipeline<S, L> {
    type Record = CanonicalEvent;

    fn kind(&self) -> RecordKind {
        RecordKind::Events
    }

    async fn extract(&self, range: &DateRange) -> Result<Value> {
        fetch_with_token(&self.source, RecordKind::Events, range).await
    }

    fn transform(&self, payload: &Value, range: &DateRange) -> Vec<CanonicalEvent> {
        order_events(filter_events(normalize_events(payload), range))
    }

    fn encode(&self, records: &[CanonicalEvent], generated_at: DateTime<Utc>) -> String {
        let lines: Vec<String> = records.iter().map(render_event).collect();
        LineEncoder::new(&self.names).encode(&lines, EMPTY_MESSAGE, generated_at)
    }

    async fn load(&self, payload: &str) -> Result<()> {
        self.sink.submit(payload).await
    }
}
