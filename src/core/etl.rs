use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Instant;

use crate::core::{DateRange, Pipeline, RecordKind};
use crate::utils::error::Result;

/// Where a run stands. `Failed` is terminal and only reachable from the IO
/// stages; normalizing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetching,
    Normalizing,
    Encoded,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Fetching => "fetching",
            PipelineStage::Normalizing => "normalizing",
            PipelineStage::Encoded => "encoded",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub kind: RecordKind,
    pub stage: PipelineStage,
    pub record_count: usize,
    pub payload: String,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// One sequential pass: fetch, normalize, encode, submit. Any IO failure
    /// ends the run before anything is submitted.
    pub async fn run(&self, range: &DateRange, generated_at: DateTime<Utc>) -> Result<RunReport> {
        let kind = self.pipeline.kind();
        let started = Instant::now();

        tracing::info!(
            "▶️ {}: {} for {}..{}",
            kind,
            PipelineStage::Fetching,
            range.from_param(),
            range.to_param()
        );
        let payload = match self.pipeline.extract(range).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("❌ {}: {} while fetching: {}", kind, PipelineStage::Failed, e);
                return Err(e);
            }
        };

        tracing::debug!("🔄 {}: {}", kind, PipelineStage::Normalizing);
        let records = self.pipeline.transform(&payload, range);
        let record_count = records.len();
        tracing::info!("🔄 {}: {} records after normalizing", kind, record_count);

        let encoded = self.pipeline.encode(&records, generated_at);
        tracing::debug!("📦 {}: {} ({} bytes)", kind, PipelineStage::Encoded, encoded.len());

        if let Err(e) = self.pipeline.load(&encoded).await {
            tracing::error!("❌ {}: submission failed: {}", kind, e);
            return Err(e);
        }

        tracing::info!("✅ {}: submitted in {:?}", kind, started.elapsed());
        Ok(RunReport {
            kind,
            stage: PipelineStage::Encoded,
            record_count,
            payload: encoded,
        })
    }
}
