pub mod pipelines;

use chrono::{DateTime, Utc};

use crate::app::pipelines::{
    events_pipeline::EventsPipeline, homework_pipeline::HomeworkPipeline, marks_pipeline::MarksPipeline,
};
use crate::core::etl::{EtlEngine, RunReport};
use crate::core::{ConfigProvider, DateRange, LineSink, RecordKind, SchoolSource};
use crate::utils::error::Result;

/// Runs each kind in order with its own engine. The first failure stops the
/// run; kinds already submitted stay submitted.
pub async fn run_kinds<S, L>(
    kinds: &[RecordKind],
    config: &impl ConfigProvider,
    source: S,
    sink: L,
    range: &DateRange,
    generated_at: DateTime<Utc>,
) -> Result<Vec<RunReport>>
where
    S: SchoolSource + Clone,
    L: LineSink + Clone,
{
    let mut reports = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let names = config.line_names(kind);
        let report = match kind {
            RecordKind::Marks => {
                EtlEngine::new(MarksPipeline::new(source.clone(), sink.clone(), names))
                    .run(range, generated_at)
                    .await?
            }
            RecordKind::Homework => {
                EtlEngine::new(HomeworkPipeline::new(source.clone(), sink.clone(), names))
                    .run(range, generated_at)
                    .await?
            }
            RecordKind::Events => {
                EtlEngine::new(EventsPipeline::new(source.clone(), sink.clone(), names))
                    .run(range, generated_at)
                    .await?
            }
        };
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipelines::test_support::{MockSink, MockSource};
    use crate::core::LineNames;
    use crate::utils::error::EtlError;
    use chrono::{NaiveDate, TimeZone};
    use serde_json::json;

    struct DefaultNames;

    impl ConfigProvider for DefaultNames {
        fn line_names(&self, kind: RecordKind) -> LineNames {
            LineNames::defaults_for(kind)
        }
    }

    fn range() -> DateRange {
        DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_runs_each_kind_in_order() {
        let sink = MockSink::default();
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap();

        let reports = run_kinds(
            &RecordKind::ALL,
            &DefaultNames,
            MockSource::new(json!([])),
            sink.clone(),
            &range(),
            generated_at,
        )
        .await
        .unwrap();

        let kinds: Vec<RecordKind> = reports.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RecordKind::ALL.to_vec());

        let submitted = sink.submitted.lock().await;
        assert_eq!(
            submitted.as_slice(),
            [
                "grades_line_1=No+new+marks&grades_updated=10.03.2024",
                "homeworks_line_1=No+homework&homeworks_updated=10.03.2024",
                "events_line_1=No+events&events_updated=10.03.2024",
            ]
        );
    }

    #[tokio::test]
    async fn test_login_failure_submits_nothing() {
        let sink = MockSink::default();
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap();

        let result = run_kinds(
            &[RecordKind::Homework],
            &DefaultNames,
            MockSource::rejecting_login(),
            sink.clone(),
            &range(),
            generated_at,
        )
        .await;

        assert!(matches!(result, Err(EtlError::AuthError { .. })));
        assert!(sink.submitted.lock().await.is_empty());
    }
}
