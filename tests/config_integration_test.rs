use chrono::{NaiveDate, TimeZone, Utc};
use diary_feed::core::{ConfigProvider, RecordKind};
use diary_feed::utils::validation::Validate;
use diary_feed::{run_kinds, DiaryApiClient, DryRunSink, TomlConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_config_file_drives_dry_run() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let fetch_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/school/v2/grades")
                .header("Authorization", "Bearer from-file");
            then.status(200).json_body(json!([{
                "Subject": { "Name": "Physics" },
                "Marks": [
                    { "Value": "5", "Date": "2024-03-04T10:00:00" },
                    { "Value": "3", "Date": "2024-03-08T10:00:00" }
                ]
            }]));
        })
        .await;

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[source]
base_url = "{base}"
marks_path = "v2/grades"

[auth]
token = "from-file"

[upload]
endpoint = "https://ingest.example.org/lines"

[lines.marks]
prefix = "phys"
updated_param = "phys_at"

[window]
days_back = 7
days_ahead = 0
"#,
        base = server.url("/school")
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.line_names(RecordKind::Marks).line_prefix, "phys");

    let range = config.window.around(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let generated_at = Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap();
    let source = DiaryApiClient::new(&config.source, &config.auth)?;

    let reports = run_kinds(&[RecordKind::Marks], &config, source, DryRunSink, &range, generated_at).await?;

    fetch_mock.assert_async().await;
    assert_eq!(
        reports[0].payload,
        "phys_1=Physics%3A+3+%2808.03%29&phys_2=Physics%3A+5+%2804.03%29&phys_at=08.03.2024"
    );
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = TomlConfig::from_file("/nonexistent/diary-feed.toml");
    assert!(matches!(result, Err(diary_feed::EtlError::IoError(_))));
}
