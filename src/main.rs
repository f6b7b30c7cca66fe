use chrono::Utc;
use clap::Parser;
use diary_feed::utils::error::ErrorSeverity;
use diary_feed::utils::{logger, validation::Validate};
use diary_feed::{run_kinds, CliConfig, DiaryApiClient, DryRunSink, EtlError, IngestClient, RunReport, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting diary-feed");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    let generated_at = Utc::now();
    let range = args.date_range(&config.window, generated_at.date_naive());
    let kinds = args.selected_kinds();
    tracing::info!(
        "📅 Window {}..{}, kinds: {:?}",
        range.from_param(),
        range.to_param(),
        kinds
    );

    let source = DiaryApiClient::new(&config.source, &config.auth)?;

    let outcome = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - payloads will be printed, not uploaded");
        run_kinds(&kinds, &config, source, DryRunSink, &range, generated_at).await
    } else {
        let sink = IngestClient::new(&config.upload)?;
        run_kinds(&kinds, &config, source, sink, &range, generated_at).await
    };

    match outcome {
        Ok(reports) => {
            print_summary(&reports);
            Ok(())
        }
        Err(e) => {
            report_failure(&e);
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn print_summary(reports: &[RunReport]) {
    tracing::info!("✅ Published {} feed(s)", reports.len());
    for report in reports {
        println!("✅ {}: {} record(s), {}", report.kind, report.record_count, report.stage);
    }
}

fn report_failure(e: &EtlError) {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
