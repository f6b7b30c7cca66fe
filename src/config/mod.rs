pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::config::toml_config::WindowConfig;
    use crate::core::{DateRange, RecordKind};
    use chrono::NaiveDate;
    use clap::Parser;

    fn parse_kind(value: &str) -> Result<RecordKind, String> {
        match value.to_ascii_lowercase().as_str() {
            "marks" | "grades" => Ok(RecordKind::Marks),
            "homework" | "homeworks" => Ok(RecordKind::Homework),
            "events" => Ok(RecordKind::Events),
            other => Err(format!("unknown kind '{}', expected marks, homework or events", other)),
        }
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "diary-feed")]
    #[command(about = "Publishes school marks, homework and events as indexed text lines")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "diary-feed.toml")]
        pub config: String,

        /// Record kinds to publish; all of them when omitted
        #[arg(long = "kind", value_parser = parse_kind)]
        pub kinds: Vec<RecordKind>,

        /// First day of the window (YYYY-MM-DD)
        #[arg(long)]
        pub from: Option<NaiveDate>,

        /// Last day of the window (YYYY-MM-DD)
        #[arg(long)]
        pub to: Option<NaiveDate>,

        /// Print the encoded payloads instead of uploading them
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn selected_kinds(&self) -> Vec<RecordKind> {
            if self.kinds.is_empty() {
                RecordKind::ALL.to_vec()
            } else {
                self.kinds.clone()
            }
        }

        /// Explicit dates win; a missing end is filled from the configured window.
        pub fn date_range(&self, window: &WindowConfig, today: NaiveDate) -> DateRange {
            let fallback = window.around(today);
            DateRange::from_dates(
                self.from.unwrap_or_else(|| fallback.from.date_naive()),
                self.to.unwrap_or_else(|| fallback.to.date_naive()),
            )
        }
    }

}
