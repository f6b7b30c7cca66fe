pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    http::DiaryApiClient,
    ingest::{DryRunSink, IngestClient},
};
pub use app::run_kinds;
pub use config::toml_config::TomlConfig;
pub use core::etl::{EtlEngine, PipelineStage, RunReport};
pub use utils::error::{EtlError, Result};
