use crate::core::{ConfigProvider, DateRange, LineNames, RecordKind};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_DAYS_BACK: u32 = 14;
const DEFAULT_DAYS_AHEAD: u32 = 14;
const MAX_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub upload: UploadConfig,
    #[serde(default)]
    pub lines: LinesConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub marks_path: Option<String>,
    pub homework_path: Option<String>,
    pub events_path: Option<String>,
}

/// Either a static `token`, or `login`/`password` exchanged at `token_url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token_url: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinesConfig {
    pub marks: Option<LineNamesConfig>,
    pub homework: Option<LineNamesConfig>,
    pub events: Option<LineNamesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineNamesConfig {
    pub prefix: String,
    pub updated_param: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    pub days_back: Option<u32>,
    pub days_ahead: Option<u32>,
}

impl SourceConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn path_for(&self, kind: RecordKind) -> &str {
        let configured = match kind {
            RecordKind::Marks => self.marks_path.as_deref(),
            RecordKind::Homework => self.homework_path.as_deref(),
            RecordKind::Events => self.events_path.as_deref(),
        };
        configured.unwrap_or(match kind {
            RecordKind::Marks => "marks",
            RecordKind::Homework => "homeworks",
            RecordKind::Events => "events",
        })
    }
}

impl UploadConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl WindowConfig {
    /// `today` minus `days_back` through `today` plus `days_ahead`.
    pub fn around(&self, today: NaiveDate) -> DateRange {
        let back = self.days_back.unwrap_or(DEFAULT_DAYS_BACK);
        let ahead = self.days_ahead.unwrap_or(DEFAULT_DAYS_AHEAD);
        let from = today.checked_sub_days(Days::new(back.into())).unwrap_or(today);
        let to = today.checked_add_days(Days::new(ahead.into())).unwrap_or(today);
        DateRange::from_dates(from, to)
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_positive_number("source.timeout_seconds", self.source.timeout_seconds(), 1)?;
        validation::validate_url("upload.endpoint", &self.upload.endpoint)?;
        validation::validate_positive_number("upload.timeout_seconds", self.upload.timeout_seconds(), 1)?;

        if self.auth.token.is_none() {
            let token_url = validation::validate_required_field("auth.token_url", &self.auth.token_url)?;
            validation::validate_url("auth.token_url", token_url)?;
            validation::validate_required_field("auth.login", &self.auth.login)?;
            validation::validate_required_field("auth.password", &self.auth.password)?;
        }

        for kind in RecordKind::ALL {
            let names = self.line_names(kind);
            validation::validate_param_name(&format!("lines.{}.prefix", kind), &names.line_prefix)?;
            validation::validate_param_name(&format!("lines.{}.updated_param", kind), &names.updated_param)?;
        }

        if let Some(back) = self.window.days_back {
            validation::validate_range("window.days_back", back, 0, MAX_WINDOW_DAYS)?;
        }
        if let Some(ahead) = self.window.days_ahead {
            validation::validate_range("window.days_ahead", ahead, 0, MAX_WINDOW_DAYS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn line_names(&self, kind: RecordKind) -> LineNames {
        let configured = match kind {
            RecordKind::Marks => self.lines.marks.as_ref(),
            RecordKind::Homework => self.lines.homework.as_ref(),
            RecordKind::Events => self.lines.events.as_ref(),
        };
        configured
            .map(|c| LineNames::new(c.prefix.clone(), c.updated_param.clone()))
            .unwrap_or_else(|| LineNames::defaults_for(kind))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
