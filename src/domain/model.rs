use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::services::calendar::day_floor;

/// One upstream entity exactly as the school API sent it.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Marks,
    Homework,
    Events,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Marks, RecordKind::Homework, RecordKind::Events];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Marks => "marks",
            RecordKind::Homework => "homework",
            RecordKind::Events => "events",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested window. Membership is decided on calendar days, so both ends are
/// inclusive whatever their time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: from.and_time(chrono::NaiveTime::MIN).and_utc(),
            to: to.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        let day = day_floor(date);
        day >= day_floor(self.from) && day <= day_floor(self.to)
    }

    /// `YYYY-MM-DD` form sent to the school API.
    pub fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalMark {
    pub subject_name: String,
    pub mark_value: String,
    pub edit_date: DateTime<Utc>,
    pub caption: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalHomework {
    pub subject_name: String,
    pub due_date: DateTime<Utc>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalEvent {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub subject_name: String,
    pub title: String,
    pub description: String,
    pub event_type: String,
}
