use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::candidates::{containers, event};
use crate::domain::model::{CanonicalEvent, DateRange, RawRecord};
use crate::domain::services::calendar::format_day_month_time;
use crate::domain::services::resolve::{collect_records, resolve_date, resolve_text};

/// Maps every raw event. Unlike homework, the window is applied afterwards by
/// [`filter_events`].
pub fn normalize_events(payload: &Value) -> Vec<CanonicalEvent> {
    collect_records(payload, containers::EVENTS)
        .into_iter()
        .map(normalize_event)
        .collect()
}

fn normalize_event(raw: &RawRecord) -> CanonicalEvent {
    let start_date = resolve_date(raw, event::START_DATE);
    let end_date = resolve_date(raw, event::END_DATE).or(start_date);

    CanonicalEvent {
        start_date,
        end_date,
        subject_name: resolve_text(raw, event::SUBJECT_NAME).unwrap_or_default(),
        title: resolve_text(raw, event::TITLE).unwrap_or_else(|| event::UNKNOWN_TITLE.to_string()),
        description: resolve_text(raw, event::DESCRIPTION).unwrap_or_default(),
        event_type: resolve_text(raw, event::TYPE).unwrap_or_default(),
    }
}

/// Drops events without a start and those starting outside `range`.
pub fn filter_events(events: Vec<CanonicalEvent>, range: &DateRange) -> Vec<CanonicalEvent> {
    events
        .into_iter()
        .filter(|e| e.start_date.is_some_and(|start| range.contains(start)))
        .collect()
}

pub fn order_events(mut events: Vec<CanonicalEvent>) -> Vec<CanonicalEvent> {
    events.sort_by_key(|e| e.start_date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH));
    events
}

pub fn render_event(item: &CanonicalEvent) -> String {
    let when = item
        .start_date
        .map(format_day_month_time)
        .unwrap_or_default();

    let mut line = format!("{} {}", when, item.title);
    if !item.subject_name.is_empty() {
        line.push_str(&format!(" ({})", item.subject_name));
    }
    line.trim_start().to_string()
}
