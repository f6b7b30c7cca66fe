use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::candidates::{containers, homework};
use crate::domain::model::{CanonicalHomework, DateRange};
use crate::domain::services::calendar::{format_day_month, RelativeDay};
use crate::domain::services::resolve::{collect_records, resolve_date, resolve_text};

/// How many assignments the encoded payload shows.
pub const DISPLAY_LIMIT: usize = 10;

/// Keeps assignments whose due day lies inside `range`. The window is checked
/// against the raw record's resolved due date before anything else is mapped.
pub fn normalize_homework(payload: &Value, range: &DateRange) -> Vec<CanonicalHomework> {
    collect_records(payload, containers::HOMEWORK)
        .into_iter()
        .filter_map(|raw| {
            let due_date = resolve_date(raw, homework::DUE_DATE).filter(|due| range.contains(*due))?;

            Some(CanonicalHomework {
                subject_name: resolve_text(raw, homework::SUBJECT_NAME).unwrap_or_default(),
                due_date,
                content: resolve_text(raw, homework::CONTENT).unwrap_or_default(),
            })
        })
        .collect()
}

/// Soonest first. Not capped: the encoder shows the first [`DISPLAY_LIMIT`].
pub fn order_homework(mut items: Vec<CanonicalHomework>) -> Vec<CanonicalHomework> {
    items.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    items
}

pub fn render_homework(item: &CanonicalHomework, generated_at: DateTime<Utc>) -> String {
    let relative = RelativeDay::between(generated_at, item.due_date);
    let date = format_day_month(item.due_date);

    let head = if item.subject_name.is_empty() {
        format!("{} ({})", date, relative)
    } else {
        format!("{} {} ({})", item.subject_name, date, relative)
    };

    if item.content.is_empty() {
        head
    } else {
        format!("{}: {}", head, item.content)
    }
}
