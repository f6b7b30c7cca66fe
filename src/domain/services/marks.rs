use serde_json::Value;

use crate::domain::candidates::{containers, mark};
use crate::domain::model::{CanonicalMark, RawRecord};
use crate::domain::services::calendar::format_day_month;
use crate::domain::services::resolve::{collect_records, resolve_date, resolve_text};

pub const MAX_MARKS: usize = 10;

/// Flattens subject groups into marks. Marks without a value or a usable edit
/// date are dropped here. No date window is applied: the window only bounds
/// what the API is asked for.
pub fn normalize_marks(payload: &Value) -> Vec<CanonicalMark> {
    collect_records(payload, containers::MARK_GROUPS)
        .into_iter()
        .flat_map(normalize_group)
        .collect()
}

fn normalize_group(group: &RawRecord) -> Vec<CanonicalMark> {
    let subject_name = resolve_text(group, mark::SUBJECT_NAME).unwrap_or_default();

    let nested = containers::MARKS_IN_GROUP
        .iter()
        .find_map(|key| group.get(*key).and_then(Value::as_array));

    let Some(nested) = nested else {
        return Vec::new();
    };

    nested
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|raw| {
            let mark_value = resolve_text(raw, mark::VALUE)?;
            let edit_date = resolve_date(raw, mark::EDIT_DATE)?;

            Some(CanonicalMark {
                subject_name: subject_name.clone(),
                mark_value,
                edit_date,
                caption: resolve_text(raw, mark::CAPTION).unwrap_or_default(),
                theme: resolve_text(raw, mark::THEME).unwrap_or_default(),
            })
        })
        .collect()
}

/// Newest first, at most [`MAX_MARKS`].
pub fn order_marks(mut marks: Vec<CanonicalMark>) -> Vec<CanonicalMark> {
    marks.sort_by(|a, b| b.edit_date.cmp(&a.edit_date));
    marks.truncate(MAX_MARKS);
    marks
}

pub fn render_mark(mark: &CanonicalMark) -> String {
    let date = format_day_month(mark.edit_date);
    if mark.subject_name.is_empty() {
        format!("{} ({})", mark.mark_value, date)
    } else {
        format!("{}: {} ({})", mark.subject_name, mark.mark_value, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_subject_resolved_once_per_group() {
        let payload = json!({
            "Subjects": [
                {
                    "Subject": { "Abbreviation": "Math", "Name": "Mathematics" },
                    "Marks": [
                        { "MarkValue": "5", "EditDate": "2024-03-10T08:00:00Z", "Theme": "Fractions" },
                        { "Value": "4", "Date": "2024-03-11" }
                    ]
                },
                {
                    "Name": "History",
                    "marks": [{ "value": "3", "editDate": "2024-03-12" }]
                }
            ]
        });

        let marks = normalize_marks(&payload);

        assert_eq!(marks.len(), 3);
        assert_eq!(marks[0].subject_name, "Math");
        assert_eq!(marks[0].theme, "Fractions");
        assert_eq!(marks[1].subject_name, "Math");
        assert_eq!(marks[1].mark_value, "4");
        assert_eq!(marks[2].subject_name, "History");
    }

    #[test]
    fn test_marks_without_value_or_date_are_dropped() {
        let payload = json!([{
            "Name": "Physics",
            "Marks": [
                { "MarkValue": "  ", "EditDate": "2024-03-10" },
                { "MarkValue": "5", "EditDate": "yesterday" },
                { "EditDate": "2024-03-10" },
                { "MarkValue": "5" },
                "garbage"
            ]
        }]);

        assert!(normalize_marks(&payload).is_empty());
    }

    #[test]
    fn test_missing_containers_yield_nothing() {
        assert!(normalize_marks(&json!({})).is_empty());
        assert!(normalize_marks(&json!({ "Subjects": [{ "Name": "Art" }] })).is_empty());
    }

    #[test]
    fn test_order_keeps_ten_newest() {
        let marks: Vec<CanonicalMark> = (1..=15)
            .map(|day| CanonicalMark {
                subject_name: "Math".to_string(),
                mark_value: day.to_string(),
                edit_date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
                caption: String::new(),
                theme: String::new(),
            })
            .collect();

        let ordered = order_marks(marks);

        assert_eq!(ordered.len(), MAX_MARKS);
        let values: Vec<&str> = ordered.iter().map(|m| m.mark_value.as_str()).collect();
        assert_eq!(values, ["15", "14", "13", "12", "11", "10", "9", "8", "7", "6"]);
    }

    #[test]
    fn test_render_mark() {
        let mut mark = CanonicalMark {
            subject_name: "Math".to_string(),
            mark_value: "5".to_string(),
            edit_date: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            caption: String::new(),
            theme: String::new(),
        };
        assert_eq!(render_mark(&mark), "Math: 5 (09.03)");

        mark.subject_name.clear();
        assert_eq!(render_mark(&mark), "5 (09.03)");
    }
}
