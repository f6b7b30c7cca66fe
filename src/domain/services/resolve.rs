//! First-match-wins lookups over raw upstream records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

use crate::domain::model::RawRecord;

/// Naive layouts are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Walks a dotted path (`Subject.Abbreviation`) through nested objects.
pub fn lookup<'a>(record: &'a RawRecord, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// First candidate holding a string with visible content, trimmed.
pub fn resolve_text(record: &RawRecord, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|path| {
        lookup(record, path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

/// First candidate that parses to a valid instant. A present but unparseable
/// value does not stop the search.
pub fn resolve_date(record: &RawRecord, candidates: &[&str]) -> Option<DateTime<Utc>> {
    candidates
        .iter()
        .find_map(|path| lookup(record, path).and_then(parse_instant))
}

pub fn parse_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_date_str(text.trim()),
        // epoch milliseconds
        Value::Number(number) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Records of a payload that is either a bare array or an object holding the
/// array under one of `container_keys`. Anything else is treated as empty.
pub fn collect_records<'a>(payload: &'a Value, container_keys: &[&str]) -> Vec<&'a RawRecord> {
    let items = match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => container_keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    };

    items
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_resolve_text_respects_priority() {
        let raw = record(json!({
            "Name": "Mathematics",
            "Subject": { "Abbreviation": " Math ", "Name": "Mathematics" }
        }));

        assert_eq!(
            resolve_text(&raw, &["Subject.Abbreviation", "Subject.Name", "Name"]),
            Some("Math".to_string())
        );
        assert_eq!(
            resolve_text(&raw, &["Subject.Name", "Subject.Abbreviation"]),
            Some("Mathematics".to_string())
        );
    }

    #[test]
    fn test_resolve_text_skips_blank_and_non_string() {
        let raw = record(json!({
            "Title": "   ",
            "Value": 5,
            "Text": null,
            "Content": "Read chapter 4"
        }));

        assert_eq!(
            resolve_text(&raw, &["Title", "Value", "Text", "Content"]),
            Some("Read chapter 4".to_string())
        );
        assert_eq!(resolve_text(&raw, &["Missing", "Subject.Name"]), None);
    }

    #[test]
    fn test_lookup_through_non_object_is_absent() {
        let raw = record(json!({ "Subject": "Math" }));
        assert!(lookup(&raw, "Subject.Name").is_none());
        assert_eq!(lookup(&raw, "Subject"), Some(&json!("Math")));
    }

    #[test]
    fn test_resolve_date_falls_through_invalid_values() {
        let raw = record(json!({
            "DueDate": "not a date",
            "Deadline": "",
            "StartDate": "2024-03-10T09:30:00Z"
        }));

        assert_eq!(
            resolve_date(&raw, &["DueDate", "Deadline", "StartDate"]),
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap())
        );
        assert_eq!(resolve_date(&raw, &["DueDate", "Deadline"]), None);
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();

        assert_eq!(parse_instant(&json!("2024-03-10")), Some(expected));
        assert_eq!(parse_instant(&json!("2024-03-10T00:00:00")), Some(expected));
        assert_eq!(parse_instant(&json!("2024-03-10 00:00:00.000")), Some(expected));
        assert_eq!(parse_instant(&json!("2024-03-10T03:00:00+03:00")), Some(expected));
        assert_eq!(parse_instant(&json!(1_710_028_800_000_i64)), Some(expected));
        assert_eq!(parse_instant(&json!("10/03/2024")), None);
        assert_eq!(parse_instant(&json!(true)), None);
    }

    #[test]
    fn test_collect_records_container_variants() {
        let bare = json!([{ "a": 1 }, 7, { "b": 2 }]);
        assert_eq!(collect_records(&bare, &["Items"]).len(), 2);

        let lower = json!({ "homeworks": [{ "a": 1 }] });
        assert_eq!(collect_records(&lower, &["Homeworks", "homeworks"]).len(), 1);

        let missing = json!({ "Unrelated": [] });
        assert!(collect_records(&missing, &["Homeworks"]).is_empty());
        assert!(collect_records(&Value::Null, &["Homeworks"]).is_empty());
    }
}
