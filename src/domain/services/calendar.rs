use chrono::{DateTime, NaiveTime, Utc};
use std::fmt;

/// UTC midnight of the instant's calendar day.
pub fn day_floor(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Whole calendar days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (day_floor(to) - day_floor(from)).num_days()
}

/// How far a due date is from the generation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Overdue,
    Today,
    Tomorrow,
    InDays(u32),
}

impl RelativeDay {
    pub fn between(generated_at: DateTime<Utc>, due: DateTime<Utc>) -> Self {
        match days_between(generated_at, due) {
            days if days < 0 => RelativeDay::Overdue,
            0 => RelativeDay::Today,
            1 => RelativeDay::Tomorrow,
            days => RelativeDay::InDays(u32::try_from(days).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDay::Overdue => f.write_str("overdue"),
            RelativeDay::Today => f.write_str("today"),
            RelativeDay::Tomorrow => f.write_str("tomorrow"),
            RelativeDay::InDays(days) => write!(f, "in {} days", days),
        }
    }
}

pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%d.%m.%Y").to_string()
}

pub fn format_day_month(instant: DateTime<Utc>) -> String {
    instant.format("%d.%m").to_string()
}

pub fn format_day_month_time(instant: DateTime<Utc>) -> String {
    instant.format("%d.%m %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_floor_truncates_to_midnight() {
        let late = Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
        assert_eq!(day_floor(late), Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(day_floor(day_floor(late)), day_floor(late));
    }

    #[test]
    fn test_relative_day_uses_calendar_days() {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 10, 22, 0, 0).unwrap();

        let due = |d, h| Utc.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap();
        assert_eq!(RelativeDay::between(generated_at, due(9, 23)), RelativeDay::Overdue);
        assert_eq!(RelativeDay::between(generated_at, due(10, 1)), RelativeDay::Today);
        assert_eq!(RelativeDay::between(generated_at, due(11, 0)), RelativeDay::Tomorrow);
        assert_eq!(RelativeDay::between(generated_at, due(14, 8)), RelativeDay::InDays(4));
    }

    #[test]
    fn test_relative_day_display() {
        assert_eq!(RelativeDay::Today.to_string(), "today");
        assert_eq!(RelativeDay::Tomorrow.to_string(), "tomorrow");
        assert_eq!(RelativeDay::InDays(3).to_string(), "in 3 days");
        assert_eq!(RelativeDay::Overdue.to_string(), "overdue");
    }

    #[test]
    fn test_formats() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 8, 7, 0).unwrap();
        assert_eq!(format_date(instant), "05.03.2024");
        assert_eq!(format_day_month(instant), "05.03");
        assert_eq!(format_day_month_time(instant), "05.03 08:07");
    }
}
