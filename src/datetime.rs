use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// 12-hour clock with a lowercase suffix. Midnight is `0:00am`, noon `0:00pm`.
pub fn format_hour(hour: u32) -> String {
    if hour >= 12 {
        format!("{}:00pm", hour - 12)
    } else {
        format!("{}:00am", hour)
    }
}

pub fn format_day_and_time(when: &NaiveDateTime) -> String {
    // DAYS is Monday-first, so index with the Monday-first weekday number.
    let day = DAYS[when.weekday().num_days_from_monday() as usize];
    let month = MONTHS[when.month0() as usize];
    format!(
        "{day}, {month} {}, {} @ {}",
        when.day(),
        when.year(),
        format_hour(when.hour())
    )
}

pub fn parse_event_time(text: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_local());
    }
    for fmt in TIME_FORMATS.iter() {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(parsed);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_hms_opt(hour, 0, 0)
            .expect("valid time")
    }

    #[test]
    fn formats_morning_hours() {
        assert_eq!(format_hour(0), "0:00am");
        assert_eq!(format_hour(9), "9:00am");
        assert_eq!(format_hour(11), "11:00am");
    }

    #[test]
    fn formats_afternoon_hours() {
        assert_eq!(format_hour(12), "0:00pm");
        assert_eq!(format_hour(13), "1:00pm");
        assert_eq!(format_hour(23), "11:00pm");
    }

    #[test]
    fn formats_day_and_time() {
        assert_eq!(
            format_day_and_time(&at(2025, 3, 5, 14)),
            "Wednesday, March 5, 2025 @ 2:00pm"
        );
    }

    #[test]
    fn formats_sunday_midnight() {
        assert_eq!(
            format_day_and_time(&at(2024, 12, 1, 0)),
            "Sunday, December 1, 2024 @ 0:00am"
        );
    }

    #[test]
    fn parses_rfc3339_keeping_its_local_fields() {
        let parsed = parse_event_time("2025-03-05T14:00:00-06:00").expect("parse rfc3339");
        assert_eq!(parsed, at(2025, 3, 5, 14));
    }

    #[test]
    fn parses_naive_formats() {
        assert_eq!(parse_event_time("2025-03-05T14:00:00"), Some(at(2025, 3, 5, 14)));
        assert_eq!(parse_event_time("2025-03-05 14:00:00"), Some(at(2025, 3, 5, 14)));
        assert_eq!(parse_event_time("2025-03-05 14:00"), Some(at(2025, 3, 5, 14)));
    }

    #[test]
    fn rejects_unrecognized_text() {
        assert_eq!(parse_event_time("next wednesday"), None);
        assert_eq!(parse_event_time(""), None);
    }
}
