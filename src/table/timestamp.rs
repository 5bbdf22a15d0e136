use chrono::{DateTime, NaiveDateTime, Utc, Weekday};

const FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a `"YYYY-MM-DD HH:MM:SS"` start time (fractional seconds and a `T`
/// separator are tolerated).
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_matches('"');
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Naive timestamp → millis, no timezone applied.
pub fn to_millis(ts: &NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_millis()
}

pub fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

/// English weekday name. chrono's `Display` only gives `"Mon"`, and host
/// locale must never leak in here.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
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
    NAMES.get(month.checked_sub(1)? as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_source_formats() {
        let ts = parse_start_time("2017-03-06 17:23:10").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour()), (3, 6, 17));
        assert!(parse_start_time("2017-03-06 17:23:10.500").is_some());
        assert!(parse_start_time("\"2017-03-06T17:23:10\"").is_some());
        assert!(parse_start_time("06/03/2017").is_none());
        assert!(parse_start_time("").is_none());
    }

    #[test]
    fn millis_round_trip_keeps_wall_clock() {
        let ts = parse_start_time("2017-06-30 23:59:59").unwrap();
        assert_eq!(from_millis(to_millis(&ts)), Some(ts));
    }

    #[test]
    fn english_names() {
        // 2017-03-06 was a Monday
        let ts = parse_start_time("2017-03-06 00:00:00").unwrap();
        assert_eq!(weekday_name(ts.weekday()), "Monday");
        assert_eq!(month_name(3), Some("March"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
