use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

const TIMESTAMP_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p (%Z)";

/// Renders e.g. `Tuesday, March 4, 2025 at 3:45 PM (PKT)`.
pub fn format_timestamp<T>(at: &DateTime<T>) -> String
where
    T: TimeZone,
    T::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats `now` in the named IANA zone, falling back to UTC when the zone is
/// missing or unknown to the bundled tz database.
pub fn format_local(now: DateTime<Utc>, time_zone: Option<&str>) -> String {
    match time_zone.and_then(|tz| tz.parse::<Tz>().ok()) {
        Some(tz) => format_timestamp(&now.with_timezone(&tz)),
        None => {
            if let Some(tz) = time_zone {
                log::debug!("unknown time zone {tz}, formatting in UTC");
            }
            format_timestamp(&now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Karachi;

    #[test]
    fn test_afternoon_in_karachi() {
        let at = Karachi.with_ymd_and_hms(2025, 3, 4, 15, 45, 0).unwrap();
        assert_eq!(
            format_timestamp(&at),
            "Tuesday, March 4, 2025 at 3:45 PM (PKT)"
        );
    }

    #[test]
    fn test_morning_hour_has_no_padding_but_minutes_do() {
        let at = Utc.with_ymd_and_hms(2024, 12, 25, 9, 5, 0).unwrap();
        assert_eq!(
            format_timestamp(&at),
            "Wednesday, December 25, 2024 at 9:05 AM (UTC)"
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(format_timestamp(&midnight).contains("at 12:00 AM"));
        let noon = Utc.with_ymd_and_hms(2025, 1, 1, 12, 30, 0).unwrap();
        assert!(format_timestamp(&noon).contains("at 12:30 PM"));
    }

    #[test]
    fn test_format_local_converts_into_zone() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 10, 45, 0).unwrap();
        assert_eq!(
            format_local(now, Some("Asia/Karachi")),
            "Tuesday, March 4, 2025 at 3:45 PM (PKT)"
        );
    }

    #[test]
    fn test_format_local_falls_back_to_utc() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 10, 45, 0).unwrap();
        let expected = "Tuesday, March 4, 2025 at 10:45 AM (UTC)";
        assert_eq!(format_local(now, Some("Mars/Olympus_Mons")), expected);
        assert_eq!(format_local(now, None), expected);
    }
}
