//! Small date and formatting helpers shared by both views

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Truncate a timestamp to its local calendar day as `YYYY-MM-DD`
///
/// This is the grouping key joined against the analytics summary's daily
/// buckets. The summary's days are computed server-side, so a submission
/// whose local day straddles midnight relative to the server's grouping is
/// miscounted; see DESIGN.md.
#[must_use]
pub fn local_day(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Format a timestamp for display in the submission list
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Format a timestamp as a local wall-clock time, for the "Updated" label
#[must_use]
pub fn format_clock_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Abbreviated weekday name for a `YYYY-MM-DD` bucket date
///
/// Falls back to the raw string when the date does not parse, so a chart
/// axis never goes blank over bad input.
#[must_use]
pub fn weekday_abbrev(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%a").to_string())
}

/// Render a 1-5 rating as filled and hollow stars, e.g. `★★★☆☆`
#[must_use]
pub fn star_string(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

/// First eight characters of an opaque identifier, for compact display
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_local_day_matches_local_calendar_date() {
        // Noon local time is the same calendar day in any timezone
        let local_noon = Local.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let utc = local_noon.with_timezone(&Utc);

        assert_eq!(local_day(&utc), "2025-08-01");
    }

    #[test]
    fn test_local_day_is_stable_within_a_day() {
        let morning = Local.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2025, 8, 1, 21, 30, 0).unwrap();

        assert_eq!(
            local_day(&morning.with_timezone(&Utc)),
            local_day(&evening.with_timezone(&Utc))
        );
    }

    #[test]
    fn test_weekday_abbrev() {
        // 2025-08-01 is a Friday
        assert_eq!(weekday_abbrev("2025-08-01"), "Fri");
        assert_eq!(weekday_abbrev("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string(0), "☆☆☆☆☆");
        assert_eq!(star_string(3), "★★★☆☆");
        assert_eq!(star_string(5), "★★★★★");
        // Out-of-range ratings clamp instead of panicking
        assert_eq!(star_string(9), "★★★★★");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("3f2b8c61-9a1e-4f7d"), "3f2b8c61");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_short_id_respects_char_boundaries() {
        // Multibyte identifiers must not be split mid-character
        assert_eq!(short_id("日本語のID平和見本です"), "日本語のID平和");
    }

    #[test]
    fn test_format_clock_time_shape() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 1, 12, 34, 56).unwrap();
        let formatted = format_clock_time(&ts);

        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
    }
}
