//! Display formatting for durations and publication dates
//!
//! Stateless helpers used by the UI layer. Playback state never depends on
//! these strings.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Format a duration as `HH:MM:SS`
///
/// Hours are always shown and every field is zero padded. Sub-second
/// precision is dropped.
pub fn duration_to_time_string(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a publication timestamp as `d Mon yy` (e.g. `8 Jan 21`)
pub fn format_published(published_at: &DateTime<Utc>) -> String {
    published_at.format("%-d %b %y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_zero() {
        assert_eq!(duration_to_time_string(Duration::ZERO), "00:00:00");
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(duration_to_time_string(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(duration_to_time_string(Duration::from_secs(59)), "00:00:59");
        assert_eq!(duration_to_time_string(Duration::from_secs(3981)), "01:06:21");
    }

    #[test]
    fn drops_sub_second_precision() {
        assert_eq!(
            duration_to_time_string(Duration::from_millis(61_999)),
            "00:01:01"
        );
    }

    #[test]
    fn long_episodes_keep_counting_hours() {
        assert_eq!(
            duration_to_time_string(Duration::from_secs(100 * 3600)),
            "100:00:00"
        );
    }

    #[test]
    fn formats_published_date() {
        let date = Utc.with_ymd_and_hms(2021, 1, 8, 16, 0, 0).unwrap();
        assert_eq!(format_published(&date), "8 Jan 21");
    }
}
