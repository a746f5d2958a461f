//! Formatting helpers for labels, timestamps and metrics.

use time::{macros::format_description, OffsetDateTime};

/// Chart axis label, e.g. `14:03:09`.
pub fn chart_label(ts: OffsetDateTime) -> String {
    ts.format(&format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "--:--:--".to_string())
}

/// Log timestamp, e.g. `10/19/2026 14:03:09`. Contains no commas so CSV rows
/// stay aligned.
pub fn log_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[month]/[day]/[year] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| ts.unix_timestamp().to_string())
}

pub fn format_index(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn chart_label_is_time_only() {
        assert_eq!(chart_label(datetime!(2026-10-19 14:03:09 UTC)), "14:03:09");
    }

    #[test]
    fn log_timestamp_has_date_and_no_commas() {
        let stamp = log_timestamp(datetime!(2026-10-19 04:05:06 UTC));
        assert_eq!(stamp, "10/19/2026 04:05:06");
        assert!(!stamp.contains(','));
    }

    #[test]
    fn index_has_two_decimals() {
        assert_eq!(format_index(97.5), "97.50");
        assert_eq!(format_index(100.0), "100.00");
    }
}
