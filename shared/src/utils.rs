//! # Shared Formatting Utilities
//!
//! Display helpers used by the storefront: price tags, listing dates, and
//! order timestamps.

use chrono::{DateTime, TimeZone};

/// Format an amount as a BDT price tag.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_bdt;
///
/// assert_eq!(format_bdt(250), "250 BDT");
/// ```
pub fn format_bdt(amount: u32) -> String {
    format!("{} BDT", amount)
}

/// Format a listing's RFC 3339 creation time as a short date for cards.
///
/// Unparseable timestamps are shown as-is; the sheet is not under our
/// control.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_listed_date;
///
/// assert_eq!(format_listed_date("2025-06-01T12:00:00+00:00"), "01 Jun 2025");
/// ```
pub fn format_listed_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts.format("%d %b %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format an order confirmation time, matching the summary card layout.
pub fn format_order_time<Tz: TimeZone>(ts: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%I:%M %p, %d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_bdt() {
        assert_eq!(format_bdt(10), "10 BDT");
        assert_eq!(format_bdt(1500), "1500 BDT");
    }

    #[test]
    fn test_format_listed_date() {
        assert_eq!(format_listed_date("2025-06-01T12:00:00+00:00"), "01 Jun 2025");
        assert_eq!(format_listed_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_order_time() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 14, 5, 0).unwrap();
        assert_eq!(format_order_time(ts), "02:05 PM, 01 Jun 2025");
    }
}
