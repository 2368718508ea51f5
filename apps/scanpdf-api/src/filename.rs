//! Output filename construction from the optional `date` form field.

use chrono::{Datelike, Local, NaiveDate};

/// Parse a `YYYY-MM-DD` form value, falling back to today when the field is
/// absent or unparseable.
pub fn resolve_date(value: Option<&str>) -> NaiveDate {
    value
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive())
}

/// `ddmmyy` filename stem, e.g. 2026-08-30 becomes "300826".
pub fn format_dd_mm_yy(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dd_mm_yy() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(format_dd_mm_yy(date), "300826");
    }

    #[test]
    fn test_format_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_dd_mm_yy(date), "050324");
    }

    #[test]
    fn test_resolve_valid_date() {
        let date = resolve_date(Some("2024-12-01"));
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_resolve_invalid_date_falls_back_to_today() {
        assert_eq!(resolve_date(Some("not-a-date")), Local::now().date_naive());
        assert_eq!(resolve_date(Some("")), Local::now().date_naive());
    }

    #[test]
    fn test_resolve_missing_date_falls_back_to_today() {
        assert_eq!(resolve_date(None), Local::now().date_naive());
    }
}
