//! Shared utility functions for the COVID dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date layouts seen across the NYC Health CSV exports, tried in order.
    /// The two-digit year goes first: `%Y` would read "20" as year 20.
    const SOURCE_DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date as it appears in the source CSVs.
    ///
    /// Accepts `MM/DD/YYYY` (tests, case-hosp-death), `YYYY-MM-DD` and the
    /// short `M/D/YY` form used by the syndromic export.
    pub fn parse_source_date(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        // A bare time suffix ("03/03/2020 00:00") shows up in some exports
        let date_part = trimmed.split_whitespace().next().unwrap_or("");
        for fmt in SOURCE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
                return Ok(date);
            }
        }
        anyhow::bail!("Unrecognized date: {:?}", s)
    }

    /// Normalize a source date to the ISO form stored in the database.
    pub fn normalize_source_date(s: &str) -> anyhow::Result<String> {
        parse_source_date(s).map(|d| format_date(&d))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_source_date_us_format() {
            let date = parse_source_date("03/03/2020").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 3).unwrap());
        }

        #[test]
        fn test_parse_source_date_short_year() {
            let date = parse_source_date("3/7/20").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 7).unwrap());
        }

        #[test]
        fn test_parse_source_date_iso_and_time_suffix() {
            let iso = parse_source_date("2020-04-15").unwrap();
            assert_eq!(iso, NaiveDate::from_ymd_opt(2020, 4, 15).unwrap());
            let with_time = parse_source_date("04/15/2020 00:00").unwrap();
            assert_eq!(with_time, iso);
        }

        #[test]
        fn test_parse_source_date_rejects_garbage() {
            assert!(parse_source_date("").is_err());
            assert!(parse_source_date("As of: May 31").is_err());
            assert!(parse_source_date("13/45/2020").is_err());
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2020-06-15");
            assert_eq!(normalize_source_date("06/15/2020").unwrap(), formatted);
        }
    }
}

/// Number formatting for display
pub mod numbers {
    /// Format an integer with comma thousands separators, e.g. `203792` -> `"203,792"`.
    pub fn format_thousands(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

}
