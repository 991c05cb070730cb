pub mod config;
pub mod day;
pub mod serve;
pub mod upcoming;

use anyhow::Context;
use chrono::NaiveDate;

/// Parse a civil date given on the command line.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("'{raw}' is not a YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2024-05-14").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
        );
        assert!(parse_date("14.05.2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
