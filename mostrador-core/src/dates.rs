use chrono::NaiveDate;

/// Format produced by `<input type="date">`
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Day-first format printed on screen and in exports
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid calendar date: {0}")]
    Invalid(String),
}

/// Parse a date-picker value. Empty input means "no date".
///
/// Only calendar fields are read; nothing here goes through a UTC instant, so
/// the day never shifts with the host's timezone.
pub fn parse_input_date(input: &str) -> Result<Option<NaiveDate>, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, INPUT_FORMAT)
        .map(Some)
        .map_err(|_| DateError::Invalid(input.to_string()))
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`; empty stays empty.
pub fn format_date(input: &str) -> Result<String, DateError> {
    Ok(parse_input_date(input)?
        .map(format_naive)
        .unwrap_or_default())
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Inverse of [`format_naive`].
pub fn parse_display_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_FORMAT)
        .map_err(|_| DateError::Invalid(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05").unwrap(), "05/03/2024");
        assert_eq!(format_date("1999-12-31").unwrap(), "31/12/1999");
    }

    #[test]
    fn test_empty_input_formats_to_empty() {
        assert_eq!(format_date("").unwrap(), "");
        assert_eq!(format_date("   ").unwrap(), "");
    }

    #[test]
    fn test_month_boundaries_do_not_shift() {
        assert_eq!(format_date("2024-01-01").unwrap(), "01/01/2024");
        assert_eq!(format_date("2024-02-29").unwrap(), "29/02/2024");
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        assert!(format_date("2024-13-01").is_err());
        assert!(format_date("2023-02-29").is_err());
        assert!(format_date("05/03/2024").is_err());
        assert!(format_date("mañana").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["2024-03-05", "2000-02-29", "2031-10-19", "1970-01-01"] {
            let displayed = format_date(input).unwrap();
            let parsed = parse_display_date(&displayed).unwrap();
            assert_eq!(format_naive(parsed), displayed);
            assert_eq!(parsed.format(INPUT_FORMAT).to_string(), input);
        }
    }
}
