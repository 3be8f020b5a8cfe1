//! Common validation utilities.
//!
//! Dates and clock times travel as strings and are compared by exact
//! equality, so a value is only accepted in its canonical spelling: parsing
//! and re-formatting it must give back the same string.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

/// Canonical calendar date format (`2024-10-12`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical clock-time format (`14:00`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Clock-time format with seconds (`14:00:30`).
pub const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

/// Validates that a value is a canonical ISO calendar date.
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) if date.format(DATE_FORMAT).to_string() == value => Ok(()),
        _ => {
            let mut err = ValidationError::new("date_format");
            err.message = Some("Date must be formatted as YYYY-MM-DD".into());
            Err(err)
        }
    }
}

/// Validates that a value is a canonical clock time (`HH:MM` or `HH:MM:SS`).
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    let canonical = [TIME_FORMAT, TIME_FORMAT_SECONDS].iter().any(|format| {
        NaiveTime::parse_from_str(value, format)
            .map(|time| time.format(format).to_string() == value)
            .unwrap_or(false)
    });

    if canonical {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_format");
        err.message = Some("Time must be formatted as HH:MM".into());
        Err(err)
    }
}

/// Validates that a value contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-10-12").is_ok());
        assert!(validate_date("2024-02-29").is_ok());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("12-10-2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_date_rejects_non_canonical() {
        assert!(validate_date("2024-1-5").is_err());
        assert!(validate_date(" 2024-10-12").is_err());
    }

    #[test]
    fn test_validate_date_error_message() {
        let err = validate_date("tomorrow").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Date must be formatted as YYYY-MM-DD"
        );
    }

    #[test]
    fn test_validate_clock_time() {
        assert!(validate_clock_time("08:00").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("14:00:30").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("8:00").is_err());
        assert!(validate_clock_time("noon").is_err());
    }

    #[test]
    fn test_validate_clock_time_error_message() {
        let err = validate_clock_time("25:00").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Time must be formatted as HH:MM"
        );
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("GKM").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
