//! Boundary validation for the text date/time formats.
//!
//! Malformed input is rejected here, before it can reach the week/month
//! engine; the engine itself only ever sees well-formed dates.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Titles must be non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    Ok(())
}

/// Parse strict zero-padded `YYYY-MM-DD`.
///
/// chrono's `%Y-%m-%d` accepts unpadded components, so the shape is
/// checked first; `"2024-3-01"` must fail, not normalize.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    if !is_date_shaped(s) {
        return Err(ValidationError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

fn is_date_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}

/// Validate strict zero-padded 24-hour `HH:MM`.
pub fn validate_time(s: &str) -> Result<(), ValidationError> {
    let err = || ValidationError::InvalidTime(s.to_string());

    let b = s.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return Err(err());
    }
    // All four positions must be digits; u8::from_str would let a
    // leading sign through
    if ![0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit()) {
        return Err(err());
    }
    let hours: u8 = s[0..2].parse().map_err(|_| err())?;
    let minutes: u8 = s[3..5].parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }
    Ok(())
}

/// Reject candidates strictly before today. Both values are whole dates,
/// already normalized to midnight; today itself is accepted.
pub fn ensure_not_past(candidate: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if candidate < today {
        return Err(ValidationError::DateInPast(candidate.to_string()));
    }
    Ok(())
}
