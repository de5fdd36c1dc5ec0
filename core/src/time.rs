use chrono::NaiveDate;

use crate::error::ValidationError;

/// Date layout shared by the task file, the prompts and the listings.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a user-supplied duration into total minutes.
///
/// Two forms are accepted: `hh:mm`, with the minutes component limited to
/// 00..=59, and a bare decimal hour count such as `1.5`, rounded to the
/// nearest minute.
pub fn parse_duration(input: &str) -> Result<u32, ValidationError> {
    let input = input.trim();
    let invalid = || ValidationError::InvalidDuration(input.to_string());
    if input.is_empty() {
        return Err(invalid());
    }

    if let Some((hours, minutes)) = input.split_once(':') {
        let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
        if minutes > 59 {
            return Err(ValidationError::MinutesOutOfRange(minutes));
        }
        let total = u64::from(hours) * 60 + u64::from(minutes);
        return u32::try_from(total).map_err(|_| invalid());
    }

    let hours: f64 = input.parse().map_err(|_| invalid())?;
    let minutes = hours * 60.0;
    if !minutes.is_finite() || minutes < 0.0 || minutes > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(minutes.round() as u32)
}

/// Parses a `dd/mm/yyyy` due date and requires it to fall on a calendar
/// day strictly after `today`.
pub fn parse_due_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))?;
    if date <= today {
        return Err(ValidationError::DateNotInFuture(date));
    }
    Ok(date)
}

/// Splits a minute total into whole hours and leftover minutes, the shape
/// the listings and statistics print durations in.
pub fn hours_minutes(total_minutes: u64) -> (u64, u64) {
    (total_minutes / 60, total_minutes % 60)
}
