use crate::error::ValidationError;

/// Trims a task description and rejects blank input.
pub fn parse_description(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Parses the 1-based position a listing displayed next to a task.
///
/// Zero parses fine here; whether it falls inside the current bounds is
/// the remove operation's call.
pub fn parse_position(input: &str) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidPosition(trimmed.to_string()))
}
