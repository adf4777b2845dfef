use crate::utils::error::{Result, ScoreError};

/// Parses captured text as a number. The decimal separator is always `.`.
pub fn parse_number(text: &str) -> Result<f64> {
    let format_error = || ScoreError::FormatError {
        text: text.to_string(),
    };

    let trimmed = text.trim();
    // f64::from_str also accepts "inf" and "NaN"
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(format_error());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format_error()),
    }
}
