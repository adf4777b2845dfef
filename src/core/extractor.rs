use crate::utils::error::{Result, ScoreError};
use regex::Regex;

/// 編譯擷取用的正規表達式，必須剛好有一個捕獲群組
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| ScoreError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    let groups = regex.captures_len() - 1;
    if groups != 1 {
        return Err(ScoreError::InvalidPattern {
            pattern: pattern.to_string(),
            message: format!("expected exactly one capture group, found {}", groups),
        });
    }

    Ok(regex)
}

/// Returns the first capture group of the first match in `content`.
pub fn extract<'a>(content: &'a str, pattern: &Regex) -> Result<&'a str> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScoreError::NoMatch {
            pattern: pattern.as_str().to_string(),
        })
}
