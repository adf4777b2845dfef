use crate::utils::error::{Result, ScoreError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(url_str: &str) -> Result<Url> {
    let invalid = |reason: String| ScoreError::InvalidUrl {
        url: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str.trim()).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 權重必須是有限且不小於 0 的數字
pub fn validate_weight(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScoreError::config(
            field_name,
            format!("Weight must be a finite number >= 0, got {}", value),
        ));
    }
    Ok(())
}

/// 完美門檻必須是有限且大於 0 的數字
pub fn validate_perfection(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScoreError::config(
            field_name,
            format!("Perfection must be a finite number > 0, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ScoreError::config(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}
