use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("No node matches selector `{selector}`")]
    NotFound { selector: String },

    #[error("Pattern `{pattern}` found no value in the located content")]
    NoMatch { pattern: String },

    #[error("Captured text `{text}` is not a number")]
    FormatError { text: String },

    #[error("Failed to evaluate aspect '{aspect}': {source}")]
    Aspect {
        aspect: String,
        #[source]
        source: Box<ScoreError>,
    },

    #[error("No device info found on this page")]
    NotADevicePage,

    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("That's not a valid URL: {url} ({reason})")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in `{field}`: {message}")]
    Config { field: String, message: String },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Extraction,
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScoreError {
    pub fn aspect(aspect: &str, source: ScoreError) -> Self {
        ScoreError::Aspect {
            aspect: aspect.to_string(),
            source: Box::new(source),
        }
    }

    pub fn config(field: &str, message: impl Into<String>) -> Self {
        ScoreError::Config {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The underlying error, with any aspect context peeled off.
    pub fn kind(&self) -> &ScoreError {
        match self {
            ScoreError::Aspect { source, .. } => source.kind(),
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ScoreError::NotFound { .. }
            | ScoreError::NoMatch { .. }
            | ScoreError::FormatError { .. }
            | ScoreError::NotADevicePage => ErrorCategory::Extraction,
            ScoreError::InvalidUrl { .. } => ErrorCategory::Input,
            ScoreError::Http(_) | ScoreError::HttpStatus { .. } => ErrorCategory::Network,
            ScoreError::InvalidSelector { .. }
            | ScoreError::InvalidPattern { .. }
            | ScoreError::Toml(_)
            | ScoreError::Config { .. } => ErrorCategory::Configuration,
            ScoreError::Io(_) | ScoreError::Serialization(_) | ScoreError::Aspect { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Extraction | ErrorCategory::Input | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreError::Aspect { aspect, source } => {
                format!("Could not evaluate {}: {}", aspect, source.user_friendly_message())
            }
            ScoreError::NotFound { .. } => "The page does not list this attribute".to_string(),
            ScoreError::NoMatch { .. } => {
                "The attribute is listed but its value is in an unexpected format".to_string()
            }
            ScoreError::FormatError { text } => format!("'{}' is not a usable number", text),
            ScoreError::HttpStatus { status, .. } => {
                format!("The server answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ScoreError::NotFound { .. } | ScoreError::NotADevicePage => {
                "Check that the URL points at a device specification page"
            }
            ScoreError::NoMatch { .. } | ScoreError::FormatError { .. } => {
                "Adjust the aspect's pattern in the configuration file"
            }
            ScoreError::InvalidUrl { .. } => "Pass an absolute http:// or https:// URL",
            ScoreError::Http(_) | ScoreError::HttpStatus { .. } => {
                "Check your network connection and try again"
            }
            ScoreError::InvalidSelector { .. }
            | ScoreError::InvalidPattern { .. }
            | ScoreError::Toml(_)
            | ScoreError::Config { .. } => "Fix the configuration file and rerun",
            _ => "Rerun with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
