use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Please enter a GitHub username.")]
    EmptyInput,

    #[error("request failed: {status}")]
    Http { status: u16, body: String },

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed profile response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Backend,
    Transport,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::EmptyInput => ErrorCategory::Input,
            ProfileError::Http { .. } | ProfileError::Decode(_) => ErrorCategory::Backend,
            ProfileError::Network(_) => ErrorCategory::Transport,
            ProfileError::ConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ProfileError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Backend | ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Text shown in the error view.
    ///
    /// Backend failures surface the response body verbatim when there is one,
    /// everything else uses the error's own description.
    pub fn display_message(&self) -> String {
        match self {
            ProfileError::Http { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            other => other.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::EmptyInput => "No username was given".to_string(),
            ProfileError::Http { status, .. } => {
                format!("The profile backend answered with status {}", status)
            }
            ProfileError::Network(_) => "Could not reach the profile backend".to_string(),
            ProfileError::Decode(_) => "The profile backend sent an unreadable response".to_string(),
            ProfileError::Io(e) => format!("File system error: {}", e),
            ProfileError::ConfigError { message } => format!("Configuration problem: {}", message),
            ProfileError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProfileError::EmptyInput => "Pass a username or type one at the prompt",
            ProfileError::Http { .. } => "Check the backend logs, then search again",
            ProfileError::Network(_) => {
                "Make sure the backend is running and --api-base points at it"
            }
            ProfileError::Decode(_) => "Check that --endpoint targets the profile route",
            ProfileError::Io(_) => "Check that the file exists and is readable",
            ProfileError::ConfigError { .. } | ProfileError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display_message_prefers_body() {
        let err = ProfileError::Http {
            status: 429,
            body: "rate limited\n".to_string(),
        };
        assert_eq!(err.display_message(), "rate limited");
    }

    #[test]
    fn test_http_display_message_falls_back_to_status() {
        let err = ProfileError::Http {
            status: 502,
            body: "   ".to_string(),
        };
        assert_eq!(err.display_message(), "request failed: 502");
    }

    #[test]
    fn test_severity_by_category() {
        assert_eq!(ProfileError::EmptyInput.severity(), ErrorSeverity::Low);
        let config = ProfileError::ConfigError {
            message: "api.base is not a URL".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Config);
        assert_eq!(config.severity(), ErrorSeverity::High);
    }
}
