use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Format error: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP status is not 200 OK. Status: {status}")]
    UnexpectedStatusError { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Endpoint,
}

impl TaskError {
    pub fn config(message: impl Into<String>) -> Self {
        TaskError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TaskError::ConfigError { .. } => ErrorCategory::Configuration,
            TaskError::IoError(_) | TaskError::FormatError(_) => ErrorCategory::Input,
            TaskError::NetworkError(_) | TaskError::UnexpectedStatusError { .. } => {
                ErrorCategory::Endpoint
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TaskError::ConfigError { .. } => {
                "Check the --source flag and that the env file defines URL"
            }
            TaskError::IoError(_) => "Make sure the input file exists and is readable",
            TaskError::FormatError(_) => {
                "Input must be a JSON object like {\"numbers\": [1, 2, 3]}"
            }
            TaskError::NetworkError(_) => "Check that the endpoint host is reachable",
            TaskError::UnexpectedStatusError { .. } => {
                "The endpoint answered but is not healthy; inspect the service"
            }
        }
    }

    /// Process exit code for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Endpoint => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message_carries_code() {
        let err = TaskError::UnexpectedStatusError { status: 404 };
        assert_eq!(err.to_string(), "HTTP status is not 200 OK. Status: 404");
        assert_eq!(err.category(), ErrorCategory::Endpoint);
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = vec![
            TaskError::config("missing URL"),
            TaskError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            TaskError::UnexpectedStatusError { status: 500 },
        ];

        let codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![2, 1, 3]);
    }

    #[test]
    fn test_format_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: TaskError = parse_err.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.to_string().starts_with("Format error:"));
    }
}
