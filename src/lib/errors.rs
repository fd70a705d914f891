use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// HTTP status code for `Http` errors, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 400 responses, which forms render inline as validation text.
    pub fn is_validation(&self) -> bool {
        self.status() == Some(400)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn status_is_exposed_only_for_http_errors() {
        let http = AppError::Http {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(http.status(), Some(404));
        assert_eq!(AppError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let invalid = AppError::Http {
            status: 400,
            message: "username taken".to_string(),
        };
        assert!(invalid.is_validation());
        let denied = AppError::Http {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert!(!denied.is_validation());
    }
}
