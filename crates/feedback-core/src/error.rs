//! Error types for the feedback frontend

use std::{error::Error as StdError, fmt};

/// Main error type for the feedback frontend
///
/// Display output is user-facing: validation and API variants surface their
/// message verbatim so they can be shown in a banner without reformatting.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Client-side validation failure; never reaches the network
    Validation {
        /// Field that failed validation
        field: String,
        /// User-facing validation message
        message: String,
    },

    /// Non-2xx response without a server-provided message
    Http {
        /// HTTP status code
        status: u16,
    },

    /// Non-2xx response carrying a server-provided message
    Api {
        /// HTTP status code
        status: u16,
        /// Message taken from the response `detail` body
        message: String,
    },

    /// Transport-level failure (connection refused, timeout, bad URL)
    Request(String),

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The message a banner should display for this error
    ///
    /// Validation and API errors carry text meant for the user; everything
    /// else falls back to the Display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Http { status } => write!(f, "Request failed with status {status}"),
            Self::Api { status, message } => {
                write!(f, "Request rejected ({status}): {message}")
            }
            Self::Request(msg) => write!(f, "Request error: {msg}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid base URL".to_string(),
        };

        assert_eq!(format!("{error}"), "Configuration error: Invalid base URL");
    }

    #[test]
    fn test_validation_error_display() {
        let error = Error::Validation {
            field: "rating".to_string(),
            message: "Please select a rating between 1 and 5".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Validation error: rating - Please select a rating between 1 and 5"
        );
    }

    #[test]
    fn test_validation_user_message_is_verbatim() {
        let error = Error::Validation {
            field: "review_text".to_string(),
            message: "Please enter your review".to_string(),
        };

        assert_eq!(error.user_message(), "Please enter your review");
    }

    #[test]
    fn test_http_error_is_generic() {
        let error = Error::Http { status: 503 };

        assert_eq!(format!("{error}"), "Request failed with status 503");
        assert_eq!(error.user_message(), "Request failed with status 503");
    }

    #[test]
    fn test_api_error_prefers_server_message() {
        let error = Error::Api {
            status: 422,
            message: "Review text cannot be empty or whitespace only".to_string(),
        };

        assert_eq!(
            error.user_message(),
            "Review text cannot be empty or whitespace only"
        );
        assert!(format!("{error}").contains("422"));
    }

    #[test]
    fn test_request_error() {
        let error = Error::Request("connection refused".to_string());
        assert_eq!(format!("{error}"), "Request error: connection refused");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            other => panic!("Expected Serialization error variant, got {other:?}"),
        }

        assert!(format!("{app_error}").contains("Serialization error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("Unexpected error occurred".to_string());
        assert_eq!(format!("{error}"), "Unexpected error occurred");
    }

    #[test]
    fn test_error_source_for_simple_variants() {
        let error = Error::Http { status: 500 };
        assert!(error.source().is_none());

        let error = Error::Validation {
            field: "rating".to_string(),
            message: "out of range".to_string(),
        };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
