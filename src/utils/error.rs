use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown field: {name}")]
    UnknownFieldError { name: String },

    #[error("Malformed assignment '{arg}': expected FIELD=VALUE")]
    MalformedAssignment { arg: String },

    #[error("Rejected '{value}' for {field}: {reason}")]
    FieldRejected {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
}

impl CoordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            Self::UnknownFieldError { .. }
            | Self::MalformedAssignment { .. }
            | Self::FieldRejected { .. } => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for '{}' is invalid: {}", value, field, reason)
            }
            Self::UnknownFieldError { name } => format!("'{}' is not a known field", name),
            Self::MalformedAssignment { arg } => {
                format!("'{}' is missing '=' between the field and its value", arg)
            }
            Self::FieldRejected { field, value, reason } => {
                format!("Value '{}' was not accepted for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Config => "Fix the configuration file and run again",
            ErrorCategory::Input => {
                "Use fields like dd.lat, dms.lng.sec or ddm.lat.dir with values inside their range"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CoordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = CoordError::UnknownFieldError {
            name: "dms.lat.foo".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("dms.lat.foo"));

        let err = CoordError::InvalidConfigValueError {
            field: "sample.latitude".to_string(),
            value: "95".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(
            err.to_string(),
            "Invalid value '95' for 'sample.latitude': out of range"
        );

        let err = CoordError::MalformedAssignment {
            arg: "dd.lat".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(!err.user_friendly_message().contains("not a known field"));
    }
}
