//! Error types for MindMash.

use thiserror::Error;

/// A shared error type for the MindMash crates.
///
/// Classification and response selection never fail, so the variants here
/// only cover the edges of the system: map import/export and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MindmashError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// A map document that does not have the expected shape
    #[error("Invalid map data format: {0}")]
    InvalidMap(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MindmashError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an InvalidMap error
    pub fn invalid_map(message: impl Into<String>) -> Self {
        Self::InvalidMap(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an InvalidMap error
    pub fn is_invalid_map(&self) -> bool {
        matches!(self, Self::InvalidMap(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error means the file was simply not there.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { message } => message.contains("NotFound"),
            _ => false,
        }
    }
}

impl From<std::io::Error> for MindmashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MindmashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MindmashError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MindmashError>`.
pub type Result<T> = std::result::Result<T, MindmashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_not_found() {
        let err: MindmashError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.is_not_found());
        assert!(!err.is_invalid_map());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: MindmashError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        match err {
            MindmashError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let err = MindmashError::invalid_map("missing `connections`");
        assert_eq!(
            err.to_string(),
            "Invalid map data format: missing `connections`"
        );
    }

    #[test]
    fn test_variants_cover_file_and_config_failures() {
        let errors = [
            MindmashError::io("disk full"),
            MindmashError::Serialization {
                format: "TOML".to_string(),
                message: "bad".to_string(),
            },
            MindmashError::invalid_map("missing `nodes`"),
            MindmashError::config("delays out of order"),
        ];
        let kinds: Vec<&str> = errors
            .iter()
            .map(|err| match err {
                MindmashError::Io { .. } => "io",
                MindmashError::Serialization { .. } => "serialization",
                MindmashError::InvalidMap(_) => "map",
                MindmashError::Config(_) => "config",
            })
            .collect();
        assert_eq!(kinds, ["io", "serialization", "map", "config"]);
        assert!(errors[3].is_config());
    }
}
