use core::result::Result as CoreResult;
use std::io::Error as IoError;

use thiserror::Error;
use toml::de::Error as TomlError;
use toml::ser::Error as TomlSerializeError;

/// Result type for engine operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur around the analysis engine.
///
/// Analysis itself never fails; these cover configuration, the framework
/// context resource and input handed over by callers.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// TOML serialization failed.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] TomlSerializeError),

    /// Configuration values are out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller handed over input that is not a text request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A general error not covered by other variants.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error came from configuration content rather than from I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Toml(_) | Self::TomlSerialize(_) | Self::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let error1 = Error::InvalidConfig("weights sum to 0.9".to_owned());
        assert_eq!(error1.to_string(), "Invalid configuration: weights sum to 0.9");

        let error2 = Error::InvalidInput("request is not valid UTF-8".to_owned());
        assert_eq!(error2.to_string(), "Invalid input: request is not valid UTF-8");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(!error.is_config_error());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let error: Error = toml_error.into();
        assert!(matches!(error, Error::Toml(_)));
        assert!(error.is_config_error());
    }
}
