// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Configuration(ConfigurationError),
}

/// Misuse of the banner configuration API.
///
/// These are reported at setter time so that a bad value never reaches the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested font family is not registered in the [`FontBook`].
    ///
    /// [`FontBook`]: crate::banner::FontBook
    UnknownFont(String),

    /// A setter was called after `present()`; the configuration is frozen.
    PresentationStarted,

    /// An action index that does not exist in the action strip.
    NoSuchAction(usize),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnknownFont(name) => write!(f, "Unknown font family: {}", name),
            ConfigurationError::PresentationStarted => {
                write!(f, "Banner is already presented; configuration is frozen")
            }
            ConfigurationError::NoSuchAction(index) => write!(f, "No action at index {}", index),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Configuration(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::Configuration(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unknown_font_names_the_family() {
        let err: Error = ConfigurationError::UnknownFont("Comic Serif".into()).into();
        assert_eq!(
            format!("{}", err),
            "Configuration Error: Unknown font family: Comic Serif"
        );
    }

    #[test]
    fn configuration_errors_convert_into_error() {
        let err: Error = ConfigurationError::PresentationStarted.into();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::PresentationStarted)
        ));
    }
}
