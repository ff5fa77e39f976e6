// SPDX-License-Identifier: MPL-2.0
//! Error types shared by every page behavior.
//!
//! Errors never leave event dispatch: each feature logs the failure and
//! degrades on its own, so these variants mostly travel from a capability
//! (document, clipboard, config file) to the feature that logs them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required document root or element is missing.
    #[error("Environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// No clipboard capability could perform the copy.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for a missing document root or element.
    pub fn missing(what: impl Into<String>) -> Self {
        Error::EnvironmentUnavailable(what.into())
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
