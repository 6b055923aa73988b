// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only settings handling can fail: raising a notification or awaiting a
//! confirmation never returns an error to the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The settings file could not be read or written.
    #[error("settings file I/O failed: {0}")]
    Io(String),
    /// The settings file is not valid TOML or does not match the schema.
    #[error("invalid settings: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        // The TOML message spans several lines with a source excerpt
        Self::Config(err.message().to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
