// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Assets(AssetError),
}

/// Reasons the character roster could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The characters directory does not exist or is not a directory.
    NotADirectory(String),

    /// The directory was readable but holds no supported image.
    Empty(String),
}

impl AssetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::NotADirectory(_) => "board-warning-characters-dir-missing",
            AssetError::Empty(_) => "board-warning-characters-dir-empty",
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotADirectory(path) => write!(f, "Not a directory: {}", path),
            AssetError::Empty(path) => write!(f, "No character images in {}", path),
        }
    }
}

impl Error {
    /// Returns the i18n key of the board warning shown for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "board-warning-characters-dir-unreadable",
            Error::Config(_) => "board-warning-config-load-error",
            Error::Assets(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Assets(e) => write!(f, "Assets Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Assets(err)
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

pub type Result<T> = std::result::Result<T, Error>;
