// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-level failures from filesystem access, config files and discovery.
#[derive(Debug, Clone)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// The config file could not be parsed or serialized.
    Config(String),
    /// A discovery adapter could not list its assets.
    Discovery(String),
}

/// Outcomes of a load cycle that end with no items.
/// Used to build the user-facing error string of a `LoadState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Discovery found no file matching the extension allow-list.
    DiscoveryEmpty {
        /// Human-readable name of the scanned location (e.g. `public/photos`).
        location: String,
    },

    /// Every discovered image failed to probe.
    AllImagesFailed,

    /// Anything else that went wrong during the cycle.
    Unexpected(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::DiscoveryEmpty { location } => {
                write!(f, "No images found in {} folder", location)
            }
            LoadError::AllImagesFailed => write!(f, "Failed to load any images"),
            LoadError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<Error> for LoadError {
    fn from(err: Error) -> Self {
        LoadError::Unexpected(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Discovery(e) => write!(f, "Discovery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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
