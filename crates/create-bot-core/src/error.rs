//! Error types for the scaffolding core

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scaffolding core
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project name does not match the accepted format
    #[error("The name '{0}' may only contain lower-case characters and dashes (at least two)")]
    InvalidName(String),

    /// The destination path already exists; the tool never overwrites
    #[error("The path '{}' already exists, unable to continue", .0.display())]
    DestinationExists(PathBuf),

    /// A file or directory could not be created
    #[error("Failed to create '{}'", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors from the npm registry client
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry answered 404; definitive, never retried
    #[error("Could not find package '{0}'")]
    NotFound(String),

    /// The configured base URL cannot take path segments
    #[error("Invalid registry base URL '{0}'")]
    BadBaseUrl(String),

    /// The registry answered with a non-success status code
    #[error("Received code {code} when fetching '{name}'")]
    BadStatus { name: String, code: u16 },

    /// The request itself failed (connection, TLS, body decode)
    #[error("Received an error while fetching the package '{name}'")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts were used up
    #[error("Failed to fetch the version for '{name}' after {attempts} attempts")]
    Exhausted { name: String, attempts: u32 },
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
