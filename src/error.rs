//! Error types for configuration resolution.
//!
//! Every failure carries the path or pattern that caused it, so a broken
//! build points at the offending file instead of at some later use site.

use std::path::PathBuf;
use thiserror::Error;

/// Failure raised while resolving the documentation build configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required file could not be opened or read.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build descriptor contains no `<version>...</version>` line.
    ///
    /// The version is never defaulted; a descriptor without a version tag
    /// aborts resolution here rather than leaving the release identifier
    /// undefined for the generator to trip over.
    #[error("No <version> tag found in {}", .path.display())]
    MissingVersionTag { path: PathBuf },

    /// An exclude pattern failed to compile.
    #[error("Invalid exclude pattern '{pattern}'")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The override file exists but is not valid TOML.
    #[error("Failed to parse {}", .path.display())]
    InvalidOverrides {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// I/O failure tagged with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
