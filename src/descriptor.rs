//! Build-descriptor version extraction.
//!
//! The release identifier shown in the generated documentation is not stored
//! in this crate. It is read from the Maven descriptor (`pom.xml`) that
//! drives the simulator build, so the documentation can never drift from the
//! artifact it describes.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

lazy_static! {
    /// A version tag on its own line: optional surrounding whitespace, a
    /// literal tag pair, the enclosed text captured as-is.
    static ref VERSION_TAG: Regex = Regex::new(r"^\s*<version>(.*)</version>\s*$").unwrap();
}

/// Read-only view over the companion build descriptor.
#[derive(Debug, Clone)]
pub struct BuildDescriptor {
    path: PathBuf,
}

impl BuildDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the version string from the first `<version>...</version>`
    /// line, scanning in file order.
    ///
    /// Fails with [`ConfigError::Io`] when the descriptor cannot be read and
    /// with [`ConfigError::MissingVersionTag`] when no line matches. The
    /// version is never defaulted.
    pub fn extract_version(&self) -> Result<String, ConfigError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;

        match scan_version(&contents) {
            Some(version) => {
                debug!(
                    "Extracted version '{}' from {}",
                    version,
                    self.path.display()
                );
                Ok(version)
            }
            None => Err(ConfigError::MissingVersionTag {
                path: self.path.clone(),
            }),
        }
    }
}

/// Scan already-loaded descriptor text for the first version tag line.
///
/// The capture is returned exactly as written: whitespace inside the tags is
/// preserved, nothing is trimmed, and no version-format validation happens
/// here. Lines after the first match are never inspected.
pub fn scan_version(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| VERSION_TAG.captures(line))
        .map(|caps| caps[1].to_string())
}
