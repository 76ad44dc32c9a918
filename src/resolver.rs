//! Locates the newest versioned artifact in a directory.
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{error::LauncherError, version::Version};

/// File name pattern `<prefix><version><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPattern {
    /// Literal the file name must start with.
    pub prefix: String,
    /// Literal the file name must end with.
    pub suffix: String,
}

impl ArtifactPattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns the version segment of `file_name`, or `None` if it does not match.
    pub fn version_segment<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }
}

impl std::fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// A matching file together with the version parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCandidate {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Bare file name.
    pub file_name: String,
    /// Version embedded in the file name.
    pub version: Version,
}

/// Scans `dir` and returns the candidate with the highest version.
///
/// Files are visited in file-name order; when several share the highest
/// version the last one visited wins.
///
/// # Errors
/// * [`LauncherError::Filesystem`] if `dir` cannot be read.
/// * [`LauncherError::VersionParse`] if a matching name has a malformed version.
/// * [`LauncherError::NoArtifactFound`] if nothing matches.
pub fn resolve(
    dir: &Path,
    pattern: &ArtifactPattern,
) -> Result<ArtifactCandidate, LauncherError> {
    let fs_error = |source| LauncherError::Filesystem {
        path: dir.to_path_buf(),
        source,
    };

    let dir_abs = fs::canonicalize(dir).map_err(fs_error)?;
    let mut names = Vec::new();
    for entry in fs::read_dir(&dir_abs).map_err(fs_error)? {
        let entry = entry.map_err(fs_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Names that are not valid UTF-8 cannot match a textual pattern.
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut best: Option<ArtifactCandidate> = None;
    for file_name in names {
        let Some(segment) = pattern.version_segment(&file_name) else {
            continue;
        };

        let version: Version =
            segment.parse().map_err(|reason| LauncherError::VersionParse {
                file: file_name.clone(),
                version: segment.to_string(),
                reason,
            })?;
        debug!("Found candidate {file_name} (version {version})");

        let replaces = best
            .as_ref()
            .is_none_or(|current| version >= current.version);
        if replaces {
            best = Some(ArtifactCandidate {
                path: dir_abs.join(&file_name),
                file_name,
                version,
            });
        }
    }

    let selected = best.ok_or_else(|| LauncherError::NoArtifactFound {
        dir: dir_abs.clone(),
        pattern: pattern.to_string(),
    })?;

    info!("Using artifact: {}", selected.path.display());
    Ok(selected)
}
