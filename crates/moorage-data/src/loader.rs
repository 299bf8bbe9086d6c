//! Config discovery and deserialization.
//!
//! A config is addressed by a base name and lives in a directory as
//! `<name>.ron`, `<name>.toml` or `<name>.json`. At most one of the three may
//! exist. When none does, [`load_or_default`] falls back to the type's
//! `Default` and says so in the log.

use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a config.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file extension does not name a supported format.
    #[error("{file}: not a .ron, .toml or .json file")]
    UnsupportedFormat { file: PathBuf },

    /// The same config exists in more than one format.
    #[error("config `{name}` is ambiguous: both {first} and {second} exist")]
    Ambiguous {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The file was read but does not match the schema.
    #[error("invalid {format} in {file}: {detail}")]
    Parse {
        file: PathBuf,
        format: Format,
        detail: String,
    },

    /// The file could not be read.
    #[error("cannot read {file}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ===========================================================================
// Formats
// ===========================================================================

/// Supported config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    /// Order in which [`locate`] probes for a config file.
    pub const PROBE_ORDER: [Format; 3] = [Format::Ron, Format::Toml, Format::Json];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Ron => "ron",
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }

    /// The format named by `path`'s extension.
    pub fn from_path(path: &Path) -> Result<Format, DataLoadError> {
        let ext = path.extension().and_then(|e| e.to_str());
        Format::PROBE_ORDER
            .into_iter()
            .find(|format| Some(format.extension()) == ext)
            .ok_or_else(|| DataLoadError::UnsupportedFormat {
                file: path.to_path_buf(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Ron => "RON",
            Format::Toml => "TOML",
            Format::Json => "JSON",
        };
        f.write_str(name)
    }
}

// ===========================================================================
// Lookup
// ===========================================================================

/// Find the file for config `name` in `dir`.
///
/// Returns `Ok(None)` when no format exists and `Err(Ambiguous)` when more
/// than one does.
pub fn locate(dir: &Path, name: &str) -> Result<Option<(PathBuf, Format)>, DataLoadError> {
    let mut found: Option<(PathBuf, Format)> = None;
    for format in Format::PROBE_ORDER {
        let candidate = dir.join(format!("{name}.{}", format.extension()));
        if !candidate.is_file() {
            continue;
        }
        if let Some((first, _)) = found {
            return Err(DataLoadError::Ambiguous {
                name: name.to_string(),
                first,
                second: candidate,
            });
        }
        found = Some((candidate, format));
    }
    Ok(found)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read and deserialize `path`, picking the format from its extension.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        file: path.to_path_buf(),
        source,
    })?;
    deserialize_str(format, &content, path)
}

/// Deserialize already-read content. `origin` only appears in errors.
pub fn deserialize_str<T: DeserializeOwned>(
    format: Format,
    content: &str,
    origin: &Path,
) -> Result<T, DataLoadError> {
    let detail = match format {
        Format::Ron => ron::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    detail.map_err(|detail| DataLoadError::Parse {
        file: origin.to_path_buf(),
        format,
        detail,
    })
}

/// Load config `name` from `dir`, or `T::default()` when no file exists.
///
/// A file that exists but fails to parse is an error, never a fallback.
pub fn load_or_default<T>(dir: &Path, name: &str) -> Result<T, DataLoadError>
where
    T: DeserializeOwned + Default,
{
    match locate(dir, name)? {
        Some((path, format)) => {
            let value = read_file(&path)?;
            tracing::debug!(path = %path.display(), %format, "loaded config `{name}`");
            Ok(value)
        }
        None => {
            tracing::warn!(dir = %dir.display(), "no config `{name}` found, using defaults");
            Ok(T::default())
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
