//! Site content loading.
//!
//! The binary ships with built-in content; `~/.folio/content.toml` overrides
//! it wholesale when present. A missing file is the normal case, a malformed
//! one is an error the caller should surface rather than silently masking
//! with defaults.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use folio_types::SiteContent;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub struct SiteConfig;

impl SiteConfig {
    /// Location of the content override, if a home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("content.toml"))
    }

    /// Load site content: the override file when present, built-in defaults
    /// otherwise.
    pub fn load() -> Result<SiteContent, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(SiteContent::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "no content override; using built-in content");
            return Ok(SiteContent::default());
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let content = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded content override");
        Ok(content)
    }
}
