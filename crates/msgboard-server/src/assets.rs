//! In-memory cache of the static front-end files.
//!
//! The page, stylesheet, and icon are read once when the server starts and
//! served from memory afterwards. A missing file is cached as an empty
//! body and logged; any other read failure aborts startup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use msgboard_core::AssetsConfig;
use tracing::{info, warn};

/// Errors that can occur while loading assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The file exists but could not be read.
    #[error("failed to read asset {path}: {source}")]
    Read {
        /// Path of the asset.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Cached asset bodies, cheap to clone into responses.
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    index: Bytes,
    style: Bytes,
    favicon: Bytes,
}

impl AssetCache {
    /// Read all configured assets from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Read`] if a file exists but cannot be read.
    pub fn load(config: &AssetsConfig) -> Result<Self, AssetError> {
        Ok(Self {
            index: read_asset(&config.index_path())?,
            style: read_asset(&config.style_path())?,
            favicon: read_asset(&config.favicon_path())?,
        })
    }

    /// Build a cache from in-memory bodies.
    pub fn from_parts(
        index: impl Into<Bytes>,
        style: impl Into<Bytes>,
        favicon: impl Into<Bytes>,
    ) -> Self {
        Self {
            index: index.into(),
            style: style.into(),
            favicon: favicon.into(),
        }
    }

    /// The index page.
    pub fn index(&self) -> Bytes {
        self.index.clone()
    }

    /// The stylesheet.
    pub fn style(&self) -> Bytes {
        self.style.clone()
    }

    /// The favicon.
    pub fn favicon(&self) -> Bytes {
        self.favicon.clone()
    }
}

fn read_asset(path: &Path) -> Result<Bytes, AssetError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            info!(path = %path.display(), bytes = bytes.len(), "asset cached");
            Ok(Bytes::from(bytes))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "asset not found, serving empty body");
            Ok(Bytes::new())
        }
        Err(source) => Err(AssetError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("msgboard-assets-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_present_files() {
        let dir = scratch_dir("present");
        std::fs::write(dir.join("index.html"), "<h1>board</h1>").unwrap();
        std::fs::write(dir.join("style1.css"), "body{}").unwrap();
        std::fs::write(dir.join("favicon.ico"), [0_u8, 0, 1, 0]).unwrap();

        let config = AssetsConfig {
            dir: dir.clone(),
            ..AssetsConfig::default()
        };
        let cache = AssetCache::load(&config).unwrap();
        assert_eq!(cache.index(), "<h1>board</h1>");
        assert_eq!(cache.style(), "body{}");
        assert_eq!(cache.favicon().as_ref(), [0_u8, 0, 1, 0]);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_files_become_empty() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join("index.html"), "hi").unwrap();

        let config = AssetsConfig {
            dir: dir.clone(),
            ..AssetsConfig::default()
        };
        let cache = AssetCache::load(&config).unwrap();
        assert_eq!(cache.index(), "hi");
        assert!(cache.style().is_empty());
        assert!(cache.favicon().is_empty());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn directory_in_place_of_file_is_an_error() {
        let dir = scratch_dir("isdir");
        std::fs::create_dir_all(dir.join("index.html")).unwrap();

        let config = AssetsConfig {
            dir: dir.clone(),
            ..AssetsConfig::default()
        };
        assert!(matches!(
            AssetCache::load(&config),
            Err(AssetError::Read { .. })
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
