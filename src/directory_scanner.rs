// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding bundled photos on disk.
//!
//! This module scans one fixed folder (non-recursively) for files with a
//! supported image extension and exposes them through the
//! [`AssetDiscovery`] port.

use crate::application::port::{AssetDiscovery, DiscoveredAsset};
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem discovery adapter: lists `<root>/<directory>/*.{jpg,jpeg,png,webp,gif}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsDiscovery {
    root: PathBuf,
    directory: String,
}

impl FsDiscovery {
    /// Creates a scanner for `directory` (relative, `/`-separated, e.g.
    /// `public/photos`) under the project `root`.
    pub fn new(root: impl Into<PathBuf>, directory: impl Into<String>) -> Self {
        let directory = directory.into();
        let directory = directory.trim_matches('/').to_string();
        Self {
            root: root.into(),
            directory,
        }
    }

    /// Returns the absolute folder that gets scanned.
    pub fn folder(&self) -> PathBuf {
        self.directory
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Builds the discovery key of a file inside the scanned folder.
    fn key_for(&self, file: &Path) -> Option<String> {
        let name = file.file_name()?.to_str()?;
        Some(format!("/{}/{}", self.directory, name))
    }
}

impl AssetDiscovery for FsDiscovery {
    /// Scans the folder for supported image files.
    ///
    /// A missing folder yields an empty list; any other read failure is an error.
    fn discover(&self) -> Result<Vec<DiscoveredAsset>> {
        let folder = self.folder();
        if !folder.exists() {
            debug!(folder = %folder.display(), "Photo folder does not exist");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&folder).map_err(|e| {
            Error::Discovery(format!("Failed to read {}: {e}", folder.display()))
        })?;

        let mut assets = Vec::new();
        for entry in entries {
            let path = entry?.path();

            if path.is_file() && media::is_supported_image(&path) {
                match self.key_for(&path) {
                    Some(key) => assets.push(DiscoveredAsset::file(key, path)),
                    None => debug!(path = %path.display(), "Skipping non UTF-8 file name"),
                }
            }
        }

        debug!(folder = %folder.display(), count = assets.len(), "Scanned photo folder");
        Ok(assets)
    }

    fn location(&self) -> &str {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AssetSource;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn photo_dir(root: &Path) -> PathBuf {
        let dir = root.join("public").join("photos");
        fs::create_dir_all(&dir).expect("failed to create photo dir");
        dir
    }

    fn sorted_keys(assets: &[DiscoveredAsset]) -> Vec<String> {
        let mut keys: Vec<String> = assets.iter().map(|a| a.path.clone()).collect();
        keys.sort();
        keys
    }

    #[test]
    fn discover_finds_all_allowed_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = photo_dir(temp_dir.path());
        create_test_image(&dir, "a.jpg");
        create_test_image(&dir, "b.jpeg");
        create_test_image(&dir, "c.png");
        create_test_image(&dir, "d.webp");
        create_test_image(&dir, "e.gif");
        create_test_image(&dir, "f.tiff");
        create_test_image(&dir, "notes.txt");

        let scanner = FsDiscovery::new(temp_dir.path(), "public/photos");
        let assets = scanner.discover().expect("failed to scan directory");

        assert_eq!(
            sorted_keys(&assets),
            vec![
                "/public/photos/a.jpg",
                "/public/photos/b.jpeg",
                "/public/photos/c.png",
                "/public/photos/d.webp",
                "/public/photos/e.gif",
            ]
        );
    }

    #[test]
    fn discover_points_sources_at_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = photo_dir(temp_dir.path());
        let image = create_test_image(&dir, "only.png");

        let assets = FsDiscovery::new(temp_dir.path(), "public/photos")
            .discover()
            .expect("failed to scan directory");

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].source, AssetSource::File(image));
        assert_eq!(assets[0].file_name(), "only.png");
    }

    #[test]
    fn discover_is_not_recursive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = photo_dir(temp_dir.path());
        create_test_image(&dir, "top.jpg");
        let nested = dir.join("nested");
        fs::create_dir_all(&nested).expect("failed to create nested dir");
        create_test_image(&nested, "deep.jpg");

        let assets = FsDiscovery::new(temp_dir.path(), "public/photos")
            .discover()
            .expect("failed to scan directory");

        assert_eq!(sorted_keys(&assets), vec!["/public/photos/top.jpg"]);
    }

    #[test]
    fn discover_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        photo_dir(temp_dir.path());

        let assets = FsDiscovery::new(temp_dir.path(), "public/photos")
            .discover()
            .expect("failed to scan directory");

        assert!(assets.is_empty());
    }

    #[test]
    fn discover_treats_missing_folder_as_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let assets = FsDiscovery::new(temp_dir.path(), "public/photos")
            .discover()
            .expect("missing folder should not error");

        assert!(assets.is_empty());
    }

    #[test]
    fn discover_errors_when_folder_is_a_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("public")).expect("failed to create dir");
        create_test_image(&temp_dir.path().join("public"), "photos");

        let result = FsDiscovery::new(temp_dir.path(), "public/photos").discover();

        assert!(matches!(result, Err(Error::Discovery(_))));
    }

    #[test]
    fn location_trims_slashes() {
        let scanner = FsDiscovery::new("/srv/site", "/public/photos/");
        assert_eq!(scanner.location(), "public/photos");
        assert_eq!(
            scanner.folder(),
            PathBuf::from("/srv/site").join("public").join("photos")
        );
    }
}
