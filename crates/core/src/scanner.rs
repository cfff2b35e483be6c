use chrono::Local;
use filegate_models::{Photo, ScanResult};
use filegate_utils::{is_hidden, is_reviewable_image};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::MetadataExtractor;

/// Lists the images directly inside a directory and reads their metadata.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    match_any_case: bool,
}

impl Scanner {
    #[must_use]
    pub const fn new(match_any_case: bool) -> Self {
        Self { match_any_case }
    }

    /// Direct children of `path` that are visible regular files with a
    /// reviewable extension, sorted by filename.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory itself cannot be read.
    pub fn list_images(&self, path: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| !is_hidden(p))
            .filter(|p| p.is_file())
            .filter(|p| is_reviewable_image(p, self.match_any_case))
            .collect();

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    /// Builds the review batch for `path`. Ids follow the sorted listing,
    /// starting at 0. A directory that cannot be listed yields an empty batch.
    pub async fn scan_directory(&self, path: &Path) -> Vec<Photo> {
        info!("Scanner: Starting scan of {:?}", path);

        let paths = match self.list_images(path) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Scanner: Failed to list {:?}: {}", path, e);
                return Vec::new();
            }
        };

        info!("Scanner: Found {} images in {:?}", paths.len(), path);

        let mut photos = Vec::with_capacity(paths.len());
        for (id, file_path) in paths.into_iter().enumerate() {
            let filename = file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let mut photo = Photo::new(id, filename, file_path.clone());
            MetadataExtractor::extract_async(file_path).await.apply_to(&mut photo);
            tracing::trace!("Scanner: {} -> {}", photo.filename, photo.dimensions_label());
            photos.push(photo);
        }

        photos
    }

    /// [`Self::scan_directory`] plus timing information for the status bar.
    pub async fn scan_with_result(&self, path: &Path) -> (Vec<Photo>, ScanResult) {
        let start = Instant::now();
        let photos = self.scan_directory(path).await;

        let result = ScanResult {
            photos_found: photos.len(),
            duration: start.elapsed(),
            timestamp: Local::now(),
        };
        info!(
            "Scanner: Scan of {:?} finished with {} photos in {:?}",
            path, result.photos_found, result.duration
        );

        (photos, result)
    }
}
