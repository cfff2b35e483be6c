use filegate_models::{Decision, Photo};
use filegate_utils::destination_path;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::OpenOptions;
use tracing::info;

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Applies a decision to the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCommitter;

impl FileCommitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Keep copies the photo to `output_dir/<filename>` and returns the new
    /// path. Discard writes nothing and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::DestinationExists`] if a file with the same name
    /// is already in `output_dir` (it is never overwritten), or
    /// [`CommitError::Copy`] for any other I/O failure.
    pub async fn commit(
        &self,
        photo: &Photo,
        decision: Decision,
        output_dir: &Path,
    ) -> Result<Option<PathBuf>, CommitError> {
        match decision {
            Decision::Discard => Ok(None),
            Decision::Keep => {
                let name = photo.path.file_name().unwrap_or_else(|| OsStr::new(&*photo.filename));
                let dest = destination_path(output_dir, name);
                copy_new(&photo.path, &dest).await?;
                info!("Kept {} -> {}", photo.path.display(), dest.display());
                Ok(Some(dest))
            }
        }
    }
}

async fn copy_new(from: &Path, to: &Path) -> Result<(), CommitError> {
    let copy_error = |source| CommitError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut source = tokio::fs::File::open(from).await.map_err(copy_error)?;
    let mut dest = match OpenOptions::new().write(true).create_new(true).open(to).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(CommitError::DestinationExists(to.to_path_buf()));
        }
        Err(e) => return Err(copy_error(e)),
    };

    if let Err(e) = tokio::io::copy(&mut source, &mut dest).await {
        drop(dest);
        // The partial file would block a later keep of the same name.
        let _ = tokio::fs::remove_file(to).await;
        return Err(copy_error(e));
    }

    Ok(())
}
