use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Dotfiles count as hidden, matching what Finder and `ls` hide.
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().first() == Some(&b'.'))
}

/// Where a kept file lands: same filename, directly inside `output_dir`.
#[must_use]
pub fn destination_path(output_dir: &Path, filename: &OsStr) -> PathBuf {
    output_dir.join(filename)
}
