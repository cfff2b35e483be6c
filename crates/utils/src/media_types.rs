use regex::bytes::Regex;
use std::path::Path;

/// Extensions the culler will put on the review stack.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

#[allow(clippy::expect_used)]
static IMAGE_EXTENSION: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\.(jpg|jpeg|png|bmp|tiff)$").expect("Failed to compile image extension regex"));

#[allow(clippy::expect_used)]
static IMAGE_EXTENSION_ANY_CASE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|bmp|tiff)$").expect("Failed to compile image extension regex")
});

/// Returns true when the file name ends in one of [`IMAGE_EXTENSIONS`].
///
/// The comparison is exact unless `any_case` is set, so `IMG.JPG` only
/// matches in case-insensitive mode. Names need not be valid UTF-8.
#[must_use]
pub fn is_reviewable_image(path: &Path, any_case: bool) -> bool {
    let Some(name) = path.file_name().map(std::ffi::OsStr::as_encoded_bytes) else {
        return false;
    };

    if any_case {
        IMAGE_EXTENSION_ANY_CASE.is_match(name)
    } else {
        IMAGE_EXTENSION.is_match(name)
    }
}
