use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};

/// A downscaled RGB copy of an image for drawing with half-block cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Decodes `path` and scales it to fit `max_width` x `max_height` pixels,
    /// keeping the aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn load(path: &Path, max_width: u32, max_height: u32) -> Result<Self> {
        let image = image::open(path)?;
        let rgb = image.thumbnail(max_width.max(1), max_height.max(1)).to_rgb8();
        let pixels = rgb.pixels().map(|p| p.0).collect();

        Self::from_pixels(rgb.width(), rgb.height(), pixels)
            .ok_or_else(|| color_eyre::eyre::eyre!("Thumbnail buffer does not match its size"))
    }

    /// Wraps row-major RGB pixels. `None` unless there are exactly
    /// `width * height` of them.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        let expected = usize::try_from(u64::from(width) * u64::from(height)).ok()?;
        (pixels.len() == expected).then_some(Self { width, height, pixels })
    }

    /// [`Self::load`] on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or the blocking task panics.
    pub async fn load_async(path: PathBuf, max_width: u32, max_height: u32) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::load(&path, max_width, max_height)).await?
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()?;
        self.pixels.get(index).copied()
    }
}
