use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Color model reported by the image container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum ColorMode {
    Rgb,
    Gray,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Gray => write!(f, "Gray"),
        }
    }
}

/// A single image awaiting a keep/discard decision.
///
/// Everything except the optional metadata is fixed when the directory is
/// scanned; the metadata fields are filled in once, at scan time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: usize,
    pub filename: Arc<str>,
    pub path: PathBuf,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color_mode: Option<ColorMode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Photo {
    #[must_use]
    pub fn new(id: usize, filename: impl Into<Arc<str>>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            filename: filename.into(),
            path: path.into(),
            width: None,
            height: None,
            color_mode: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Caption line shown under the card: `"{w}x{h}, {color}"`.
    ///
    /// Missing dimensions render as `0` and a missing color model as an empty string.
    #[must_use]
    pub fn dimensions_label(&self) -> String {
        let color = self.color_mode.map(|c| c.to_string()).unwrap_or_default();
        format!("{}x{}, {}", self.width.unwrap_or(0), self.height.unwrap_or(0), color)
    }

    /// Both GPS coordinates, or `None` if either one is missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
