use color_eyre::eyre::Result;
use exif::{Exif, Field, In, Tag, Value};
use filegate_models::{ColorMode, Photo};
use image::{ColorType, ImageDecoder, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Container metadata read for one image at scan time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageProperties {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color_mode: Option<ColorMode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ImageProperties {
    pub fn apply_to(self, photo: &mut Photo) {
        photo.width = self.width;
        photo.height = self.height;
        photo.color_mode = self.color_mode;
        photo.latitude = self.latitude;
        photo.longitude = self.longitude;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Reads dimensions, color model and GPS position. Never fails: anything
    /// that cannot be read is left as `None`.
    #[must_use]
    pub fn extract(path: &Path) -> ImageProperties {
        let mut properties = ImageProperties::default();

        match read_header(path) {
            Ok((width, height, color_mode)) => {
                properties.width = Some(width);
                properties.height = Some(height);
                properties.color_mode = Some(color_mode);
            }
            Err(e) => tracing::debug!("No header metadata for {}: {}", path.display(), e),
        }

        match read_exif(path) {
            Ok(exif) => {
                properties.latitude = gps_coordinate(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S');
                properties.longitude = gps_coordinate(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W');
            }
            Err(e) => tracing::trace!("No EXIF for {}: {}", path.display(), e),
        }

        properties
    }

    /// [`Self::extract`] on the blocking pool.
    pub async fn extract_async(path: PathBuf) -> ImageProperties {
        match tokio::task::spawn_blocking(move || Self::extract(&path)).await {
            Ok(properties) => properties,
            Err(e) => {
                tracing::warn!("Metadata task failed: {}", e);
                ImageProperties::default()
            }
        }
    }
}

fn read_header(path: &Path) -> Result<(u32, u32, ColorMode)> {
    let decoder = ImageReader::open(path)?.with_guessed_format()?.into_decoder()?;
    let (width, height) = decoder.dimensions();
    Ok((width, height, color_mode_of(decoder.color_type())))
}

fn color_mode_of(color: ColorType) -> ColorMode {
    match color {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => ColorMode::Gray,
        _ => ColorMode::Rgb,
    }
}

fn read_exif(path: &Path) -> Result<Exif> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    Ok(exif::Reader::new().read_from_container(&mut reader)?)
}

fn gps_coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag, negative_ref: u8) -> Option<f64> {
    let value = exif.get_field(value_tag, In::PRIMARY)?;
    coordinate_from_fields(value, exif.get_field(ref_tag, In::PRIMARY), negative_ref)
}

/// Decimal degrees from a degree/minute/second rational triple, negated when
/// the reference (`S` or `W`) says so.
fn coordinate_from_fields(value: &Field, reference: Option<&Field>, negative_ref: u8) -> Option<f64> {
    let Value::Rational(parts) = &value.value else {
        return None;
    };

    let mut degrees = 0.0;
    for (part, scale) in parts.iter().zip([1.0, 60.0, 3600.0]) {
        if part.denom == 0 {
            return None;
        }
        degrees += part.to_f64() / scale;
    }
    if parts.is_empty() {
        return None;
    }

    let negative = reference.is_some_and(|field| match &field.value {
        Value::Ascii(strings) => strings
            .first()
            .and_then(|s| s.first())
            .is_some_and(|c| c.eq_ignore_ascii_case(&negative_ref)),
        _ => false,
    });

    Some(if negative { -degrees } else { degrees })
}
