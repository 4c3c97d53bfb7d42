use super::generic::{format_exif_date, get_datetime_from_exif};
use super::gps::get_gps_coord;
use crate::record::Coordinates;
use exif::Tag;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, warn};

/// Why an image yielded no tag set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("image has no EXIF block")]
    MissingMetadata,
    #[error("failed to decode EXIF: {0}")]
    Decode(String),
}

/// GPS position and capture date found in one image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoMetadata {
    pub coordinates: Option<Coordinates>,
    pub date: Option<String>,
}

impl PhotoMetadata {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_none() && self.date.is_none()
    }

    fn from_exif(exif: &exif::Exif) -> Self {
        let lat = get_gps_coord(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef);
        let lng = get_gps_coord(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef);
        let coordinates = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };
        let date = get_datetime_from_exif(exif).map(|raw| format_exif_date(&raw));

        Self { coordinates, date }
    }
}

/// Decodes the image container and reads GPS and date tags.
pub fn try_extract(image_data: &[u8]) -> Result<PhotoMetadata, ExtractError> {
    let mut reader = Cursor::new(image_data);
    let mut exif_reader = exif::Reader::new();
    exif_reader.continue_on_error(true); // Tolerate non-standard EXIF structures

    match exif_reader.read_from_container(&mut reader) {
        Ok(exif) => Ok(PhotoMetadata::from_exif(&exif)),
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            debug!("EXIF decoded with {} recoverable errors", errors.len());
            Ok(PhotoMetadata::from_exif(&exif))
        }
        Err(exif::Error::NotFound(_)) => Err(ExtractError::MissingMetadata),
        Err(e) => Err(ExtractError::Decode(e.to_string())),
    }
}

/// Like [`try_extract`], but every failure becomes an empty result.
pub fn extract(image_data: &[u8]) -> PhotoMetadata {
    match try_extract(image_data) {
        Ok(metadata) => metadata,
        Err(ExtractError::MissingMetadata) => {
            debug!("no EXIF block in image");
            PhotoMetadata::default()
        }
        Err(e) => {
            warn!("Error extracting metadata: {}", e);
            PhotoMetadata::default()
        }
    }
}
