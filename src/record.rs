use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Outcome of processing one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoNote {
    Extracted,
    NoMetadata,
    FetchFailed,
    UnsupportedFormat,
}

impl PhotoNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoNote::Extracted => "Extracted from EXIF",
            PhotoNote::NoMetadata => "No metadata found",
            PhotoNote::FetchFailed => "Failed to fetch from Supabase",
            PhotoNote::UnsupportedFormat => "HEIC format requires special handling",
        }
    }
}

impl fmt::Display for PhotoNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PhotoNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// One entry of the output document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoRecord {
    pub filename: String,
    pub coordinates: Option<Coordinates>,
    pub date: Option<String>,
    pub note: PhotoNote,
}

impl PhotoRecord {
    /// Record with no metadata, for items that were never extracted
    pub fn without_metadata(filename: &str, note: PhotoNote) -> Self {
        Self {
            filename: filename.to_string(),
            coordinates: None,
            date: None,
            note,
        }
    }
}
