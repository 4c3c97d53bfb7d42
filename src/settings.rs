use crate::constants::{BUCKET_NAME, FOLDER_NAME, OUTPUT_PATH, PHOTOS, SKIPPED_EXTENSION, STORAGE_BASE_URL};
use std::path::{Path, PathBuf};

/// Where photos come from and where results go.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub bucket: String,
    pub folder: String,
    pub photos: Vec<String>,
    pub output_path: PathBuf,
    /// Extension (lowercase, without dot) that is reported but never fetched
    pub skipped_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: STORAGE_BASE_URL.to_string(),
            bucket: BUCKET_NAME.to_string(),
            folder: FOLDER_NAME.to_string(),
            photos: PHOTOS.iter().map(|p| p.to_string()).collect(),
            output_path: PathBuf::from(OUTPUT_PATH),
            skipped_extension: SKIPPED_EXTENSION.to_string(),
        }
    }
}

impl Settings {
    /// Public object URL for a photo in the configured bucket folder
    pub fn object_url(&self, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            self.folder,
            filename
        )
    }

    pub fn is_skipped(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.skipped_extension))
            .unwrap_or(false)
    }
}
