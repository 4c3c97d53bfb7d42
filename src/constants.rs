// Object storage location
pub const STORAGE_BASE_URL: &str = "https://vdknvlzooopdyxshpplj.supabase.co";
pub const BUCKET_NAME: &str = "website-assets";
pub const FOLDER_NAME: &str = "about";

// Photos to process, in output order
pub const PHOTOS: &[&str] = &[
    "photo-1.jpg",
    "photo-2.heic",
    "photo-3.jpg",
    "photo-4.heic",
    "photo-5.jpg",
    "photo-6.jpg",
    "photo-7.jpg",
    "photo-8.jpg",
    "photo-9.heic",
];

// HEIC is not decoded, only reported
pub const SKIPPED_EXTENSION: &str = "heic";

pub const OUTPUT_PATH: &str = "photo_coordinates.json";

// EXIF date layout, e.g. "2023:07:04 14:30:00"
pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
// Friendly long date, e.g. "July 04, 2023"
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";
