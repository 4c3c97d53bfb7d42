use crate::constants::{DISPLAY_DATE_FORMAT, EXIF_DATE_FORMAT};
use chrono::NaiveDateTime;
use exif::{In, Tag, Value};

// Original capture wins over the modification time; digitized is the last resort.
const DATE_TAGS: [Tag; 3] = [Tag::DateTimeOriginal, Tag::DateTime, Tag::DateTimeDigitized];

/// Raw EXIF date string of the primary image, by tag precedence
pub fn get_datetime_from_exif(exif: &exif::Exif) -> Option<String> {
    for &tag in &DATE_TAGS {
        if let Some(field) = exif.get_field(tag, In::PRIMARY) {
            if let Value::Ascii(ref vec) = field.value {
                // A blank tag does not count as a date
                if let Some(datetime) = vec.first().filter(|s| !s.is_empty()) {
                    return Some(String::from_utf8_lossy(datetime).into_owned());
                }
            }
        }
    }
    None
}

/// "2023:07:04 14:30:00" becomes "July 04, 2023". Unparseable input is returned as is.
pub fn format_exif_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, EXIF_DATE_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
