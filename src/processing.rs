use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::exif_parser::extract;
use crate::fetcher::PhotoSource;
use crate::record::{PhotoNote, PhotoRecord};
use crate::settings::Settings;

/// One sequential pass over the configured photos. Every item gets a record,
/// whatever happens to it.
pub fn process_photos(settings: &Settings, source: &dyn PhotoSource) -> Vec<PhotoRecord> {
    println!("Extracting metadata (GPS coordinates and dates) from photos...");
    println!("{}", "-".repeat(50));

    let mut results = Vec::with_capacity(settings.photos.len());
    for photo in &settings.photos {
        println!("\nProcessing {}...", photo);
        results.push(process_photo(settings, source, photo));
    }

    info!("Processed {} photos", results.len());
    results
}

fn process_photo(settings: &Settings, source: &dyn PhotoSource, photo: &str) -> PhotoRecord {
    if settings.is_skipped(photo) {
        println!("  ⚠️  HEIC format - may need conversion or manual extraction");
        return PhotoRecord::without_metadata(photo, PhotoNote::UnsupportedFormat);
    }

    let image_data = match source.fetch(photo) {
        Some(data) => data,
        None => {
            println!("  ✗ Could not fetch photo from storage");
            return PhotoRecord::without_metadata(photo, PhotoNote::FetchFailed);
        }
    };

    let metadata = extract(&image_data);

    match metadata.coordinates {
        Some(c) => println!("  ✓ Found coordinates: {:.6}, {:.6}", c.lat, c.lng),
        None => println!("  ✗ No GPS data found in EXIF"),
    }
    match metadata.date {
        Some(ref date) => println!("  ✓ Found date: {}", date),
        None => println!("  ✗ No date found in EXIF"),
    }

    let note = if metadata.is_empty() {
        PhotoNote::NoMetadata
    } else {
        PhotoNote::Extracted
    };

    PhotoRecord {
        filename: photo.to_string(),
        coordinates: metadata.coordinates,
        date: metadata.date,
        note,
    }
}

/// Human-readable results block, ready to paste into page config
pub fn render_summary(results: &[PhotoRecord]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(50);
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "RESULTS - Update your page config with this metadata:");
    let _ = writeln!(out, "{}", rule);

    for result in results {
        let _ = writeln!(out, "\n{}:", result.filename);
        match result.coordinates {
            Some(c) => {
                let _ = writeln!(out, "  coordinates: {{ lat: {}, lng: {} }}", c.lat, c.lng);
            }
            None => {
                let _ = writeln!(out, "  coordinates: None");
            }
        }
        match result.date {
            Some(ref date) => {
                let _ = writeln!(out, "  date: \"{}\"", date);
            }
            None => {
                let _ = writeln!(out, "  date: None");
            }
        }
        let _ = writeln!(out, "  note: {}", result.note);
    }
    out
}

pub fn print_summary(results: &[PhotoRecord]) {
    print!("{}", render_summary(results));
}

pub fn to_json(results: &[PhotoRecord]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results")
}

/// Writes the results as a JSON array, replacing any previous file
pub fn write_results(path: &Path, results: &[PhotoRecord]) -> Result<()> {
    let json = to_json(results)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("\n✓ Results saved to {}", path.display());
    Ok(())
}
