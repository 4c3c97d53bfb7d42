//! Synthetic EXIF images for tests.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

pub fn ascii(s: &str) -> Value {
    Value::Ascii(vec![s.as_bytes().to_vec()])
}

/// Whole-number DMS triple
pub fn dms(degrees: u32, minutes: u32, seconds: u32) -> Value {
    Value::Rational(vec![
        Rational { num: degrees, denom: 1 },
        Rational { num: minutes, denom: 1 },
        Rational { num: seconds, denom: 1 },
    ])
}

#[derive(Default)]
pub struct ExifBuilder {
    fields: Vec<Field>,
}

impl ExifBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, tag: Tag, value: Value) -> Self {
        self.fields.push(Field { tag, ifd_num: In::PRIMARY, value });
        self
    }

    pub fn gps(self, lat: (u32, u32, u32), lat_ref: &str, lng: (u32, u32, u32), lng_ref: &str) -> Self {
        self.field(Tag::GPSLatitude, dms(lat.0, lat.1, lat.2))
            .field(Tag::GPSLatitudeRef, ascii(lat_ref))
            .field(Tag::GPSLongitude, dms(lng.0, lng.1, lng.2))
            .field(Tag::GPSLongitudeRef, ascii(lng_ref))
    }

    /// Little-endian TIFF stream holding the fields
    pub fn build_tiff(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in &self.fields {
            writer.push_field(field);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, true).expect("write EXIF fixture");
        buf.into_inner()
    }

    /// Minimal JPEG: SOI, APP1 "Exif" segment, EOI
    pub fn build_jpeg(&self) -> Vec<u8> {
        let tiff = self.build_tiff();
        let len = u16::try_from(tiff.len() + 8).expect("fixture fits in one segment");
        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
        jpeg.extend_from_slice(&len.to_be_bytes());
        jpeg.extend_from_slice(b"Exif\0\0");
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    }

    pub fn build_exif(&self) -> exif::Exif {
        exif::Reader::new()
            .read_raw(self.build_tiff())
            .expect("parse EXIF fixture")
    }
}

/// JPEG that carries no metadata segment at all
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
