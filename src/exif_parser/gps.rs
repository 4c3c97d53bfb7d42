use exif::{In, Tag, Value};

/// Degrees, minutes and seconds of one GPS axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsTriple {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl GpsTriple {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self { degrees, minutes, seconds }
    }
}

/// Converts DMS to signed decimal degrees. `S` and `W` are negative.
pub fn to_decimal(dms: &GpsTriple, reference: char) -> f64 {
    let decimal = dms.degrees + dms.minutes / 60.0 + dms.seconds / 3600.0;
    match reference {
        'S' | 'W' => -decimal,
        _ => decimal,
    }
}

/// Reads one coordinate axis from the GPS IFD.
///
/// Returns `None` unless both the triple and its reference tag are present,
/// the triple holds exactly three rationals, and every rational is finite.
pub fn get_gps_coord(exif: &exif::Exif, coord_tag: Tag, ref_tag: Tag) -> Option<f64> {
    let coord = exif.get_field(coord_tag, In::PRIMARY)?;
    let reference = exif.get_field(ref_tag, In::PRIMARY)?;

    let triple = match coord.value {
        Value::Rational(ref vec) if vec.len() == 3 => {
            GpsTriple::new(vec[0].to_f64(), vec[1].to_f64(), vec[2].to_f64())
        }
        _ => return None,
    };
    if !(triple.degrees.is_finite() && triple.minutes.is_finite() && triple.seconds.is_finite()) {
        return None;
    }

    let reference = match reference.value {
        Value::Ascii(ref vec) => vec.first().and_then(|s| s.first()).map(|&b| b as char)?,
        _ => return None,
    };

    Some(to_decimal(&triple, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn converts_north_example() {
        let dms = GpsTriple::new(40.0, 26.0, 46.0);
        let value = to_decimal(&dms, 'N');
        assert!((value - 40.446111).abs() < 1e-6);
        assert!((value - (40.0 + 26.0 / 60.0 + 46.0 / 3600.0)).abs() < EPS);
    }

    #[test]
    fn south_and_west_negate() {
        let dms = GpsTriple::new(40.0, 26.0, 46.0);
        assert!((to_decimal(&dms, 'S') + 40.446111).abs() < 1e-6);

        for dms in [
            GpsTriple::new(0.0, 0.0, 0.0),
            GpsTriple::new(12.0, 30.0, 0.0),
            GpsTriple::new(179.0, 59.0, 59.99),
        ] {
            assert_eq!(to_decimal(&dms, 'S'), -to_decimal(&dms, 'N'));
            assert_eq!(to_decimal(&dms, 'W'), -to_decimal(&dms, 'E'));
            assert!(to_decimal(&dms, 'N') >= 0.0);
            assert!(to_decimal(&dms, 'E') >= 0.0);
        }
    }

    #[test]
    fn unknown_reference_keeps_sign() {
        let dms = GpsTriple::new(1.0, 30.0, 0.0);
        assert_eq!(to_decimal(&dms, '?'), 1.5);
    }
}
