//! Error types for the polyline codec and geometry import.

use std::fmt;

/// Why an encoded string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The string ended while a continuation bit was still set.
    Truncated,
    /// A byte outside the `?`..=`~` alphabet.
    InvalidCharacter(char),
    /// A value wider than 64 bits, or a running sum that left the `i64` range.
    Overflow,
    /// The deltas did not pair up into whole points.
    UnpairedValue,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Truncated => write!(f, "string ends mid-value"),
            Malformed::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            Malformed::Overflow => write!(f, "value overflows 64 bits"),
            Malformed::UnpairedValue => write!(f, "odd number of coordinate values"),
        }
    }
}

/// Errors raised while encoding or decoding polylines.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The input is not a valid encoded polyline. `offset` is the byte
    /// position where the offending value started.
    MalformedEncoding { offset: usize, kind: Malformed },
    /// A ring with no points was handed to the ring encoder.
    InvalidRing,
    /// A coordinate that is not finite or too large to quantize.
    CoordinateOutOfRange(f64),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MalformedEncoding { offset, kind } => {
                write!(f, "malformed polyline at byte {}: {}", offset, kind)
            }
            CodecError::InvalidRing => write!(f, "ring must contain at least one point"),
            CodecError::CoordinateOutOfRange(value) => {
                write!(f, "coordinate {} is outside the encodable range", value)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors raised while serving cached region encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    /// The geometry source has no boundary stored for this region.
    UnknownRegion(String),
    Codec(CodecError),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::UnknownRegion(id) => write!(f, "no boundary stored for region {}", id),
            RegionError::Codec(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RegionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegionError::Codec(err) => Some(err),
            RegionError::UnknownRegion(_) => None,
        }
    }
}

impl From<CodecError> for RegionError {
    fn from(err: CodecError) -> Self {
        RegionError::Codec(err)
    }
}

/// Errors raised while reading a GeoJSON boundary document.
#[derive(Debug)]
pub enum GeoJsonError {
    Json(serde_json::Error),
    /// A feature collection with no features, or a feature without geometry.
    NoGeometry,
    /// A geometry type other than `Polygon` or `MultiPolygon`.
    UnsupportedGeometry(String),
}

impl fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoJsonError::Json(err) => write!(f, "invalid GeoJSON: {}", err),
            GeoJsonError::NoGeometry => write!(f, "document contains no geometry"),
            GeoJsonError::UnsupportedGeometry(kind) => {
                write!(f, "unsupported geometry type: {}", kind)
            }
        }
    }
}

impl std::error::Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoJsonError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(err: serde_json::Error) -> Self {
        GeoJsonError::Json(err)
    }
}
