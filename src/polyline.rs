//! Ring encoding to and from the compact polyline format.
//!
//! A ring is stored as one string: every point contributes a first-axis
//! delta then a second-axis delta, each zig-zagged and packed into
//! printable characters. The codec never reorders axes; callers that
//! hold `(lng, lat)` data and feed a client expecting `(lat, lng)` must
//! call [`Ring::swap_axes`] first.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Malformed};
use crate::packer::{Unpacker, pack};
use crate::quantize::{dequantize, quantize};
use crate::zigzag::{DeltaDecoder, DeltaEncoder, unzigzag, zigzag};

/// A vertex, in whatever axis order the caller chose.
pub type Point = (f64, f64);

/// One closed boundary as an ordered list of points.
///
/// The ring is implicitly closed. No closing point is added or removed
/// by encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Creates a new Ring from coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the ring and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Exchanges the two axes of every point, e.g. `(lng, lat)` to `(lat, lng)`.
    pub fn swap_axes(&self) -> Self {
        Self {
            points: self.points.iter().map(|&(a, b)| (b, a)).collect(),
        }
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Encode one ring.
///
/// Empty rings are rejected with [`CodecError::InvalidRing`] rather than
/// encoded as an empty string, which a client would render as nothing.
pub fn encode_ring(ring: &Ring) -> Result<String, CodecError> {
    if ring.is_empty() {
        return Err(CodecError::InvalidRing);
    }

    let mut out = String::with_capacity(ring.len() * 8);
    let mut deltas = DeltaEncoder::new();
    for &(a, b) in ring.points() {
        let (da, db) = deltas.push((quantize(a)?, quantize(b)?));
        pack(zigzag(da), &mut out);
        pack(zigzag(db), &mut out);
    }
    Ok(out)
}

/// Lazy decoder yielding one point per pair of packed values.
///
/// Created by [`decode_points`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    values: Unpacker<'a>,
    sums: DeltaDecoder,
}

impl Iterator for Decoder<'_> {
    type Item = Result<Point, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, first) = match self.values.next()? {
            Ok(item) => item,
            Err(err) => return Some(Err(err)),
        };
        let second = match self.values.next() {
            Some(Ok((_, value))) => value,
            Some(Err(err)) => return Some(Err(err)),
            None => {
                return Some(Err(CodecError::MalformedEncoding {
                    offset,
                    kind: Malformed::UnpairedValue,
                }));
            }
        };

        let point = self
            .sums
            .push((unzigzag(first), unzigzag(second)), offset)
            .map(|(a, b)| (dequantize(a), dequantize(b)));
        if point.is_err() {
            // Skip the remainder so the iterator ends here.
            self.values.by_ref().for_each(drop);
        }
        Some(point)
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

/// Start decoding `text` lazily.
pub fn decode_points(text: &str) -> Decoder<'_> {
    Decoder {
        values: Unpacker::new(text),
        sums: DeltaDecoder::new(),
    }
}

/// Decode a whole string. Any malformed input fails the entire call.
pub fn decode(text: &str) -> Result<Ring, CodecError> {
    decode_points(text).collect::<Result<Vec<_>, _>>().map(Ring::new)
}
