//! Delta and zig-zag transforms between quantized points and unsigned values.
//!
//! Each point is stored as the difference from the point before it (the
//! first from the origin). Zig-zag folds the sign into the low bit so that
//! small negative deltas stay small.

use crate::error::{CodecError, Malformed};

/// Map a signed delta to an unsigned value: `0, -1, 1, -2, ...` become
/// `0, 1, 2, 3, ...`.
pub fn zigzag(d: i64) -> u64 {
    let shifted = d << 1;
    if d < 0 {
        (!shifted) as u64
    } else {
        shifted as u64
    }
}

/// Inverse of [`zigzag`].
pub fn unzigzag(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}

/// Running state for turning quantized points into deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaEncoder {
    prev: (i64, i64),
}

impl DeltaEncoder {
    /// Creates an encoder positioned at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delta of `point` from the previously pushed point.
    pub fn push(&mut self, point: (i64, i64)) -> (i64, i64) {
        let delta = (point.0 - self.prev.0, point.1 - self.prev.1);
        self.prev = point;
        delta
    }
}

/// Running per-axis sums for turning deltas back into quantized points.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaDecoder {
    acc: (i64, i64),
}

impl DeltaDecoder {
    /// Creates a decoder with both sums at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a delta pair and returns the reconstructed point.
    ///
    /// `offset` is only used to locate the failure if a sum overflows.
    pub fn push(&mut self, delta: (i64, i64), offset: usize) -> Result<(i64, i64), CodecError> {
        let overflow = CodecError::MalformedEncoding {
            offset,
            kind: Malformed::Overflow,
        };
        let first = self.acc.0.checked_add(delta.0).ok_or(overflow.clone())?;
        let second = self.acc.1.checked_add(delta.1).ok_or(overflow)?;
        self.acc = (first, second);
        Ok(self.acc)
    }
}
