//! Fixed-point conversion at five decimal digits.

use crate::error::CodecError;

/// Scale between degrees and wire integers. Part of the wire format.
pub const PRECISION: f64 = 100_000.0;

/// Largest scaled magnitude accepted. Keeps every delta and zig-zag step
/// far inside `i64`/`u64`.
const MAX_SCALED: f64 = i32::MAX as f64;

/// Convert a coordinate to its wire integer, truncating toward zero.
///
/// Truncation (not rounding) is what the published encodings were
/// produced with, so it is what clients expect.
pub fn quantize(x: f64) -> Result<i64, CodecError> {
    let scaled = x * PRECISION;
    if !scaled.is_finite() || scaled.abs() > MAX_SCALED {
        return Err(CodecError::CoordinateOutOfRange(x));
    }
    Ok(scaled as i64)
}

/// Convert a wire integer back to a coordinate.
pub fn dequantize(i: i64) -> f64 {
    i as f64 / PRECISION
}
