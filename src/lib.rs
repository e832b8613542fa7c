//! region-polyline
//!
//! Compact text encoding of region boundaries for map clients: fixed-point
//! quantization, delta and zig-zag transforms, and a printable character
//! packing, plus the ring-selection policy for multi-island geometries.

pub mod error;
pub mod quantize;
pub mod zigzag;
pub mod packer;
pub mod polyline;
pub mod rings;
pub mod tier;
pub mod traits;
pub mod geojson;
pub mod cache;

pub use error::{CodecError, GeoJsonError, Malformed, RegionError};
pub use polyline::{Decoder, Point, Ring, decode, decode_points, encode_ring};
pub use rings::{
    DEFAULT_MIN_POINTS, Geometry, Simplification, encode_geometry, encode_geometry_par,
    encode_geometry_with, select_rings,
};
pub use tier::Tier;
