//! Test fixtures for region-polyline.
//!
//! Provides recorded island boundaries and their published encodings.


pub use island_boundaries::*;
