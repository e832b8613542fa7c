//! Ring selection and whole-geometry encoding.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CodecError;
use crate::polyline::{Ring, encode_ring};
use crate::traits::Simplify;

/// Smallest closed linear ring: three vertices plus the repeated first one.
pub const DEFAULT_MIN_POINTS: usize = 4;

/// An ordered collection of rings.
///
/// Rings are disjoint outer boundaries (islands of one region); holes are
/// not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry {
    rings: Vec<Ring>,
}

impl Geometry {
    /// Creates a geometry from rings in their stored order.
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Returns a reference to the rings.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Consumes the geometry and returns the owned rings.
    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if the geometry has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Exchanges the axes of every point in every ring.
    pub fn swap_axes(&self) -> Self {
        Self {
            rings: self.rings.iter().map(Ring::swap_axes).collect(),
        }
    }
}

impl From<Ring> for Geometry {
    fn from(ring: Ring) -> Self {
        Self::new(vec![ring])
    }
}

impl From<Vec<Ring>> for Geometry {
    fn from(rings: Vec<Ring>) -> Self {
        Self::new(rings)
    }
}

/// A simplifier together with the tolerance to run it at.
#[derive(Clone, Copy)]
pub struct Simplification<'a> {
    pub simplifier: &'a dyn Simplify,
    pub tolerance: f64,
}

impl fmt::Debug for Simplification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simplification")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl<'a> Simplification<'a> {
    /// Creates a simplification running `simplifier` at `tolerance`.
    pub fn new(simplifier: &'a dyn Simplify, tolerance: f64) -> Self {
        Self {
            simplifier,
            tolerance,
        }
    }
}

/// Returns the rings with at least `min_points` points, in their original
/// order. When `simplification` is given each ring is simplified first and
/// the threshold applies to the simplified ring.
pub fn select_rings(
    geometry: &Geometry,
    min_points: usize,
    simplification: Option<Simplification<'_>>,
) -> Vec<Ring> {
    let mut selected = Vec::with_capacity(geometry.len());
    for (index, ring) in geometry.rings().iter().enumerate() {
        let ring = match simplification {
            Some(s) => s.simplifier.simplify(ring, s.tolerance),
            None => ring.clone(),
        };
        if ring.len() >= min_points {
            selected.push(ring);
        } else {
            debug!(index, points = ring.len(), min_points, "dropping ring below threshold");
        }
    }
    trace!(kept = selected.len(), total = geometry.len(), "selected rings");
    selected
}

/// Encode every ring with at least `min_points` points.
///
/// A single-ring geometry still produces a one-element list.
pub fn encode_geometry(geometry: &Geometry, min_points: usize) -> Result<Vec<String>, CodecError> {
    encode_geometry_with(geometry, min_points, None)
}

/// Like [`encode_geometry`], simplifying each ring before selection.
pub fn encode_geometry_with(
    geometry: &Geometry,
    min_points: usize,
    simplification: Option<Simplification<'_>>,
) -> Result<Vec<String>, CodecError> {
    select_rings(geometry, min_points, simplification)
        .iter()
        .map(encode_ring)
        .collect()
}

/// Like [`encode_geometry_with`], encoding the selected rings in parallel.
///
/// Output order matches the sequential version.
pub fn encode_geometry_par(
    geometry: &Geometry,
    min_points: usize,
    simplification: Option<Simplification<'_>>,
) -> Result<Vec<String>, CodecError> {
    select_rings(geometry, min_points, simplification)
        .par_iter()
        .map(encode_ring)
        .collect()
}
