//! Collaborator traits at the edges of the codec.
//!
//! Geometry engines and storage layers implement these for their own
//! types. The codec never simplifies or loads geometry itself.

use std::fmt::Display;
use std::hash::Hash;

use crate::polyline::Ring;
use crate::rings::Geometry;

/// Unique identifier for stored entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Tolerance-parameterized, topology-preserving point reduction.
pub trait Simplify {
    fn simplify(&self, ring: &Ring, tolerance: f64) -> Ring;
}

impl<F> Simplify for F
where
    F: Fn(&Ring, f64) -> Ring,
{
    fn simplify(&self, ring: &Ring, tolerance: f64) -> Ring {
        self(ring, tolerance)
    }
}

/// Provides the stored boundary for an entity.
///
/// Only consulted on a cache miss, so implementations may be slow.
pub trait GeometrySource {
    type Id: Id + Display;

    /// Returns `None` when nothing is stored for `id`.
    fn geometry_for(&self, id: &Self::Id) -> Option<Geometry>;
}
