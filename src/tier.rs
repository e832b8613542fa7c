//! Resolution tiers: how aggressively to simplify and which rings to keep.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::rings::{DEFAULT_MIN_POINTS, Geometry, Simplification, encode_geometry_with};
use crate::traits::Simplify;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tier {
    /// Tolerance handed to the simplifier, in coordinate units.
    pub tolerance: f64,
    /// Rings with fewer points after simplification are dropped.
    pub min_points: usize,
}

impl Tier {
    /// Coarse outline for thumbnails and lists; small islands are dropped.
    pub const STRIP: Tier = Tier {
        tolerance: 0.01,
        min_points: 15,
    };

    /// Detailed outline for the interactive map.
    pub const MAP: Tier = Tier {
        tolerance: 0.005,
        min_points: DEFAULT_MIN_POINTS,
    };

    /// Pairs `simplifier` with this tier's tolerance.
    pub fn simplification<'a>(&self, simplifier: &'a dyn Simplify) -> Simplification<'a> {
        Simplification::new(simplifier, self.tolerance)
    }

    /// Simplifies, filters and encodes `geometry` at this tier.
    pub fn encode(
        &self,
        geometry: &Geometry,
        simplifier: &dyn Simplify,
    ) -> Result<Vec<String>, CodecError> {
        encode_geometry_with(geometry, self.min_points, Some(self.simplification(simplifier)))
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::MAP
    }
}
