//! Reading boundary geometry out of GeoJSON documents.
//!
//! Boundary exports usually arrive as a feature collection holding a
//! single `Polygon` or `MultiPolygon`. Coordinates keep GeoJSON's
//! `[lng, lat]` order.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GeoJsonError;
use crate::polyline::Ring;
use crate::rings::Geometry;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Shape {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

/// Parse a GeoJSON document into a flat, ordered list of rings.
///
/// Feature collections contribute their first feature only.
pub fn geometry_from_geojson(text: &str) -> Result<Geometry, GeoJsonError> {
    let document: Value = serde_json::from_str(text)?;
    let kind = document.get("type").and_then(Value::as_str).map(str::to_owned);
    let geometry = match kind.as_deref() {
        Some("FeatureCollection") => FeatureCollection::deserialize(document)?
            .features
            .into_iter()
            .next()
            .and_then(|feature| feature.geometry)
            .ok_or(GeoJsonError::NoGeometry)?,
        Some("Feature") => Feature::deserialize(document)?
            .geometry
            .ok_or(GeoJsonError::NoGeometry)?,
        _ => document,
    };
    shape_to_geometry(geometry)
}

fn shape_to_geometry(value: Value) -> Result<Geometry, GeoJsonError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if kind != "Polygon" && kind != "MultiPolygon" {
        return Err(GeoJsonError::UnsupportedGeometry(kind));
    }

    let rings = match Shape::deserialize(value)? {
        Shape::Polygon(rings) => rings,
        Shape::MultiPolygon(polygons) => polygons.into_iter().flatten().collect(),
    };
    Ok(Geometry::new(rings))
}
