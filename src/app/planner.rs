//! Query-Planner: Query-Kreis im Karten-KBS bauen und pro Layer projizieren.
//!
//! Transformiert wird immer nur die eine Query-Geometrie, nie die Features.

use glam::DVec2;

use crate::core::{CrsId, HoverError, QueryGeometry, QueryRing};
use crate::host::CrsTransformer;

/// Baut den Query-Kreis um `position` mit Radius `ground_radius`.
pub fn plan(position: DVec2, ground_radius: f64, segments: usize) -> QueryGeometry {
    QueryGeometry::circle(position, ground_radius, segments)
}

/// Projiziert den Query-Ring ins native KBS eines Layers.
pub fn project(
    query: &QueryGeometry,
    map_crs: &CrsId,
    layer_crs: &CrsId,
    transformer: &dyn CrsTransformer,
) -> Result<QueryRing, HoverError> {
    if map_crs == layer_crs {
        return Ok(query.ring.clone());
    }

    let points = transformer.transform(query.ring.points(), map_crs, layer_crs)?;
    if points.iter().any(|p| !p.is_finite()) {
        return Err(HoverError::CrsTransform {
            from: map_crs.clone(),
            to: layer_crs.clone(),
            reason: "Transformation liefert ungültige Koordinaten".to_string(),
        });
    }

    Ok(QueryRing::from_points(points))
}
