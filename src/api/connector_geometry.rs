use super::scene::LineGeometry;

/// Y coordinate where a stem leaving the target line meets its marker.
///
/// The stem stops at the marker edge facing the target line. When the marker
/// already covers the target line the stem collapses onto `target_y`.
#[must_use]
pub fn connector_end_y(target_y: f64, point_y: f64, radius: f64) -> f64 {
    if (target_y - point_y).abs() <= radius {
        target_y
    } else if target_y > point_y {
        point_y + radius
    } else {
        point_y - radius
    }
}

/// Vertical stem from the target line towards a marker centred at `(x, point_y)`.
#[must_use]
pub fn connector_geometry(x: f64, target_y: f64, point_y: f64, radius: f64) -> LineGeometry {
    LineGeometry::new(x, target_y, x, connector_end_y(target_y, point_y, radius))
}
