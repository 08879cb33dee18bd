use bevy::math::DVec3;

/// Anchor-relative displacement in metres.
pub type Offset = DVec3;

/// Squared Euclidean distance between two world positions.
///
/// Proximity checks compare against a squared radius so no square root
/// is taken on the hot path.
pub fn distance_squared(a: DVec3, b: DVec3) -> f64 {
    let d = a - b;
    d.x * d.x + d.y * d.y + d.z * d.z
}

/// Point reached by travelling `distance` metres from `origin` along `direction`.
///
/// `direction` is expected to be a unit vector; it is not renormalised.
pub fn offset_along(origin: DVec3, direction: DVec3, distance: f64) -> DVec3 {
    origin + direction * distance
}
