use super::Vec3;

/// Radius of the unit globe all placement is projected onto.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Maps latitude/longitude in degrees onto a sphere of the given radius.
///
/// Inclination is measured from the north pole and azimuth from the
/// antimeridian, so the Y axis runs through the poles and (0, 0) lands
/// on the negative X axis.
pub fn spherical_to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Surface position on the unit globe.
pub fn surface_position(lat_deg: f64, lon_deg: f64) -> Vec3 {
    spherical_to_cartesian(lat_deg, lon_deg, GLOBE_RADIUS)
}
