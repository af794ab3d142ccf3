use foundation::math::{Vec3, surface_position};

use crate::registry::RegistryError;

/// Kind of annotated location. Picking radius and enrichment behavior
/// vary by category.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Station,
    Monitoring,
    Observatory,
    Satellite,
    TempoPollutant,
    Fire,
}

/// A named location on the globe.
///
/// The 3D position is derived from (lat, lon) at construction and never
/// changes independently of them, so every consumer sees the same
/// projection.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    name: String,
    lat_deg: f64,
    lon_deg: f64,
    category: Category,
    caption: Option<String>,
    position: Vec3,
}

impl GeoPoint {
    pub fn new(
        name: impl Into<String>,
        lat_deg: f64,
        lon_deg: f64,
        category: Category,
    ) -> Result<Self, RegistryError> {
        if !(-90.0..=90.0).contains(&lat_deg) || !(-180.0..=180.0).contains(&lon_deg) {
            return Err(RegistryError::InvalidCoordinates { lat_deg, lon_deg });
        }

        Ok(Self {
            name: name.into(),
            lat_deg,
            lon_deg,
            category,
            caption: None,
            position: surface_position(lat_deg, lon_deg),
        })
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, GeoPoint};
    use crate::registry::RegistryError;
    use foundation::math::surface_position;

    #[test]
    fn position_follows_the_shared_projection() {
        let p = GeoPoint::new("ISS", 51.6, -0.1, Category::Station).unwrap();
        assert_eq!(p.position(), surface_position(51.6, -0.1));
        assert!((p.position().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let err = GeoPoint::new("bad", -93.4489, -70.6693, Category::Station).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCoordinates { .. }));

        assert!(GeoPoint::new("bad", 10.0, 200.0, Category::Fire).is_err());
        assert!(GeoPoint::new("edge", 90.0, -180.0, Category::Fire).is_ok());
    }

    #[test]
    fn caption_is_optional() {
        let p = GeoPoint::new("Aura Satellite (NASA)", 0.0, 0.0, Category::Satellite)
            .unwrap()
            .with_caption("Global atmospheric monitoring");
        assert_eq!(p.caption(), Some("Global atmospheric monitoring"));
        assert_eq!(
            GeoPoint::new("x", 0.0, 0.0, Category::Fire).unwrap().caption(),
            None
        );
    }
}
