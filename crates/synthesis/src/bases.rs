/// Baseline values for a latitude band. The ad-hoc CO₂ badge heuristic
/// and the per-category status lines draw jitter around these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionBases {
    pub co2_ppm: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub ozone_du: f64,
    pub uv_index: f64,
    pub radiation_uw_cm2: f64,
}

/// Latitude-band lookup. Bands are checked top to bottom; the strict
/// inequalities mean only the equator itself reaches the tropical row.
pub fn region_bases(lat_deg: f64) -> RegionBases {
    if lat_deg > 60.0 {
        // Arctic
        RegionBases {
            co2_ppm: 400.0,
            temperature_c: -20.0,
            humidity_pct: 60.0,
            pressure_hpa: 1013.0,
            ozone_du: 250.0,
            uv_index: 2.0,
            radiation_uw_cm2: 0.1,
        }
    } else if lat_deg < -60.0 {
        // Antarctic
        RegionBases {
            co2_ppm: 380.0,
            temperature_c: -30.0,
            humidity_pct: 40.0,
            pressure_hpa: 1000.0,
            ozone_du: 200.0,
            uv_index: 1.0,
            radiation_uw_cm2: 0.05,
        }
    } else if lat_deg > 0.0 && lat_deg < 30.0 {
        // Northern tropics
        RegionBases {
            co2_ppm: 420.0,
            temperature_c: 15.0,
            humidity_pct: 70.0,
            pressure_hpa: 1013.0,
            ozone_du: 300.0,
            uv_index: 5.0,
            radiation_uw_cm2: 0.3,
        }
    } else if lat_deg < 0.0 && lat_deg > -30.0 {
        // Southern tropics
        RegionBases {
            co2_ppm: 410.0,
            temperature_c: 20.0,
            humidity_pct: 75.0,
            pressure_hpa: 1015.0,
            ozone_du: 320.0,
            uv_index: 6.0,
            radiation_uw_cm2: 0.4,
        }
    } else if lat_deg.abs() < 30.0 {
        // Equator line
        RegionBases {
            co2_ppm: 400.0,
            temperature_c: 25.0,
            humidity_pct: 80.0,
            pressure_hpa: 1010.0,
            ozone_du: 280.0,
            uv_index: 8.0,
            radiation_uw_cm2: 0.5,
        }
    } else {
        // Temperate latitudes
        RegionBases {
            co2_ppm: 415.0,
            temperature_c: 10.0,
            humidity_pct: 65.0,
            pressure_hpa: 1012.0,
            ozone_du: 290.0,
            uv_index: 4.0,
            radiation_uw_cm2: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::region_bases;

    #[test]
    fn polar_bands() {
        assert_eq!(region_bases(78.2).co2_ppm, 400.0);
        assert_eq!(region_bases(78.2).temperature_c, -20.0);
        assert_eq!(region_bases(-75.0).co2_ppm, 380.0);
        assert_eq!(region_bases(-75.0).pressure_hpa, 1000.0);
    }

    #[test]
    fn tropical_bands_are_hemisphere_specific() {
        assert_eq!(region_bases(19.5).co2_ppm, 420.0);
        assert_eq!(region_bases(-25.3).co2_ppm, 410.0);
    }

    #[test]
    fn exact_equator_gets_its_own_row() {
        let eq = region_bases(0.0);
        assert_eq!(eq.temperature_c, 25.0);
        assert_eq!(eq.uv_index, 8.0);
    }

    #[test]
    fn mid_latitudes_fall_through_to_temperate() {
        assert_eq!(region_bases(51.6).co2_ppm, 415.0);
        assert_eq!(region_bases(-33.4).co2_ppm, 415.0);
    }
}
