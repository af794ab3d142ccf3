//! Fixed point atlases registered at startup.
//!
//! Exploration points are landmark locations with informational captions;
//! monitoring stations are the seeded city network; coverage cities are
//! the satellite pass targets.

use crate::point::{Category, GeoPoint};
use crate::registry::RegistryError;

struct SeedPoint {
    name: &'static str,
    lat_deg: f64,
    lon_deg: f64,
    category: Category,
    caption: &'static str,
}

const EXPLORATION: &[SeedPoint] = &[
    SeedPoint {
        name: "International Space Station",
        lat_deg: 51.6,
        lon_deg: -0.1,
        category: Category::Station,
        caption: "Altitude: 408 km | Speed: 27,600 km/h",
    },
    SeedPoint {
        name: "Ozone Observatory - Antarctica",
        lat_deg: -75.0,
        lon_deg: 166.0,
        category: Category::Observatory,
        caption: "Ozone layer hole under monitoring",
    },
    SeedPoint {
        name: "CO₂ Monitoring Station - Mauna Loa",
        lat_deg: 19.5,
        lon_deg: -155.6,
        category: Category::Monitoring,
        caption: "CO₂ concentration: 421 ppm (2024)",
    },
    SeedPoint {
        name: "Aura Satellite (NASA)",
        lat_deg: 0.0,
        lon_deg: 0.0,
        category: Category::Satellite,
        caption: "Global atmospheric monitoring",
    },
    SeedPoint {
        name: "Monitoring Station - Arctic",
        lat_deg: 78.2,
        lon_deg: 15.6,
        category: Category::Monitoring,
        caption: "Temperature: -15°C | CO₂: 420 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Amazon",
        lat_deg: -3.1,
        lon_deg: -60.0,
        category: Category::Monitoring,
        caption: "Tropical forest | CO₂: 380 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Siberia",
        lat_deg: 64.0,
        lon_deg: 129.7,
        category: Category::Monitoring,
        caption: "Permafrost | Temperature: -25°C",
    },
    SeedPoint {
        name: "Monitoring Station - Australia",
        lat_deg: -25.3,
        lon_deg: 133.3,
        category: Category::Monitoring,
        caption: "Desert | CO₂: 410 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Africa",
        lat_deg: -1.3,
        lon_deg: 36.8,
        category: Category::Monitoring,
        caption: "Savanna | CO₂: 390 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Europe",
        lat_deg: 52.5,
        lon_deg: 13.4,
        category: Category::Monitoring,
        caption: "Temperate | CO₂: 420 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Asia",
        lat_deg: 35.7,
        lon_deg: 139.7,
        category: Category::Monitoring,
        caption: "Industrial | CO₂: 450 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - North America",
        lat_deg: 40.7,
        lon_deg: -74.0,
        category: Category::Monitoring,
        caption: "Continental | CO₂: 415 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Pacific Ocean",
        lat_deg: 0.0,
        lon_deg: -150.0,
        category: Category::Monitoring,
        caption: "Ocean | CO₂: 380 ppm",
    },
    SeedPoint {
        name: "Monitoring Station - Atlantic Ocean",
        lat_deg: 0.0,
        lon_deg: -30.0,
        category: Category::Monitoring,
        caption: "Ocean | CO₂: 385 ppm",
    },
];

// (name, lat, lon, region)
const STATIONS: &[(&str, f64, f64, &str)] = &[
    ("Station - London", 51.5074, -0.1278, "Europe"),
    ("Station - Paris", 48.8566, 2.3522, "Europe"),
    ("Station - Berlin", 52.5200, 13.4050, "Europe"),
    ("Station - Madrid", 40.4168, -3.7038, "Europe"),
    ("Station - Rome", 41.9028, 12.4964, "Europe"),
    ("Station - Tokyo", 35.6762, 139.6503, "Asia"),
    ("Station - Beijing", 39.9042, 116.4074, "Asia"),
    ("Station - Mumbai", 19.0760, 72.8777, "Asia"),
    ("Station - Sydney", -33.8688, 151.2093, "Oceania"),
    ("Station - Seoul", 37.5665, 126.9780, "Asia"),
    ("Station - São Paulo", -23.5505, -46.6333, "South America"),
    ("Station - Buenos Aires", -34.6037, -58.3816, "South America"),
    ("Station - Lima", -12.0464, -77.0428, "South America"),
    ("Station - Bogotá", 4.7110, -74.0721, "South America"),
    ("Station - Santiago", -33.4489, -70.6693, "South America"),
    ("Station - Cairo", 30.0444, 31.2357, "Africa"),
    ("Station - Lagos", 6.5244, 3.3792, "Africa"),
    ("Station - Johannesburg", -26.2041, 28.0473, "Africa"),
    ("Station - Casablanca", 33.5731, -7.5898, "Africa"),
    ("Station - Nairobi", -1.2921, 36.8219, "Africa"),
    ("Station - Vancouver", 49.2827, -123.1207, "North America"),
    ("Station - Toronto", 43.6532, -79.3832, "North America"),
    ("Station - Miami", 25.7617, -80.1918, "North America"),
    ("Station - Seattle", 47.6062, -122.3321, "North America"),
    ("Station - Denver", 39.7392, -104.9903, "North America"),
];

const COVERAGE_CITIES: &[(&str, f64, f64, &str)] = &[
    (
        "TEMPO - Los Angeles",
        34.0522,
        -118.2437,
        "Ozone: 45 ppb | NO₂: 15 ppb",
    ),
    (
        "TEMPO - New York",
        40.7128,
        -74.0060,
        "Ozone: 38 ppb | NO₂: 22 ppb",
    ),
    (
        "TEMPO - Chicago",
        41.8781,
        -87.6298,
        "Ozone: 42 ppb | NO₂: 18 ppb",
    ),
    (
        "TEMPO - Houston",
        29.7604,
        -95.3698,
        "Ozone: 52 ppb | NO₂: 25 ppb",
    ),
    (
        "TEMPO - Phoenix",
        33.4484,
        -112.0740,
        "Ozone: 48 ppb | NO₂: 12 ppb",
    ),
];

/// Landmark points with informational captions.
pub fn exploration_points() -> Result<Vec<GeoPoint>, RegistryError> {
    EXPLORATION
        .iter()
        .map(|seed| {
            Ok(
                GeoPoint::new(seed.name, seed.lat_deg, seed.lon_deg, seed.category)?
                    .with_caption(seed.caption),
            )
        })
        .collect()
}

/// The seeded station network. Captions carry the region label.
pub fn monitoring_stations() -> Result<Vec<GeoPoint>, RegistryError> {
    STATIONS
        .iter()
        .map(|&(name, lat, lon, region)| {
            Ok(GeoPoint::new(name, lat, lon, Category::Station)?.with_caption(region))
        })
        .collect()
}

/// Satellite coverage cities targeted by the pollutant pass.
pub fn tempo_cities() -> Result<Vec<GeoPoint>, RegistryError> {
    COVERAGE_CITIES
        .iter()
        .map(|&(name, lat, lon, caption)| {
            Ok(GeoPoint::new(name, lat, lon, Category::TempoPollutant)?.with_caption(caption))
        })
        .collect()
}
