use stations::{Category, PointEntry};
use synthesis::bases::region_bases;
use synthesis::generator::FakeGenerator;

use crate::resolver::{DisplayResolver, heuristic_badge};

/// Hover panel for a point: quality dot and tier label on top, a
/// category-specific status line, the caption for categories without
/// one, and the coordinate footer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub dot_color: &'static str,
    pub name: String,
    pub status: String,
    pub detail: String,
    pub location: String,
}

impl TooltipContent {
    pub fn for_entry(entry: &PointEntry) -> Self {
        let badge = DisplayResolver::new().quality_for(entry);
        Self {
            dot_color: badge.color,
            name: entry.point.name().to_owned(),
            status: badge.label().to_owned(),
            detail: detail_line(entry),
            location: format!(
                "📍 {}°N, {}°E",
                entry.point.lat_deg(),
                entry.point.lon_deg()
            ),
        }
    }
}

/// Status line for the hover panel. The orbital and surface figures are
/// plausible jitter around the region bases, replayed from a per-category
/// sampler so the same point always reports the same numbers.
fn detail_line(entry: &PointEntry) -> String {
    let lat = entry.point.lat_deg();
    let lon = entry.point.lon_deg();
    let generator = FakeGenerator::new();
    let bases = region_bases(lat);

    match entry.point.category() {
        Category::Station => {
            let mut s = generator.sampler(lat, lon, "tooltip-station");
            let altitude = (s.next_f64() * 50.0 + 400.0).floor();
            let speed = (s.next_f64() * 1000.0 + 27000.0).floor();
            let orbit = (s.next_f64() * 10.0 + 90.0).floor();
            format!(
                "Altitude: {altitude}km | Speed: {speed} km/h | Orbit: {orbit}° | Status: Active"
            )
        }
        Category::Monitoring => {
            let mut s = generator.sampler(lat, lon, "tooltip-monitoring");
            let co2 = (s.next_f64() * 20.0 + bases.co2_ppm).floor();
            let temp = (s.next_f64() * 20.0 + bases.temperature_c).floor();
            let humidity = (s.next_f64() * 30.0 + bases.humidity_pct).floor();
            let pressure = (s.next_f64() * 50.0 + bases.pressure_hpa).floor();
            let aqi = heuristic_badge(co2).label();
            format!(
                "CO₂: {co2} ppm | Temp: {temp}°C | Humidity: {humidity}% | Pressure: {pressure:.2} hPa | AQI: {aqi}"
            )
        }
        Category::Observatory => {
            let mut s = generator.sampler(lat, lon, "tooltip-observatory");
            let ozone = (s.next_f64() * 50.0 + bases.ozone_du).floor();
            let uv = (s.next_f64() * 10.0 + bases.uv_index).floor();
            let radiation = s.next_f64() * 0.5 + bases.radiation_uw_cm2;
            let pressure = (s.next_f64() * 20.0 + bases.pressure_hpa).floor();
            format!(
                "Ozone: {ozone} DU | UV: {uv} | Radiation: {radiation:.2} µW/cm² | Pressure: {pressure} hPa"
            )
        }
        Category::Satellite => {
            let mut s = generator.sampler(lat, lon, "tooltip-satellite");
            let orbit = (s.next_f64() * 100.0 + 700.0).floor();
            let rate = (s.next_f64() * 1000.0 + 500.0).floor();
            let coverage = (s.next_f64() * 20.0 + 80.0).floor();
            let status = if s.next_f64() > 0.1 {
                "Operational"
            } else {
                "Maintenance"
            };
            format!(
                "Orbit: {orbit}km | Rate: {rate} Mbps | Coverage: {coverage}% | Status: {status}"
            )
        }
        // Fire points and satellite-coverage cities describe themselves.
        Category::TempoPollutant | Category::Fire => {
            entry.point.caption().unwrap_or_default().to_owned()
        }
    }
}
