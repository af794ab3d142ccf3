use crate::reading::Metric;
use crate::registry::PointRegistry;

/// Aggregate of every weather observation currently attached to the
/// registry, recomputed on the periodic refresh.
///
/// Satellite ozone readings contribute a derived temperature of
/// `20 + value / 10` °C so coverage cities influence the global range
/// even before their weather arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateSummary {
    pub weather_samples: usize,
    pub temperature_samples: usize,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub avg_temp_c: f64,
    pub avg_humidity_pct: f64,
    pub avg_pressure_hpa: f64,
    pub avg_wind_kmh: f64,
    pub avg_clouds_pct: f64,
    pub avg_feels_like_c: f64,
}

impl ClimateSummary {
    /// Returns `None` until at least one temperature sample exists.
    pub fn compute(registry: &PointRegistry) -> Option<Self> {
        let mut temps = Vec::new();
        let mut humidity = Vec::new();
        let mut pressure = Vec::new();
        let mut wind_ms = Vec::new();
        let mut clouds = Vec::new();
        let mut feels_like = Vec::new();

        registry.for_each(|entry| {
            if let Some(weather) = &entry.weather {
                temps.push(weather.temperature_c);
                humidity.push(weather.humidity_pct);
                pressure.push(weather.pressure_hpa);
                wind_ms.push(weather.wind_speed_ms);
                clouds.push(weather.clouds_pct);
                feels_like.push(weather.feels_like_c);
            }

            if let Some(tempo) = &entry.tempo {
                if tempo.pollutant == Metric::Ozone {
                    temps.push(20.0 + tempo.value / 10.0);
                }
            }
        });

        if temps.is_empty() {
            return None;
        }

        let min_temp_c = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max_temp_c = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            weather_samples: humidity.len(),
            temperature_samples: temps.len(),
            min_temp_c,
            max_temp_c,
            avg_temp_c: avg(&temps),
            avg_humidity_pct: avg(&humidity),
            avg_pressure_hpa: avg(&pressure),
            avg_wind_kmh: avg(&wind_ms) * 3.6,
            avg_clouds_pct: avg(&clouds),
            avg_feels_like_c: avg(&feels_like),
        })
    }
}

fn avg(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::ClimateSummary;
    use crate::obs::{TempoObs, WeatherObs};
    use crate::point::{Category, GeoPoint};
    use crate::reading::{Metric, Tier};
    use crate::registry::PointRegistry;
    use foundation::time::Time;

    fn weather(temp: f64, wind_ms: f64) -> WeatherObs {
        WeatherObs {
            temperature_c: temp,
            feels_like_c: temp - 1.0,
            humidity_pct: 60.0,
            pressure_hpa: 1010.0,
            wind_speed_ms: wind_ms,
            clouds_pct: 40.0,
            description: "clear sky".to_string(),
        }
    }

    #[test]
    fn empty_registry_has_no_summary() {
        let reg = PointRegistry::new();
        assert_eq!(ClimateSummary::compute(&reg), None);
    }

    #[test]
    fn aggregates_weather_observations() {
        let mut reg = PointRegistry::new();
        reg.register(GeoPoint::new("a", 10.0, 10.0, Category::Station).unwrap());
        reg.register(GeoPoint::new("b", 20.0, 20.0, Category::Station).unwrap());
        reg.attach_weather("a", weather(10.0, 5.0)).unwrap();
        reg.attach_weather("b", weather(30.0, 10.0)).unwrap();

        let summary = ClimateSummary::compute(&reg).unwrap();
        assert_eq!(summary.weather_samples, 2);
        assert_eq!(summary.min_temp_c, 10.0);
        assert_eq!(summary.max_temp_c, 30.0);
        assert_eq!(summary.avg_temp_c, 20.0);
        assert_eq!(summary.avg_humidity_pct, 60.0);
        assert!((summary.avg_wind_kmh - 7.5 * 3.6).abs() < 1e-9);
    }

    #[test]
    fn satellite_ozone_contributes_derived_temperature() {
        let mut reg = PointRegistry::new();
        reg.register(GeoPoint::new("TEMPO - Houston", 29.8, -95.4, Category::TempoPollutant).unwrap());
        reg.attach_tempo(
            "TEMPO - Houston",
            TempoObs {
                pollutant: Metric::Ozone,
                value: 80.0,
                unit: "ppb".to_string(),
                quality: Tier::Moderate,
                timestamp: Time::ZERO,
            },
        )
        .unwrap();

        let summary = ClimateSummary::compute(&reg).unwrap();
        assert_eq!(summary.weather_samples, 0);
        assert_eq!(summary.temperature_samples, 1);
        assert_eq!(summary.avg_temp_c, 28.0);
        assert_eq!(summary.min_temp_c, 28.0);
    }

    #[test]
    fn non_ozone_satellite_readings_do_not_affect_temperature() {
        let mut reg = PointRegistry::new();
        reg.register(GeoPoint::new("TEMPO - Phoenix", 33.4, -112.1, Category::TempoPollutant).unwrap());
        reg.attach_tempo(
            "TEMPO - Phoenix",
            TempoObs {
                pollutant: Metric::No2,
                value: 30.0,
                unit: "ppb".to_string(),
                quality: Tier::Good,
                timestamp: Time::ZERO,
            },
        )
        .unwrap();

        assert_eq!(ClimateSummary::compute(&reg), None);
    }
}
