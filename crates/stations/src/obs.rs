use foundation::time::Time;

use crate::reading::{Metric, Tier};

/// Current-conditions bundle attached to a point by the weather fetcher.
/// Wind speed stays in m/s; the climate summary converts on display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObs {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_ms: f64,
    pub clouds_pct: f64,
    pub description: String,
}

/// One satellite pollutant observation for a coverage city.
#[derive(Debug, Clone, PartialEq)]
pub struct TempoObs {
    pub pollutant: Metric,
    pub value: f64,
    pub unit: String,
    pub quality: Tier,
    pub timestamp: Time,
}
