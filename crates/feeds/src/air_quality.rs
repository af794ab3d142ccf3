use std::collections::BTreeMap;

use foundation::time::Time;
use serde::Deserialize;
use stations::{Metric, Reading};
use synthesis::{FakeGenerator, classify};

use crate::error::FeedError;
use crate::relay;

pub const OPENAQ_URL: &str = "https://api.openaq.org/v2/measurements";

#[derive(Debug, Deserialize)]
struct MeasurementsResponse {
    #[serde(default)]
    results: Vec<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    parameter: String,
    value: f64,
    #[serde(default)]
    unit: String,
    date: MeasurementDate,
}

#[derive(Debug, Deserialize)]
struct MeasurementDate {
    utc: String,
}

/// Nearby pollutant measurements from OpenAQ, routed through the CORS
/// relay.
pub struct AirQualityFeed {
    client: reqwest::Client,
    relay_url: String,
    generator: FakeGenerator,
}

impl AirQualityFeed {
    pub fn new(client: reqwest::Client, relay_url: impl Into<String>) -> Self {
        Self {
            client,
            relay_url: relay_url.into(),
            generator: FakeGenerator::new(),
        }
    }

    /// Latest reading per recognized pollutant within 1 km of the
    /// point. Any failure, and an empty result set, downgrade to one
    /// simulated CO₂ reading so the caller always has something to
    /// record.
    pub async fn fetch(&self, lat_deg: f64, lon_deg: f64, at: Time) -> Vec<(Metric, Reading)> {
        match self.try_fetch(lat_deg, lon_deg, at).await {
            Ok(readings) if !readings.is_empty() => readings,
            Ok(_) => {
                tracing::debug!(lat_deg, lon_deg, "no pollutant measurements near point");
                self.fallback(lat_deg, lon_deg, at)
            }
            Err(err) => {
                tracing::debug!(lat_deg, lon_deg, %err, "air quality fetch failed");
                self.fallback(lat_deg, lon_deg, at)
            }
        }
    }

    async fn try_fetch(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        at: Time,
    ) -> Result<Vec<(Metric, Reading)>, FeedError> {
        let target = format!(
            "{OPENAQ_URL}?limit=100&coordinates={lat_deg},{lon_deg}&radius=1000&order_by=datetime&sort=desc"
        );
        let response = relay::fetch_via_relay(&self.client, &self.relay_url, &target).await?;
        let payload: MeasurementsResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Payload(e.to_string()))?;
        Ok(latest_per_metric(&payload.results, at))
    }

    fn fallback(&self, lat_deg: f64, lon_deg: f64, at: Time) -> Vec<(Metric, Reading)> {
        vec![(
            Metric::Co2,
            self.generator.generate(lat_deg, lon_deg, Metric::Co2, at),
        )]
    }
}

/// Newest measurement per recognized pollutant, by UTC timestamp.
/// ISO-8601 strings compare correctly as plain strings.
fn latest_per_metric(measurements: &[Measurement], at: Time) -> Vec<(Metric, Reading)> {
    let mut latest: BTreeMap<Metric, &Measurement> = BTreeMap::new();
    for measurement in measurements {
        let Some(metric) = metric_for_parameter(&measurement.parameter) else {
            continue;
        };
        match latest.get(&metric) {
            Some(held) if held.date.utc >= measurement.date.utc => {}
            _ => {
                latest.insert(metric, measurement);
            }
        }
    }

    latest
        .into_iter()
        .map(|(metric, measurement)| {
            let unit = display_unit(metric, &measurement.unit);
            let tier = classify(metric, measurement.value);
            (metric, Reading::real(measurement.value, unit, tier, at))
        })
        .collect()
}

fn metric_for_parameter(parameter: &str) -> Option<Metric> {
    match parameter {
        "pm25" => Some(Metric::Pm25),
        "no2" => Some(Metric::No2),
        "o3" => Some(Metric::Ozone),
        "co" => Some(Metric::Co2),
        _ => None,
    }
}

// Carbon monoxide is surfaced under the CO₂ header, so its unit keeps
// the CO suffix; ozone gets its chemical label for the same reason.
fn display_unit(metric: Metric, payload_unit: &str) -> String {
    match metric {
        Metric::Co2 => "ppm CO".to_owned(),
        Metric::Ozone => "µg/m³ O₃".to_owned(),
        _ if payload_unit.is_empty() => metric.simulated_unit().to_owned(),
        _ => payload_unit.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AirQualityFeed, Measurement, MeasurementDate, latest_per_metric};
    use foundation::time::Time;
    use stations::{Metric, Source, Tier};

    fn measurement(parameter: &str, value: f64, utc: &str) -> Measurement {
        Measurement {
            parameter: parameter.to_owned(),
            value,
            unit: "µg/m³".to_owned(),
            date: MeasurementDate {
                utc: utc.to_owned(),
            },
        }
    }

    #[test]
    fn newest_measurement_wins_per_pollutant() {
        let measurements = vec![
            measurement("pm25", 18.0, "2026-08-25T10:00:00Z"),
            measurement("pm25", 42.0, "2026-08-25T09:00:00Z"),
            measurement("no2", 31.0, "2026-08-25T08:00:00Z"),
        ];

        let readings = latest_per_metric(&measurements, Time::ZERO);
        assert_eq!(readings.len(), 2);

        let (_, pm25) = readings
            .iter()
            .find(|(metric, _)| *metric == Metric::Pm25)
            .unwrap();
        assert_eq!(pm25.value, 18.0);
        assert_eq!(pm25.tier, Tier::Moderate);
        assert_eq!(pm25.source, Source::Real);
    }

    #[test]
    fn unrecognized_parameters_are_skipped() {
        let measurements = vec![
            measurement("pm10", 50.0, "2026-08-25T10:00:00Z"),
            measurement("so2", 4.0, "2026-08-25T10:00:00Z"),
        ];
        assert!(latest_per_metric(&measurements, Time::ZERO).is_empty());
    }

    #[test]
    fn carbon_monoxide_lands_under_the_co2_header() {
        let measurements = vec![measurement("co", 0.4, "2026-08-25T10:00:00Z")];
        let readings = latest_per_metric(&measurements, Time::ZERO);

        let (metric, reading) = &readings[0];
        assert_eq!(*metric, Metric::Co2);
        assert_eq!(reading.unit, "ppm CO");
    }

    #[tokio::test]
    async fn unreachable_relay_falls_back_to_simulated_co2() {
        let feed = AirQualityFeed::new(reqwest::Client::new(), "http://relay.invalid");
        let readings = feed.fetch(51.6, -0.1, Time::ZERO).await;

        assert_eq!(readings.len(), 1);
        let (metric, reading) = &readings[0];
        assert_eq!(*metric, Metric::Co2);
        assert_eq!(reading.source, Source::Simulated);
        assert!(reading.value >= 400.0 && reading.value <= 500.0);
    }
}
