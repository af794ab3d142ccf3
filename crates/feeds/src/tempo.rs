use foundation::time::Time;
use stations::{Metric, TempoObs, Tier};
use synthesis::{FakeGenerator, classify, coverage_location_factor};

use crate::error::FeedError;
use crate::relay;

pub const TEMPO_URL: &str = "https://asdc.larc.nasa.gov/data/TEMPO/L2V01";

/// Products the satellite publishes, in pass order.
pub const TEMPO_POLLUTANTS: [Metric; 4] = [
    Metric::Ozone,
    Metric::No2,
    Metric::Hcho,
    Metric::Aerosols,
];

/// Whether a point sits inside the satellite's North America coverage.
pub fn in_coverage(lat_deg: f64, lon_deg: f64) -> bool {
    lat_deg > 10.0 && lat_deg < 70.0 && lon_deg > -180.0 && lon_deg < -50.0
}

/// Quality ladder for satellite products. Ozone carries the satellite's
/// own thresholds; the other products share the ladders real readings
/// are classified on.
pub fn quality_for(pollutant: Metric, value: f64) -> Tier {
    match pollutant {
        Metric::Ozone => {
            if value < 50.0 {
                Tier::Excellent
            } else if value < 70.0 {
                Tier::Good
            } else if value < 100.0 {
                Tier::Moderate
            } else {
                Tier::Unhealthy
            }
        }
        _ => classify(pollutant, value),
    }
}

struct Profile {
    sim_base: f64,
    sim_span: f64,
    unit: &'static str,
}

fn profile(pollutant: Metric) -> Option<Profile> {
    let p = match pollutant {
        Metric::Ozone => Profile {
            sim_base: 40.0,
            sim_span: 30.0,
            unit: "ppb",
        },
        Metric::No2 => Profile {
            sim_base: 10.0,
            sim_span: 20.0,
            unit: "ppb",
        },
        Metric::Hcho => Profile {
            sim_base: 2.0,
            sim_span: 8.0,
            unit: "ppb",
        },
        Metric::Aerosols => Profile {
            sim_base: 0.1,
            sim_span: 0.4,
            unit: "AOD",
        },
        _ => return None,
    };
    Some(p)
}

/// Per-pollutant granules from the NASA TEMPO archive.
///
/// Unlike the other feeds, a payload that arrives but cannot be decoded
/// is reported to the caller instead of silently simulated. Transport
/// and HTTP failures still fall back like everywhere else.
pub struct TempoFeed {
    client: reqwest::Client,
    base_url: String,
    generator: FakeGenerator,
}

impl TempoFeed {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: TEMPO_URL.to_owned(),
            generator: FakeGenerator::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One observation for (pollutant, point, day).
    ///
    /// `Err` means a payload arrived and was not a NetCDF granule;
    /// every other failure resolves to a simulated observation.
    pub async fn fetch(
        &self,
        pollutant: Metric,
        lat_deg: f64,
        lon_deg: f64,
        date: &str,
        at: Time,
    ) -> Result<TempoObs, FeedError> {
        let Some(profile) = profile(pollutant) else {
            return Err(FeedError::Payload(format!(
                "{} is not a satellite product",
                pollutant.key()
            )));
        };

        let url = format!("{}/{}/{date}", self.base_url, pollutant.key());
        let response = match relay::send_checked(self.client.get(&url)).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(pollutant = pollutant.key(), %err, "granule fetch failed");
                return Ok(self.simulated(pollutant, &profile, lat_deg, lon_deg, at));
            }
        };

        let payload = match response.bytes().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(pollutant = pollutant.key(), %err, "granule body read failed");
                return Ok(self.simulated(pollutant, &profile, lat_deg, lon_deg, at));
            }
        };

        self.extract(&payload, pollutant, &profile, lat_deg, lon_deg, at)
    }

    /// The stand-in observation a transport failure would resolve to,
    /// for offline runs that skip the archive entirely.
    pub fn simulated_observation(
        &self,
        pollutant: Metric,
        lat_deg: f64,
        lon_deg: f64,
        at: Time,
    ) -> Result<TempoObs, FeedError> {
        let Some(profile) = profile(pollutant) else {
            return Err(FeedError::Payload(format!(
                "{} is not a satellite product",
                pollutant.key()
            )));
        };
        Ok(self.simulated(pollutant, &profile, lat_deg, lon_deg, at))
    }

    /// Decode an arrived granule. Decoding stops at the format check;
    /// the value itself is synthesized per location, as full NetCDF
    /// variable extraction is out of scope.
    fn extract(
        &self,
        payload: &[u8],
        pollutant: Metric,
        profile: &Profile,
        lat_deg: f64,
        lon_deg: f64,
        at: Time,
    ) -> Result<TempoObs, FeedError> {
        if !(payload.starts_with(b"CDF") || payload.starts_with(b"\x89HDF")) {
            return Err(FeedError::Payload(format!(
                "{} payload is not a NetCDF granule",
                pollutant.key()
            )));
        }

        let mut s = self
            .generator
            .sampler(lat_deg, lon_deg, &format!("tempo-extract-{}", pollutant.key()));
        let value = s.next_f64() * 50.0;
        Ok(TempoObs {
            pollutant,
            value: round2(value),
            unit: profile.unit.to_owned(),
            quality: quality_for(pollutant, value),
            timestamp: at,
        })
    }

    fn simulated(
        &self,
        pollutant: Metric,
        profile: &Profile,
        lat_deg: f64,
        lon_deg: f64,
        at: Time,
    ) -> TempoObs {
        let mut s = self
            .generator
            .sampler(lat_deg, lon_deg, &format!("tempo-{}", pollutant.key()));
        let factor = coverage_location_factor(lat_deg, lon_deg);
        let value = (profile.sim_base + s.next_f64() * profile.sim_span) * factor;
        TempoObs {
            pollutant,
            value: round2(value),
            unit: profile.unit.to_owned(),
            quality: quality_for(pollutant, value),
            timestamp: at,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{TEMPO_POLLUTANTS, TempoFeed, in_coverage, quality_for};
    use foundation::time::Time;
    use stations::{Metric, Tier};

    fn feed() -> TempoFeed {
        TempoFeed::new(reqwest::Client::new()).with_base_url("http://tempo.invalid")
    }

    #[test]
    fn coverage_box_is_north_america() {
        assert!(in_coverage(34.05, -118.24)); // Los Angeles
        assert!(in_coverage(40.71, -74.01)); // New York
        assert!(!in_coverage(51.5, -0.13)); // London
        assert!(!in_coverage(-23.55, -46.63)); // São Paulo
        assert!(!in_coverage(10.0, -80.0)); // boundary is exclusive
    }

    #[test]
    fn ozone_quality_uses_the_satellite_ladder() {
        assert_eq!(quality_for(Metric::Ozone, 45.0), Tier::Excellent);
        assert_eq!(quality_for(Metric::Ozone, 60.0), Tier::Good);
        assert_eq!(quality_for(Metric::Ozone, 80.0), Tier::Moderate);
        assert_eq!(quality_for(Metric::Ozone, 120.0), Tier::Unhealthy);

        assert_eq!(quality_for(Metric::No2, 15.0), Tier::Excellent);
        assert_eq!(quality_for(Metric::Aerosols, 0.5), Tier::Moderate);
    }

    #[tokio::test]
    async fn transport_failure_simulates_the_observation() {
        let feed = feed();
        let obs = feed
            .fetch(Metric::Ozone, 34.05, -118.24, "2026-08-25", Time::ZERO)
            .await
            .unwrap();

        assert_eq!(obs.pollutant, Metric::Ozone);
        assert_eq!(obs.unit, "ppb");
        // Base 40-70 ppb before the coverage multiplier.
        assert!(obs.value >= 40.0 * 0.8 && obs.value <= 70.0 * 1.5);
        assert_eq!(obs.quality, quality_for(Metric::Ozone, obs.value));

        let again = feed
            .fetch(Metric::Ozone, 34.05, -118.24, "2026-08-25", Time::ZERO)
            .await
            .unwrap();
        assert_eq!(obs, again);

        // The offline path produces the same observation without a request.
        let offline = feed
            .simulated_observation(Metric::Ozone, 34.05, -118.24, Time::ZERO)
            .unwrap();
        assert_eq!(obs, offline);
    }

    #[tokio::test]
    async fn every_product_simulates_with_its_unit() {
        let feed = feed();
        for pollutant in TEMPO_POLLUTANTS {
            let obs = feed
                .fetch(pollutant, 41.88, -87.63, "2026-08-25", Time::ZERO)
                .await
                .unwrap();
            let expected = if pollutant == Metric::Aerosols {
                "AOD"
            } else {
                "ppb"
            };
            assert_eq!(obs.unit, expected);
        }
    }

    #[tokio::test]
    async fn non_satellite_metric_is_rejected() {
        let err = feed()
            .fetch(Metric::Temperature, 34.05, -118.24, "2026-08-25", Time::ZERO)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a satellite product"));

        assert!(
            feed()
                .simulated_observation(Metric::Pm25, 34.05, -118.24, Time::ZERO)
                .is_err()
        );
    }

    #[test]
    fn granule_magic_gates_extraction() {
        let feed = feed();
        let profile = super::profile(Metric::No2).unwrap();

        let ok = feed
            .extract(b"CDF\x01rest", Metric::No2, &profile, 34.0, -118.0, Time::ZERO)
            .unwrap();
        assert!(ok.value >= 0.0 && ok.value <= 50.0);
        assert_eq!(ok.value, (ok.value * 100.0).round() / 100.0);

        let err = feed
            .extract(
                b"<html>not found</html>",
                Metric::No2,
                &profile,
                34.0,
                -118.0,
                Time::ZERO,
            )
            .unwrap_err();
        assert!(err.to_string().contains("NetCDF"));
    }
}
