use foundation::time::Time;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stations::{Metric, Reading, Tier};

use crate::bases::region_bases;

/// Deterministic jitter stream for one (location, salt) pair.
///
/// ChaCha8 seeded from a stable hash keeps draws identical across
/// platforms and runs, so resolving the same point twice shows the same
/// numbers.
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    /// Stream keyed by an arbitrary string, for draws not tied to a
    /// single location (a day's simulated fire set, for example).
    pub fn keyed(key: &str) -> Self {
        let digest = blake3::hash(key.as_bytes());
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed_u64(&digest)),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Produces plausible per-location readings when no real data exists.
///
/// Every draw is a pure function of (lat, lon, salt), never of wall
/// clock or call order. Values are explicitly fictional.
#[derive(Debug, Default)]
pub struct FakeGenerator;

impl FakeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Jitter stream keyed by location and a caller-chosen salt.
    pub fn sampler(&self, lat_deg: f64, lon_deg: f64, salt: &str) -> Sampler {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&lat_deg.to_bits().to_le_bytes());
        hasher.update(&lon_deg.to_bits().to_le_bytes());
        hasher.update(salt.as_bytes());

        Sampler {
            rng: ChaCha8Rng::seed_from_u64(seed_u64(&hasher.finalize())),
        }
    }

    /// Location-adjusted base value plus bounded jitter, classified and
    /// rounded. Never fails and never blocks.
    pub fn sample(&self, lat_deg: f64, lon_deg: f64, metric: Metric) -> Sample {
        let mut s = self.sampler(lat_deg, lon_deg, metric.key());

        let value = match metric {
            Metric::Co2 => 400.0 + s.next_f64() * 100.0,
            Metric::Temperature => 30.0 - lat_deg.abs() * 0.4 + (s.next_f64() - 0.5) * 10.0,
            Metric::Humidity => 50.0 + s.next_f64() * 40.0,
            Metric::Pressure => 1013.0 + (s.next_f64() - 0.5) * 50.0,
            Metric::Ozone => 20.0 + s.next_f64() * 40.0,
            Metric::Pm25 => (15.0 + s.next_f64() * 20.0) * air_location_factor(lat_deg, lon_deg),
            Metric::No2 => {
                (10.0 + s.next_f64() * 20.0) * coverage_location_factor(lat_deg, lon_deg)
            }
            Metric::Hcho => (2.0 + s.next_f64() * 8.0) * coverage_location_factor(lat_deg, lon_deg),
            Metric::Aerosols => {
                (0.1 + s.next_f64() * 0.4) * coverage_location_factor(lat_deg, lon_deg)
            }
        };

        Sample {
            value: round_to(value, decimals(metric)),
            unit: metric.simulated_unit(),
            tier: classify(metric, value),
        }
    }

    /// A full simulated reading, stamped with the caller's clock.
    pub fn generate(&self, lat_deg: f64, lon_deg: f64, metric: Metric, at: Time) -> Reading {
        let sample = self.sample(lat_deg, lon_deg, metric);
        Reading::simulated(sample.value, sample.unit, sample.tier, at)
    }

    /// CO₂ figure for the overview badge when a point has neither real
    /// air-quality data nor a seeded reading: region base plus jitter.
    pub fn heuristic_co2(&self, lat_deg: f64, lon_deg: f64) -> f64 {
        let mut s = self.sampler(lat_deg, lon_deg, "co2-badge");
        (s.next_f64() * 20.0 + region_bases(lat_deg).co2_ppm).floor()
    }
}

/// One synthesized measurement, not yet persisted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub unit: &'static str,
    pub tier: Tier,
}

/// Fixed threshold tables per metric. Real readings run through the
/// same tables so tiers stay comparable across sources.
pub fn classify(metric: Metric, value: f64) -> Tier {
    match metric {
        Metric::Temperature => range_tier(value, (15.0, 25.0), (10.0, 30.0)),
        Metric::Humidity => range_tier(value, (40.0, 60.0), (30.0, 70.0)),
        Metric::Pressure => range_tier(value, (1000.0, 1020.0), (990.0, 1030.0)),
        Metric::Co2 => range_tier(value, (0.0, 400.0), (400.0, 600.0)),
        Metric::Ozone => range_tier(value, (0.0, 50.0), (50.0, 100.0)),
        Metric::Pm25 => {
            if value <= 12.0 {
                Tier::Good
            } else if value <= 35.0 {
                Tier::Moderate
            } else if value <= 55.0 {
                Tier::UnhealthyForSensitive
            } else if value <= 150.0 {
                Tier::Unhealthy
            } else {
                Tier::VeryUnhealthy
            }
        }
        Metric::No2 => step_tier(value, 20.0, 40.0, 60.0),
        Metric::Hcho => step_tier(value, 5.0, 10.0, 15.0),
        Metric::Aerosols => step_tier(value, 0.2, 0.4, 0.6),
    }
}

fn range_tier(value: f64, good: (f64, f64), moderate: (f64, f64)) -> Tier {
    if value >= good.0 && value <= good.1 {
        Tier::Good
    } else if value >= moderate.0 && value <= moderate.1 {
        Tier::Moderate
    } else {
        Tier::Unhealthy
    }
}

fn step_tier(value: f64, excellent: f64, good: f64, moderate: f64) -> Tier {
    if value < excellent {
        Tier::Excellent
    } else if value < good {
        Tier::Good
    } else if value < moderate {
        Tier::Moderate
    } else {
        Tier::Unhealthy
    }
}

// Polar air is cleaner; the European/African longitude belt is dirtier.
// The second check intentionally overrides the first.
fn air_location_factor(lat_deg: f64, lon_deg: f64) -> f64 {
    let mut factor = 1.0;
    if lat_deg > 60.0 || lat_deg < -60.0 {
        factor = 0.7;
    }
    if lon_deg.abs() < 30.0 {
        factor = 1.3;
    }
    factor
}

fn seed_u64(digest: &blake3::Hash) -> u64 {
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(seed)
}

/// Pollution multiplier for the satellite coverage boxes over North
/// America. Shared with the satellite feed's simulated observations.
pub fn coverage_location_factor(lat_deg: f64, lon_deg: f64) -> f64 {
    if lat_deg > 40.0 && lat_deg < 50.0 && lon_deg > -130.0 && lon_deg < -60.0 {
        1.2
    } else if lat_deg > 25.0 && lat_deg < 35.0 && lon_deg > -100.0 && lon_deg < -80.0 {
        1.5
    } else if lat_deg > 45.0 && lat_deg < 55.0 && lon_deg > -80.0 && lon_deg < -60.0 {
        0.8
    } else {
        1.0
    }
}

fn decimals(metric: Metric) -> u32 {
    match metric {
        Metric::No2 | Metric::Hcho | Metric::Aerosols => 2,
        _ => 1,
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::{FakeGenerator, classify};
    use foundation::time::Time;
    use pretty_assertions::assert_eq;
    use stations::{Metric, Source, Tier};

    #[test]
    fn readings_are_deterministic_per_location_and_metric() {
        let generator = FakeGenerator::new();
        let a = generator.generate(51.6, -0.1, Metric::Co2, Time::ZERO);
        let b = generator.generate(51.6, -0.1, Metric::Co2, Time::ZERO);
        assert_eq!(a, b);

        let elsewhere = generator.generate(51.7, -0.1, Metric::Co2, Time::ZERO);
        assert_ne!(a.value, elsewhere.value);
    }

    #[test]
    fn co2_stays_in_band_and_matches_its_ladder() {
        let generator = FakeGenerator::new();
        for lat in [-80.0, -30.0, 0.0, 45.0, 80.0] {
            let sample = generator.sample(lat, 10.0, Metric::Co2);
            assert!(sample.value >= 400.0 && sample.value <= 500.0);
            assert_eq!(sample.unit, "ppm");
            assert_eq!(sample.tier, classify(Metric::Co2, sample.value));
        }
    }

    #[test]
    fn co2_415_is_moderate() {
        assert_eq!(classify(Metric::Co2, 415.0), Tier::Moderate);
        assert_eq!(classify(Metric::Co2, 399.0), Tier::Good);
        assert_eq!(classify(Metric::Co2, 700.0), Tier::Unhealthy);
    }

    #[test]
    fn temperature_tracks_latitude() {
        let generator = FakeGenerator::new();
        let equator = generator.sample(0.0, 20.0, Metric::Temperature);
        let pole = generator.sample(85.0, 20.0, Metric::Temperature);

        assert!((equator.value - 30.0).abs() <= 5.0);
        assert!((pole.value - (30.0 - 85.0 * 0.4)).abs() <= 5.0);
        assert!(pole.value < equator.value);
    }

    #[test]
    fn pm25_location_factors_apply() {
        let generator = FakeGenerator::new();

        let polar = generator.sample(70.0, 100.0, Metric::Pm25);
        assert!(polar.value >= 15.0 * 0.7 && polar.value <= 35.0 * 0.7);

        let industrial = generator.sample(45.0, 10.0, Metric::Pm25);
        assert!(industrial.value >= 15.0 * 1.3 && industrial.value <= 35.0 * 1.3);
    }

    #[test]
    fn pm25_ladder_boundaries() {
        assert_eq!(classify(Metric::Pm25, 12.0), Tier::Good);
        assert_eq!(classify(Metric::Pm25, 35.0), Tier::Moderate);
        assert_eq!(classify(Metric::Pm25, 55.0), Tier::UnhealthyForSensitive);
        assert_eq!(classify(Metric::Pm25, 150.0), Tier::Unhealthy);
        assert_eq!(classify(Metric::Pm25, 151.0), Tier::VeryUnhealthy);
    }

    #[test]
    fn satellite_pollutants_round_to_two_decimals() {
        let generator = FakeGenerator::new();
        let aod = generator.sample(34.05, -118.24, Metric::Aerosols);
        assert_eq!(aod.unit, "AOD");
        assert!((aod.value * 100.0 - (aod.value * 100.0).round()).abs() < 1e-9);

        let co2 = generator.sample(34.05, -118.24, Metric::Co2);
        assert!((co2.value * 10.0 - (co2.value * 10.0).round()).abs() < 1e-9);
    }

    #[test]
    fn simulated_source_is_tagged() {
        let generator = FakeGenerator::new();
        let reading = generator.generate(0.0, 0.0, Metric::Ozone, Time(7.0));
        assert_eq!(reading.source, Source::Simulated);
        assert_eq!(reading.timestamp, Time(7.0));
    }

    #[test]
    fn keyed_samplers_replay_their_stream() {
        let mut a = super::Sampler::keyed("fires-2026-08-25");
        let mut b = super::Sampler::keyed("fires-2026-08-25");
        let mut other = super::Sampler::keyed("fires-2026-08-26");

        let first = a.next_f64();
        assert_eq!(first, b.next_f64());
        assert!(first >= 0.0 && first < 1.0);
        assert_ne!(first, other.next_f64());
    }

    #[test]
    fn badge_heuristic_is_deterministic_and_region_based() {
        let generator = FakeGenerator::new();
        let a = generator.heuristic_co2(51.6, -0.1);
        let b = generator.heuristic_co2(51.6, -0.1);
        assert_eq!(a, b);

        // Temperate base 415, jitter [0, 20).
        assert!(a >= 415.0 && a < 435.0);
        assert_eq!(a, a.floor());

        let antarctic = generator.heuristic_co2(-75.0, 166.0);
        assert!(antarctic >= 380.0 && antarctic < 400.0);
    }
}
