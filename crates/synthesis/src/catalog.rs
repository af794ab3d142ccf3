use std::collections::BTreeMap;

use foundation::time::Time;
use stations::{GeoPoint, Metric, Reading};

use crate::generator::FakeGenerator;

/// Simulated readings seeded for a fixed set of stations at startup.
///
/// The catalog is built once and then only read; points discovered later
/// (fire detections, satellite cells) intentionally have no entry here
/// and fall through to live fetches or ad-hoc generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimCatalog {
    readings: BTreeMap<String, BTreeMap<Metric, Reading>>,
}

impl SimCatalog {
    /// Seeds every core metric for every given point, all stamped with
    /// the same clock so a rebuild at the same instant is identical.
    pub fn for_stations(generator: &FakeGenerator, points: &[GeoPoint], at: Time) -> Self {
        let mut readings = BTreeMap::new();
        for point in points {
            let mut per_metric = BTreeMap::new();
            for metric in Metric::CORE {
                per_metric.insert(
                    metric,
                    generator.generate(point.lat_deg(), point.lon_deg(), metric, at),
                );
            }
            readings.insert(point.name().to_owned(), per_metric);
        }
        Self { readings }
    }

    pub fn get(&self, name: &str, metric: Metric) -> Option<&Reading> {
        self.readings.get(name)?.get(&metric)
    }

    /// Seeded stations in name order.
    pub fn stations(&self) -> impl Iterator<Item = (&str, &BTreeMap<Metric, Reading>)> {
        self.readings.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SimCatalog;
    use crate::generator::FakeGenerator;
    use foundation::time::Time;
    use pretty_assertions::assert_eq;
    use stations::{Metric, Source, seeds};

    #[test]
    fn seeds_every_core_metric_for_every_station() {
        let points = seeds::monitoring_stations().unwrap();
        let catalog = SimCatalog::for_stations(&FakeGenerator::new(), &points, Time::ZERO);

        assert_eq!(catalog.len(), 25);
        for point in &points {
            for metric in Metric::CORE {
                let reading = catalog.get(point.name(), metric).unwrap();
                assert_eq!(reading.source, Source::Simulated);
            }
        }
        assert!(catalog.get("Station - London", Metric::Pm25).is_none());
    }

    #[test]
    fn rebuild_at_same_instant_is_identical() {
        let points = seeds::monitoring_stations().unwrap();
        let generator = FakeGenerator::new();
        let first = SimCatalog::for_stations(&generator, &points, Time::ZERO);
        let second = SimCatalog::for_stations(&generator, &points, Time::ZERO);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_station_yields_nothing() {
        let catalog = SimCatalog::for_stations(&FakeGenerator::new(), &[], Time::ZERO);
        assert!(catalog.is_empty());
        assert!(catalog.get("Station - Atlantis", Metric::Co2).is_none());
    }
}
