use std::collections::BTreeMap;

use crate::obs::{TempoObs, WeatherObs};
use crate::point::GeoPoint;
use crate::reading::{Metric, Reading};

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    NotFound(String),
    InvalidCoordinates { lat_deg: f64, lon_deg: f64 },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound(name) => write!(f, "point not found: {name}"),
            RegistryError::InvalidCoordinates { lat_deg, lon_deg } => {
                write!(f, "coordinates out of range: ({lat_deg}, {lon_deg})")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Registry entry: the point plus everything enrichment has attached.
///
/// `seeded` holds the eagerly generated placeholder readings written once
/// at seed time; `fetched` holds the latest reading per metric from the
/// enrichment loops (real on success, simulated on fallback). The display
/// resolver checks them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEntry {
    pub point: GeoPoint,
    seeded: BTreeMap<Metric, Reading>,
    fetched: BTreeMap<Metric, Reading>,
    pub weather: Option<WeatherObs>,
    pub tempo: Option<TempoObs>,
}

impl PointEntry {
    fn new(point: GeoPoint) -> Self {
        Self {
            point,
            seeded: BTreeMap::new(),
            fetched: BTreeMap::new(),
            weather: None,
            tempo: None,
        }
    }

    pub fn seeded_reading(&self, metric: Metric) -> Option<&Reading> {
        self.seeded.get(&metric)
    }

    pub fn fetched_reading(&self, metric: Metric) -> Option<&Reading> {
        self.fetched.get(&metric)
    }

    pub fn has_seeded_data(&self) -> bool {
        !self.seeded.is_empty()
    }
}

/// Name-indexed set of annotated globe locations.
///
/// The registry is the only owner of points and their datasets; layers
/// and fetchers refer to entries by name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointRegistry {
    entries: BTreeMap<String, PointEntry>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a point. A name collision overwrites the existing entry,
    /// discarding its datasets and attachments.
    pub fn register(&mut self, point: GeoPoint) {
        self.entries
            .insert(point.name().to_string(), PointEntry::new(point));
    }

    pub fn get(&self, name: &str) -> Option<&PointEntry> {
        self.entries.get(name)
    }

    /// Names in iteration order. Enrichment loops collect these up front
    /// so no borrow is held across await points.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Entries in deterministic (name) order.
    pub fn iter(&self) -> impl Iterator<Item = &PointEntry> {
        self.entries.values()
    }

    pub fn for_each(&self, mut f: impl FnMut(&PointEntry)) {
        for entry in self.entries.values() {
            f(entry);
        }
    }

    /// Writes a placeholder reading generated at seed time.
    pub fn seed_metric(
        &mut self,
        name: &str,
        metric: Metric,
        reading: Reading,
    ) -> Result<(), RegistryError> {
        let entry = self.entry_mut(name)?;
        entry.seeded.insert(metric, reading);
        Ok(())
    }

    /// Replaces the current fetched reading for (point, metric). Always a
    /// whole-reading replacement; the previous reading is discarded.
    pub fn update_metric(
        &mut self,
        name: &str,
        metric: Metric,
        reading: Reading,
    ) -> Result<(), RegistryError> {
        let entry = self.entry_mut(name)?;
        entry.fetched.insert(metric, reading);
        Ok(())
    }

    pub fn attach_weather(&mut self, name: &str, obs: WeatherObs) -> Result<(), RegistryError> {
        let entry = self.entry_mut(name)?;
        entry.weather = Some(obs);
        Ok(())
    }

    pub fn attach_tempo(&mut self, name: &str, obs: TempoObs) -> Result<(), RegistryError> {
        let entry = self.entry_mut(name)?;
        entry.tempo = Some(obs);
        Ok(())
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut PointEntry, RegistryError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}
