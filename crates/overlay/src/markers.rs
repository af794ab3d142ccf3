use foundation::math::{Vec2, Vec3};
use stations::{Category, Metric, PointEntry, PointRegistry};

use crate::resolver::{Badge, DisplayResolver, tempo_badge};

/// Camera distance at which markers render at full size.
pub const BASE_DISTANCE: f64 = 5.0;

/// Label extents in world units before distance scaling.
pub const BASE_WIDTH: f64 = 0.4;
pub const BASE_HEIGHT: f64 = 0.16;

// Labels float this far above their point so they clear the geometry.
const LABEL_LIFT: f64 = 0.3;

/// One label, rebuilt on demand from its point's current resolution.
/// Markers own no data of their own; the renderer billboards them at
/// `anchor` every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point_name: String,
    pub title: String,
    pub value: String,
    pub status: String,
    pub border_color: &'static str,
    pub anchor: Vec3,
    pub size: Vec2,
}

/// The full set of labels for the active metric.
///
/// `rebuild` replaces everything (metric switch), `refresh` re-resolves
/// one point (new readings arrived), `retarget` rescales uniformly with
/// camera distance. Markers stay in name order so snapshots are
/// deterministic.
#[derive(Debug)]
pub struct OverlayLayer {
    resolver: DisplayResolver,
    markers: Vec<Marker>,
    scale: f64,
}

impl Default for OverlayLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self {
            resolver: DisplayResolver::new(),
            markers: Vec::new(),
            scale: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Label for one point under the active metric: four lines (metric
    /// title, value, quality label, point name) with the quality color
    /// as border.
    pub fn build(&self, entry: &PointEntry, metric: Metric) -> Marker {
        let badge = self.badge_for(entry);
        Marker {
            point_name: entry.point.name().to_owned(),
            title: metric.title().to_owned(),
            value: self.resolver.value_for(entry, metric),
            status: badge.label().to_owned(),
            border_color: badge.color,
            anchor: entry.point.position() + Vec3::new(0.0, LABEL_LIFT, 0.0),
            size: Vec2::new(BASE_WIDTH * self.scale, BASE_HEIGHT * self.scale),
        }
    }

    /// Replace every marker from the registry, in name order.
    pub fn rebuild(&mut self, registry: &PointRegistry, metric: Metric) {
        let mut markers = Vec::with_capacity(registry.len());
        registry.for_each(|entry| markers.push(self.build(entry, metric)));
        self.markers = markers;
    }

    /// Re-resolve one point's marker after its readings changed. A point
    /// not yet represented gets a new marker in order.
    pub fn refresh(&mut self, registry: &PointRegistry, name: &str, metric: Metric) {
        let Some(entry) = registry.get(name) else {
            return;
        };
        let marker = self.build(entry, metric);

        match self.markers.iter_mut().find(|m| m.point_name == name) {
            Some(existing) => *existing = marker,
            None => {
                self.markers.push(marker);
                self.markers
                    .sort_by(|a, b| a.point_name.cmp(&b.point_name));
            }
        }
    }

    /// Uniform scale from camera distance: full size at the base
    /// distance, clamped so labels neither vanish nor dominate.
    pub fn retarget(&mut self, camera_distance: f64) {
        self.scale = (camera_distance / BASE_DISTANCE).clamp(0.1, 1.0);
        let size = Vec2::new(BASE_WIDTH * self.scale, BASE_HEIGHT * self.scale);
        for marker in &mut self.markers {
            marker.size = size;
        }
    }

    /// Current markers in name order.
    pub fn snapshot(&self) -> &[Marker] {
        &self.markers
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    // Satellite cities with an observation color by its quality; every
    // other point goes through the resolver precedence.
    fn badge_for(&self, entry: &PointEntry) -> Badge {
        if entry.point.category() == Category::TempoPollutant
            && let Some(tempo) = &entry.tempo
        {
            return tempo_badge(tempo.quality);
        }
        self.resolver.quality_for(entry)
    }
}
