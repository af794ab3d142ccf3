use stations::{Metric, PointEntry, Reading, Source, Tier};
use synthesis::FakeGenerator;

// Color tokens shared with the UI layer.
pub const GREEN: &str = "#4CAF50";
pub const LIGHT_GREEN: &str = "#8BC34A";
pub const AMBER: &str = "#FFC107";
pub const ORANGE: &str = "#FF9800";
pub const DEEP_ORANGE: &str = "#FF5722";
pub const RED: &str = "#F44336";
pub const PURPLE: &str = "#9C27B0";

/// Quality badge for a point: tier plus the color token the UI draws
/// borders and dots with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tier: Tier,
    pub color: &'static str,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Decides what a point displays, with one precedence order for every
/// caller: the seeded placeholder reading first, then the latest fetched
/// reading, then an ad-hoc generator sample that is never cached.
///
/// Seeded placeholders deliberately win over later-arriving real data,
/// and the ad-hoc tail means resolution never comes back empty.
#[derive(Debug, Default)]
pub struct DisplayResolver {
    generator: FakeGenerator,
}

impl DisplayResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted value for one metric. Never empty.
    pub fn value_for(&self, entry: &PointEntry, metric: Metric) -> String {
        if let Some(reading) = entry.seeded_reading(metric) {
            return format_reading(metric, reading);
        }
        if let Some(reading) = entry.fetched_reading(metric) {
            return format_reading(metric, reading);
        }

        let sample = self
            .generator
            .sample(entry.point.lat_deg(), entry.point.lon_deg(), metric);
        format!("{} {}", sample.value, sample.unit)
    }

    /// Overview badge. Real PM2.5 wins, then the seeded CO₂
    /// placeholder's tier, then the region CO₂ heuristic.
    pub fn quality_for(&self, entry: &PointEntry) -> Badge {
        if let Some(pm25) = entry.fetched_reading(Metric::Pm25).filter(|r| r.is_real()) {
            return epa_badge(pm25.value);
        }
        if let Some(co2) = entry.seeded_reading(Metric::Co2) {
            return seeded_badge(co2.tier);
        }

        let co2 = self
            .generator
            .heuristic_co2(entry.point.lat_deg(), entry.point.lon_deg());
        heuristic_badge(co2)
    }
}

/// Simulated readings render the raw value and unit; real readings get
/// fixed per-metric precision (humidity stays an integer percent,
/// pressure keeps two decimals).
pub fn format_reading(metric: Metric, reading: &Reading) -> String {
    match reading.source {
        Source::Simulated => format!("{} {}", reading.value, reading.unit),
        Source::Real => match metric {
            Metric::Temperature => format!("{:.1}{}", reading.value, reading.unit),
            Metric::Humidity => format!("{}{}", reading.value, reading.unit),
            Metric::Pressure => format!("{:.2} {}", reading.value, reading.unit),
            _ => format!("{:.1} {}", reading.value, reading.unit),
        },
    }
}

/// EPA PM2.5 bands.
pub fn epa_badge(pm25: f64) -> Badge {
    let tier = synthesis::classify(Metric::Pm25, pm25);
    let color = match tier {
        Tier::Good => GREEN,
        Tier::Moderate => LIGHT_GREEN,
        Tier::UnhealthyForSensitive => ORANGE,
        Tier::Unhealthy => RED,
        _ => PURPLE,
    };
    Badge { tier, color }
}

/// Three-color palette for the tiers seeded placeholders carry.
pub fn seeded_badge(tier: Tier) -> Badge {
    let color = match tier {
        Tier::Good => GREEN,
        Tier::Moderate => ORANGE,
        _ => RED,
    };
    Badge { tier, color }
}

/// Atmospheric CO₂ bands backing the badge heuristic.
pub fn heuristic_badge(co2_ppm: f64) -> Badge {
    if co2_ppm < 400.0 {
        Badge {
            tier: Tier::Excellent,
            color: GREEN,
        }
    } else if co2_ppm < 420.0 {
        Badge {
            tier: Tier::Good,
            color: LIGHT_GREEN,
        }
    } else if co2_ppm < 450.0 {
        Badge {
            tier: Tier::Moderate,
            color: ORANGE,
        }
    } else if co2_ppm < 500.0 {
        Badge {
            tier: Tier::Unhealthy,
            color: RED,
        }
    } else {
        Badge {
            tier: Tier::VeryUnhealthy,
            color: PURPLE,
        }
    }
}

/// Palette for satellite observation quality.
pub fn tempo_badge(quality: Tier) -> Badge {
    let color = match quality {
        Tier::Excellent => GREEN,
        Tier::Good => LIGHT_GREEN,
        Tier::Moderate => AMBER,
        _ => DEEP_ORANGE,
    };
    Badge {
        tier: quality,
        color,
    }
}
