use foundation::time::Time;

/// Environmental metric an annotation can display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Co2,
    Temperature,
    Humidity,
    Pressure,
    Ozone,
    Pm25,
    No2,
    Hcho,
    Aerosols,
}

impl Metric {
    /// Every supported metric, in display order.
    pub const ALL: [Metric; 9] = [
        Metric::Co2,
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::Ozone,
        Metric::Pm25,
        Metric::No2,
        Metric::Hcho,
        Metric::Aerosols,
    ];

    /// The metrics every seeded station carries from the start.
    pub const CORE: [Metric; 5] = [
        Metric::Co2,
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::Ozone,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Co2 => "co2",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
            Metric::Ozone => "ozone",
            Metric::Pm25 => "pm25",
            Metric::No2 => "no2",
            Metric::Hcho => "hcho",
            Metric::Aerosols => "aerosols",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Human title shown on marker headers.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Co2 => "CO₂ Levels",
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Pressure => "Pressure",
            Metric::Ozone => "Ozone",
            Metric::Pm25 => "PM2.5",
            Metric::No2 => "NO₂",
            Metric::Hcho => "Formaldehyde",
            Metric::Aerosols => "Aerosols",
        }
    }

    /// Unit the generator attaches to simulated readings.
    pub fn simulated_unit(&self) -> &'static str {
        match self {
            Metric::Co2 => "ppm",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Pressure => "hPa",
            Metric::Ozone => "ppb",
            Metric::Pm25 => "µg/m³",
            Metric::No2 => "ppb",
            Metric::Hcho => "ppb",
            Metric::Aerosols => "AOD",
        }
    }
}

/// Qualitative bucket a reading falls into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Moderate => "Moderate",
            Tier::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            Tier::Unhealthy => "Unhealthy",
            Tier::VeryUnhealthy => "Very Unhealthy",
        }
    }
}

/// Where a reading came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Source {
    Real,
    Simulated,
}

/// One scalar measurement. Immutable once created; a re-fetch produces a
/// replacement rather than editing in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub unit: String,
    pub tier: Tier,
    pub source: Source,
    pub timestamp: Time,
}

impl Reading {
    pub fn real(value: f64, unit: impl Into<String>, tier: Tier, timestamp: Time) -> Self {
        Self {
            value,
            unit: unit.into(),
            tier,
            source: Source::Real,
            timestamp,
        }
    }

    pub fn simulated(value: f64, unit: impl Into<String>, tier: Tier, timestamp: Time) -> Self {
        Self {
            value,
            unit: unit.into(),
            tier,
            source: Source::Simulated,
            timestamp,
        }
    }

    pub fn is_real(&self) -> bool {
        self.source == Source::Real
    }
}
