use foundation::time::Time;
use serde::Deserialize;
use stations::{Metric, Reading, WeatherObs};
use synthesis::{FakeGenerator, classify};

use crate::error::FeedError;
use crate::relay;

pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainConditions,
    #[serde(default)]
    wind: Wind,
    #[serde(default)]
    clouds: Clouds,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainConditions {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Wind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Clouds {
    #[serde(default)]
    all: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(default)]
    description: String,
}

/// What a weather fetch resolved to. `observation` is present only when
/// real data came back; the readings are always populated.
#[derive(Debug)]
pub struct WeatherFetch {
    pub observation: Option<WeatherObs>,
    pub readings: Vec<(Metric, Reading)>,
}

/// Current conditions per point from OpenWeatherMap (metric units).
pub struct WeatherFeed {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    generator: FakeGenerator,
}

impl WeatherFeed {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: OPENWEATHER_URL.to_owned(),
            api_key: api_key.into(),
            generator: FakeGenerator::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch conditions for one point. On any failure the result keeps
    /// no observation and carries one simulated temperature reading.
    pub async fn fetch(&self, lat_deg: f64, lon_deg: f64, at: Time) -> WeatherFetch {
        match self.try_fetch(lat_deg, lon_deg, at).await {
            Ok(fetch) => fetch,
            Err(err) => {
                tracing::debug!(lat_deg, lon_deg, %err, "weather fetch failed");
                WeatherFetch {
                    observation: None,
                    readings: vec![(
                        Metric::Temperature,
                        self.generator
                            .generate(lat_deg, lon_deg, Metric::Temperature, at),
                    )],
                }
            }
        }
    }

    async fn try_fetch(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        at: Time,
    ) -> Result<WeatherFetch, FeedError> {
        let request = self.client.get(&self.base_url).query(&[
            ("lat", lat_deg.to_string()),
            ("lon", lon_deg.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_owned()),
        ]);
        let response = relay::send_checked(request).await?;
        let payload: WeatherResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Payload(e.to_string()))?;
        Ok(resolve(payload, at))
    }
}

fn resolve(payload: WeatherResponse, at: Time) -> WeatherFetch {
    let description = payload
        .weather
        .first()
        .map(|c| c.description.clone())
        .unwrap_or_default();

    let observation = WeatherObs {
        temperature_c: payload.main.temp,
        feels_like_c: payload.main.feels_like,
        humidity_pct: payload.main.humidity,
        pressure_hpa: payload.main.pressure,
        wind_speed_ms: payload.wind.speed,
        clouds_pct: payload.clouds.all,
        description,
    };

    let readings = vec![
        (
            Metric::Temperature,
            Reading::real(
                payload.main.temp,
                "°C",
                classify(Metric::Temperature, payload.main.temp),
                at,
            ),
        ),
        (
            Metric::Humidity,
            Reading::real(
                payload.main.humidity,
                "%",
                classify(Metric::Humidity, payload.main.humidity),
                at,
            ),
        ),
        (
            Metric::Pressure,
            Reading::real(
                payload.main.pressure,
                "hPa",
                classify(Metric::Pressure, payload.main.pressure),
                at,
            ),
        ),
    ];

    WeatherFetch {
        observation: Some(observation),
        readings,
    }
}
