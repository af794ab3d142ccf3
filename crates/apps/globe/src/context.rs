use std::time::Duration;

use feeds::{AirQualityFeed, EnrichmentQueue, TempoFeed, WeatherFeed, WildfireFeed};
use foundation::time::Time;
use overlay::OverlayLayer;
use parking_lot::{Mutex, RwLock};
use runtime::metrics::Metrics;
use runtime::{EventBus, Frame};
use stations::{Metric, PointRegistry, RegistryError, seeds};
use synthesis::{FakeGenerator, SimCatalog};
use view::FocusCamera;

/// Launch configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub owm_api_key: String,
    pub relay_url: String,
    pub offline: bool,
    pub refresh: Duration,
    pub max_fires: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owm_api_key: "demo".to_string(),
            relay_url: feeds::relay::DEFAULT_RELAY_URL.to_string(),
            offline: false,
            refresh: Duration::from_secs(30),
            max_fires: 200,
        }
    }
}

/// Everything the pipeline shares: the registry, the layers that read
/// it, and the feed clients enrichment runs through.
///
/// The registry sits behind a reader-writer lock and every mutation
/// happens under the write lock, so a reading is fully written before
/// any layer can see it. None of the locks may be held across an await.
pub struct AppContext {
    pub config: AppConfig,
    pub registry: RwLock<PointRegistry>,
    pub catalog: SimCatalog,
    pub generator: FakeGenerator,
    pub air: AirQualityFeed,
    pub weather: WeatherFeed,
    pub fires: WildfireFeed,
    pub tempo: TempoFeed,
    pub overlay: Mutex<OverlayLayer>,
    pub camera: Mutex<FocusCamera>,
    pub frame: Mutex<Frame>,
    pub active_metric: Mutex<Option<Metric>>,
    pub queue: Mutex<EnrichmentQueue>,
    pub bus: Mutex<EventBus>,
    pub metrics: Mutex<Metrics>,
    started: tokio::time::Instant,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::new();
        let generator = FakeGenerator::new();
        let catalog = SimCatalog::for_stations(
            &generator,
            &seeds::monitoring_stations()?,
            Time::ZERO,
        );

        Ok(Self {
            registry: RwLock::new(PointRegistry::new()),
            catalog,
            generator,
            air: AirQualityFeed::new(client.clone(), config.relay_url.as_str()),
            weather: WeatherFeed::new(client.clone(), config.owm_api_key.as_str()),
            fires: WildfireFeed::new(client.clone(), config.max_fires),
            tempo: TempoFeed::new(client),
            overlay: Mutex::new(OverlayLayer::new()),
            camera: Mutex::new(FocusCamera::new()),
            frame: Mutex::new(Frame::start()),
            // CO₂ is the overlay shown on load; toggling it again turns
            // the overlay off.
            active_metric: Mutex::new(Some(Metric::Co2)),
            queue: Mutex::new(EnrichmentQueue::new()),
            bus: Mutex::new(EventBus::new()),
            metrics: Mutex::new(Metrics::new()),
            config,
            started: tokio::time::Instant::now(),
        })
    }

    /// Process-relative clock readings are stamped with.
    pub fn now(&self) -> Time {
        Time(self.started.elapsed().as_secs_f64())
    }
}
