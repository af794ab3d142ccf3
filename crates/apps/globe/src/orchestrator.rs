use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use feeds::{EnrichmentKind, TEMPO_POLLUTANTS, WeatherFetch, in_coverage, simulated_fires};
use overlay::TooltipContent;
use parking_lot::Mutex;
use stations::{Category, ClimateSummary, GeoPoint, Metric, Reading, RegistryError, seeds};
use tracing::{debug, info, warn};

use crate::context::AppContext;

const SCENE_RETRY: Duration = Duration::from_secs(1);
// Inter-request spacing keeps the fetch loops under upstream rate limits.
const STATION_DELAY: Duration = Duration::from_millis(200);
const CITY_DELAY: Duration = Duration::from_millis(300);

/// Startup progress. Transitions only move forward; enrichment that
/// partially fails leaves simulated readings behind rather than rolling
/// the phase back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Init,
    BasicGlobeReady,
    EnrichmentInFlight,
    Enriched,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::BasicGlobeReady => "basic globe ready",
            Phase::EnrichmentInFlight => "enrichment in flight",
            Phase::Enriched => "enriched",
        }
    }
}

/// Drives the pipeline: seeds the globe synchronously, walks the
/// enrichment passes serially, then keeps the climate summary fresh for
/// the rest of the process lifetime. Also the surface the UI host calls
/// into for metric toggles, hover, click, and the per-frame tick.
pub struct Orchestrator {
    ctx: Arc<AppContext>,
    phase: Mutex<Phase>,
}

impl Orchestrator {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            phase: Mutex::new(Phase::Init),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    fn advance_phase(&self, to: Phase) {
        {
            let mut phase = self.phase.lock();
            if to <= *phase {
                return;
            }
            *phase = to;
        }
        self.ctx.bus.lock().emit("phase", to.label());
        info!(phase = to.label(), "phase changed");
    }

    /// Full process lifetime: startup, enrichment, then the periodic
    /// climate refresh, which never returns.
    pub async fn run(&self) -> Result<(), RegistryError> {
        self.start().await?;
        self.climate_refresh_loop().await;
        Ok(())
    }

    /// Startup through the end of enrichment.
    pub async fn start(&self) -> Result<(), RegistryError> {
        self.build_basic_globe()?;
        self.enrich().await;
        Ok(())
    }

    /// Synchronous scene setup: seed the atlases into the registry, copy
    /// the simulated catalog onto the stations, and raise the default
    /// overlay.
    pub fn build_basic_globe(&self) -> Result<(), RegistryError> {
        let ctx = &self.ctx;
        let count = {
            let mut registry = ctx.registry.write();
            for point in seeds::exploration_points()? {
                registry.register(point);
            }
            for point in seeds::monitoring_stations()? {
                registry.register(point);
            }
            for point in seeds::tempo_cities()? {
                registry.register(point);
            }
            for (name, per_metric) in ctx.catalog.stations() {
                for (metric, reading) in per_metric {
                    registry.seed_metric(name, *metric, reading.clone())?;
                }
            }
            registry.len()
        };

        ctx.metrics
            .lock()
            .set_gauge("points.registered", count as i64);
        self.rebuild_overlay();

        info!(points = count, "basic globe ready");
        self.advance_phase(Phase::BasicGlobeReady);
        Ok(())
    }

    /// The async enrichment passes, in order: per-point air quality and
    /// weather, then the fire layer, then the satellite cities. Waits
    /// for the scene if called before `build_basic_globe` has run.
    pub async fn enrich(&self) {
        while self.phase() < Phase::BasicGlobeReady {
            debug!("scene not ready, deferring enrichment");
            tokio::time::sleep(SCENE_RETRY).await;
        }
        self.advance_phase(Phase::EnrichmentInFlight);

        self.enrich_stations().await;
        self.wildfire_pass().await;
        self.satellite_pass().await;

        self.advance_phase(Phase::Enriched);
    }

    async fn enrich_stations(&self) {
        let ctx = &self.ctx;
        let names = ctx.registry.read().names();
        {
            let mut queue = ctx.queue.lock();
            for name in &names {
                queue.submit(name.clone(), EnrichmentKind::AirQuality);
                queue.submit(name.clone(), EnrichmentKind::Weather);
            }
        }

        loop {
            let Some(task) = ctx.queue.lock().pop_next() else {
                break;
            };
            match task.kind {
                EnrichmentKind::AirQuality => self.enrich_air(&task.point_name).await,
                EnrichmentKind::Weather => {
                    self.enrich_weather(&task.point_name).await;
                    tokio::time::sleep(STATION_DELAY).await;
                }
                EnrichmentKind::Satellite => self.enrich_city(&task.point_name).await,
            }
        }
    }

    async fn enrich_air(&self, name: &str) {
        let ctx = &self.ctx;
        let Some((lat_deg, lon_deg)) = self.point_coordinates(name) else {
            return;
        };

        let at = ctx.now();
        let readings = if ctx.config.offline {
            vec![(
                Metric::Co2,
                ctx.generator.generate(lat_deg, lon_deg, Metric::Co2, at),
            )]
        } else {
            ctx.air.fetch(lat_deg, lon_deg, at).await
        };

        self.record_readings(name, readings, "air");
    }

    async fn enrich_weather(&self, name: &str) {
        let ctx = &self.ctx;
        let Some((lat_deg, lon_deg)) = self.point_coordinates(name) else {
            return;
        };

        let at = ctx.now();
        let fetch = if ctx.config.offline {
            WeatherFetch {
                observation: None,
                readings: vec![(
                    Metric::Temperature,
                    ctx.generator
                        .generate(lat_deg, lon_deg, Metric::Temperature, at),
                )],
            }
        } else {
            ctx.weather.fetch(lat_deg, lon_deg, at).await
        };

        if let Some(observation) = fetch.observation {
            if let Err(err) = ctx.registry.write().attach_weather(name, observation) {
                debug!(name, %err, "weather observation dropped");
                return;
            }
        }
        self.record_readings(name, fetch.readings, "weather");
    }

    /// Registers the day's fire detections as their own points.
    async fn wildfire_pass(&self) {
        let ctx = &self.ctx;
        let date = today();
        let fires = if ctx.config.offline {
            simulated_fires(&date, ctx.config.max_fires)
        } else {
            ctx.fires.fetch(&date).await
        };

        let mut registered = 0usize;
        {
            let mut registry = ctx.registry.write();
            for fire in &fires {
                let point = match GeoPoint::new(
                    fire.marker_name(),
                    fire.lat_deg,
                    fire.lon_deg,
                    Category::Fire,
                ) {
                    Ok(point) => point.with_caption(fire.caption()),
                    Err(err) => {
                        debug!(%err, "fire detection skipped");
                        continue;
                    }
                };
                registry.register(point);
                registered += 1;
            }
        }

        ctx.metrics
            .lock()
            .set_gauge("fires.registered", registered as i64);
        ctx.bus.lock().emit(
            "enrichment",
            format!("{registered} active fires on the globe"),
        );
        self.rebuild_overlay();
        info!(date = date.as_str(), registered, "fire layer populated");
    }

    /// Walks the coverage cities and attaches satellite observations.
    async fn satellite_pass(&self) {
        let ctx = &self.ctx;
        let cities = match seeds::tempo_cities() {
            Ok(cities) => cities,
            Err(err) => {
                warn!(%err, "satellite city list unavailable");
                return;
            }
        };

        {
            let mut queue = ctx.queue.lock();
            for city in &cities {
                if !in_coverage(city.lat_deg(), city.lon_deg()) {
                    debug!(city = city.name(), "outside satellite coverage");
                    continue;
                }
                queue.submit(city.name(), EnrichmentKind::Satellite);
            }
        }

        loop {
            let Some(task) = ctx.queue.lock().pop_next() else {
                break;
            };
            self.enrich_city(&task.point_name).await;
            tokio::time::sleep(CITY_DELAY).await;
        }
    }

    async fn enrich_city(&self, name: &str) {
        let ctx = &self.ctx;
        let Some((lat_deg, lon_deg)) = self.point_coordinates(name) else {
            return;
        };

        let date = today();
        let at = ctx.now();
        for pollutant in TEMPO_POLLUTANTS {
            let fetched = if ctx.config.offline {
                ctx.tempo
                    .simulated_observation(pollutant, lat_deg, lon_deg, at)
            } else {
                ctx.tempo.fetch(pollutant, lat_deg, lon_deg, &date, at).await
            };
            let obs = match fetched {
                Ok(obs) => obs,
                Err(err) => {
                    warn!(name, pollutant = pollutant.key(), %err, "granule unusable");
                    ctx.metrics.lock().inc_counter("feeds.tempo.corrupt", 1);
                    continue;
                }
            };

            // Granule values are synthesized per location, so they land
            // as simulated readings; the ozone observation additionally
            // attaches whole for the tooltip and the climate summary.
            let reading = Reading::simulated(obs.value, obs.unit.clone(), obs.quality, at);
            let written = {
                let mut registry = ctx.registry.write();
                match registry.update_metric(name, pollutant, reading) {
                    Ok(()) if pollutant == Metric::Ozone => registry.attach_tempo(name, obs),
                    other => other,
                }
            };
            if let Err(err) = written {
                debug!(name, %err, "satellite write dropped");
                return;
            }
        }

        ctx.metrics.lock().inc_counter("feeds.tempo.cities", 1);
        ctx.bus
            .lock()
            .emit("enrichment", format!("{name}: satellite data attached"));
        self.refresh_overlay(name);
    }

    /// Recomputes the climate summary on a fixed cadence, forever.
    async fn climate_refresh_loop(&self) {
        loop {
            tokio::time::sleep(self.ctx.config.refresh).await;
            self.refresh_climate();
        }
    }

    /// One summary recomputation. Public so a host embedding the
    /// pipeline can refresh on its own cadence.
    pub fn refresh_climate(&self) -> Option<ClimateSummary> {
        let ctx = &self.ctx;
        let summary = {
            let registry = ctx.registry.read();
            ClimateSummary::compute(&registry)
        };

        let Some(summary) = summary else {
            debug!("no temperature samples yet, climate summary skipped");
            return None;
        };

        ctx.metrics.lock().set_gauge(
            "climate.temperature_samples",
            summary.temperature_samples as i64,
        );
        ctx.bus.lock().emit(
            "climate",
            format!(
                "global {:.1}°C ({:.1}°C to {:.1}°C), humidity {:.0}%, wind {:.1} km/h",
                summary.avg_temp_c,
                summary.min_temp_c,
                summary.max_temp_c,
                summary.avg_humidity_pct,
                summary.avg_wind_kmh
            ),
        );
        info!(
            samples = summary.temperature_samples,
            avg_temp_c = summary.avg_temp_c,
            "climate summary refreshed"
        );
        Some(summary)
    }

    /// Switches the metric overlay; reselecting the active metric turns
    /// the overlay off. Either way the queued enrichment was for the
    /// previous mode, so it is cancelled.
    pub fn toggle_display_metric(&self, metric: Metric) -> Option<Metric> {
        let ctx = &self.ctx;
        let now_active = {
            let mut active = ctx.active_metric.lock();
            *active = if *active == Some(metric) {
                None
            } else {
                Some(metric)
            };
            *active
        };

        match now_active {
            Some(metric) => {
                let registry = ctx.registry.read();
                ctx.overlay.lock().rebuild(&registry, metric);
            }
            None => ctx.overlay.lock().clear(),
        }

        let cancelled = ctx.queue.lock().cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "queued enrichment obsoleted by display switch");
        }
        ctx.bus.lock().emit(
            "display",
            match now_active {
                Some(metric) => format!("{} overlay on", metric.title()),
                None => "overlay off".to_string(),
            },
        );
        now_active
    }

    /// Tooltip content for a hovered point.
    pub fn on_point_hover(&self, name: &str) -> Option<TooltipContent> {
        let registry = self.ctx.registry.read();
        registry.get(name).map(TooltipContent::for_entry)
    }

    /// Starts the focus flight toward a clicked point.
    pub fn on_point_click(&self, name: &str) -> Result<(), RegistryError> {
        let ctx = &self.ctx;
        let position = {
            let registry = ctx.registry.read();
            let entry = registry
                .get(name)
                .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
            entry.point.position()
        };

        let now = ctx.frame.lock().time;
        ctx.camera.lock().focus_on(position, now);
        ctx.bus.lock().emit("camera", format!("flying to {name}"));
        Ok(())
    }

    /// Advances the per-frame state: camera flight, then marker scale
    /// against the new camera distance. Never touches the network.
    pub fn frame_tick(&self, dt_s: f64) {
        let ctx = &self.ctx;
        let frame = {
            let mut frame = ctx.frame.lock();
            *frame = frame.advance(dt_s);
            *frame
        };

        let distance = {
            let mut camera = ctx.camera.lock();
            camera.update(frame.time);
            camera.distance()
        };
        ctx.overlay.lock().retarget(distance);
    }

    /// Teardown: cancel whatever enrichment is still queued.
    pub fn shutdown(&self) {
        let cancelled = self.ctx.queue.lock().cancel_all();
        info!(cancelled, "orchestrator shut down");
    }

    fn point_coordinates(&self, name: &str) -> Option<(f64, f64)> {
        let registry = self.ctx.registry.read();
        let entry = registry.get(name)?;
        Some((entry.point.lat_deg(), entry.point.lon_deg()))
    }

    fn record_readings(&self, name: &str, readings: Vec<(Metric, Reading)>, feed: &'static str) {
        let ctx = &self.ctx;
        let mut real = 0u64;
        let mut simulated = 0u64;
        {
            let mut registry = ctx.registry.write();
            for (metric, reading) in readings {
                let is_real = reading.is_real();
                if let Err(err) = registry.update_metric(name, metric, reading) {
                    debug!(name, %err, "reading dropped");
                    return;
                }
                if is_real {
                    real += 1;
                } else {
                    simulated += 1;
                }
            }
        }

        if real > 0 || simulated > 0 {
            let mut metrics = ctx.metrics.lock();
            if real > 0 {
                metrics.inc_counter(format!("feeds.{feed}.real"), real);
            }
            if simulated > 0 {
                metrics.inc_counter(format!("feeds.{feed}.simulated"), simulated);
            }
        }
        self.refresh_overlay(name);
    }

    fn rebuild_overlay(&self) {
        let ctx = &self.ctx;
        let Some(metric) = *ctx.active_metric.lock() else {
            return;
        };
        let registry = ctx.registry.read();
        ctx.overlay.lock().rebuild(&registry, metric);
    }

    fn refresh_overlay(&self, name: &str) {
        let ctx = &self.ctx;
        let Some(metric) = *ctx.active_metric.lock() else {
            return;
        };
        let registry = ctx.registry.read();
        ctx.overlay.lock().refresh(&registry, name, metric);
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use stations::Metric;

    use super::{Orchestrator, Phase};
    use crate::context::{AppConfig, AppContext};

    fn offline() -> (Arc<AppContext>, Orchestrator) {
        let config = AppConfig {
            offline: true,
            ..AppConfig::default()
        };
        let ctx = Arc::new(AppContext::new(config).unwrap());
        let orchestrator = Orchestrator::new(ctx.clone());
        (ctx, orchestrator)
    }

    #[tokio::test(start_paused = true)]
    async fn offline_startup_reaches_enriched() {
        let (ctx, orchestrator) = offline();
        assert_eq!(orchestrator.phase(), Phase::Init);

        orchestrator.start().await.unwrap();
        assert_eq!(orchestrator.phase(), Phase::Enriched);

        let registry = ctx.registry.read();
        // 14 exploration + 25 stations + 5 cities, plus the simulated fires.
        assert!(registry.len() > 44);
        assert!(registry.names().iter().any(|n| n.starts_with("Fire (")));

        let station = registry.get("Station - London").unwrap();
        assert!(station.has_seeded_data());
        assert!(station.fetched_reading(Metric::Co2).is_some());
        assert!(station.fetched_reading(Metric::Temperature).is_some());

        let city = registry.get("TEMPO - Los Angeles").unwrap();
        assert_eq!(city.tempo.as_ref().unwrap().pollutant, Metric::Ozone);
        assert!(city.fetched_reading(Metric::Aerosols).is_some());

        // Every registered point carries a marker for the default metric.
        assert_eq!(ctx.overlay.lock().len(), registry.len());

        let events = ctx.bus.lock().drain();
        let phases: Vec<&str> = events
            .iter()
            .filter(|e| e.kind == "phase")
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            phases,
            vec!["basic globe ready", "enrichment in flight", "enriched"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn enrichment_defers_until_the_scene_exists() {
        let (_ctx, orchestrator) = offline();
        let orchestrator = Arc::new(orchestrator);

        let task = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.enrich().await })
        };

        // The spawned task can only spin on its retry delay for now.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(orchestrator.phase(), Phase::Init);

        orchestrator.build_basic_globe().unwrap();
        task.await.unwrap();
        assert_eq!(orchestrator.phase(), Phase::Enriched);
    }

    #[tokio::test(start_paused = true)]
    async fn phases_only_move_forward() {
        let (_ctx, orchestrator) = offline();
        orchestrator.start().await.unwrap();
        assert_eq!(orchestrator.phase(), Phase::Enriched);

        orchestrator.build_basic_globe().unwrap();
        assert_eq!(orchestrator.phase(), Phase::Enriched);
    }

    #[tokio::test(start_paused = true)]
    async fn toggling_the_active_metric_flips_the_overlay() {
        let (ctx, orchestrator) = offline();
        orchestrator.build_basic_globe().unwrap();
        assert!(!ctx.overlay.lock().is_empty());

        assert_eq!(orchestrator.toggle_display_metric(Metric::Co2), None);
        assert!(ctx.overlay.lock().is_empty());

        assert_eq!(
            orchestrator.toggle_display_metric(Metric::Temperature),
            Some(Metric::Temperature)
        );
        let overlay = ctx.overlay.lock();
        assert_eq!(overlay.len(), ctx.registry.read().len());
        assert!(
            overlay
                .snapshot()
                .iter()
                .all(|m| m.title == Metric::Temperature.title())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn display_switch_cancels_queued_enrichment() {
        let (ctx, orchestrator) = offline();
        orchestrator.build_basic_globe().unwrap();

        ctx.queue
            .lock()
            .submit("Station - London", feeds::EnrichmentKind::Weather);
        orchestrator.toggle_display_metric(Metric::Humidity);
        assert!(ctx.queue.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn hover_and_click_use_the_registry() {
        let (ctx, orchestrator) = offline();
        orchestrator.build_basic_globe().unwrap();

        let tooltip = orchestrator.on_point_hover("Station - London").unwrap();
        assert_eq!(tooltip.name, "Station - London");
        assert!(orchestrator.on_point_hover("nowhere").is_none());

        assert!(orchestrator.on_point_click("nowhere").is_err());
        orchestrator.on_point_click("Station - London").unwrap();
        assert!(ctx.camera.lock().is_flying());

        // Enough frames to land the one-second flight.
        for _ in 0..70 {
            orchestrator.frame_tick(1.0 / 60.0);
        }
        let camera = ctx.camera.lock();
        assert!(!camera.is_flying());

        let expected = (camera.distance() / overlay::BASE_DISTANCE).clamp(0.1, 1.0);
        assert!((ctx.overlay.lock().scale() - expected).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn climate_summary_appears_with_enrichment() {
        let (_ctx, orchestrator) = offline();
        orchestrator.build_basic_globe().unwrap();
        // Offline runs attach no weather, so the summary waits for the
        // satellite ozone observations.
        assert!(orchestrator.refresh_climate().is_none());

        orchestrator.enrich().await;
        let summary = orchestrator.refresh_climate().unwrap();
        assert_eq!(summary.weather_samples, 0);
        assert_eq!(summary.temperature_samples, 5);
    }
}
