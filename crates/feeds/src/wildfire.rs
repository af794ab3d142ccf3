use synthesis::Sampler;

use crate::error::FeedError;
use crate::relay;

pub const FIRMS_URL: &str =
    "https://firms.modaps.eosdis.nasa.gov/api/country/csv/active_fire/modis_c6/global/1";

/// One active-fire detection.
#[derive(Debug, Clone, PartialEq)]
pub struct FirePoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub brightness_k: f64,
    pub confidence_pct: f64,
}

impl FirePoint {
    /// Registry name; coordinates keep detections distinct since the
    /// feed carries no identifiers.
    pub fn marker_name(&self) -> String {
        format!("Fire ({:.1}, {:.1})", self.lat_deg, self.lon_deg)
    }

    pub fn caption(&self) -> String {
        format!(
            "Brightness: {:.1} K | Confidence: {:.0}%",
            self.brightness_k, self.confidence_pct
        )
    }
}

/// Daily active-fire detections from NASA FIRMS.
pub struct WildfireFeed {
    client: reqwest::Client,
    base_url: String,
    max_fires: usize,
}

impl WildfireFeed {
    pub fn new(client: reqwest::Client, max_fires: usize) -> Self {
        Self {
            client,
            base_url: FIRMS_URL.to_owned(),
            max_fires,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Detections for one day (`date` is `YYYY-MM-DD`). Transport or
    /// decode failure substitutes the date-seeded simulated set, so the
    /// fire layer is never empty because the feed was down.
    pub async fn fetch(&self, date: &str) -> Vec<FirePoint> {
        match self.try_fetch(date).await {
            Ok(fires) => fires,
            Err(err) => {
                tracing::warn!(date, %err, "fire feed failed, simulating detections");
                simulated_fires(date, self.max_fires)
            }
        }
    }

    async fn try_fetch(&self, date: &str) -> Result<Vec<FirePoint>, FeedError> {
        let url = format!("{}/{date}", self.base_url);
        let response = relay::send_checked(self.client.get(&url)).await?;
        let text = response
            .text()
            .await
            .map_err(|e| FeedError::Payload(e.to_string()))?;
        Ok(parse_firms_csv(&text, self.max_fires))
    }
}

/// Parse the FIRMS CSV: header skipped, blank lines skipped, rows with
/// fewer than 4 columns or unparseable numbers skipped. Never fails.
pub fn parse_firms_csv(text: &str, max_fires: usize) -> Vec<FirePoint> {
    let mut fires = Vec::new();
    for line in text.lines().skip(1) {
        if fires.len() >= max_fires {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() < 4 {
            continue;
        }
        let (Ok(lat_deg), Ok(lon_deg), Ok(brightness_k), Ok(confidence_pct)) = (
            columns[0].parse::<f64>(),
            columns[1].parse::<f64>(),
            columns[2].parse::<f64>(),
            columns[3].parse::<f64>(),
        ) else {
            continue;
        };

        fires.push(FirePoint {
            lat_deg,
            lon_deg,
            brightness_k,
            confidence_pct,
        });
    }
    fires
}

/// Deterministic stand-in detections for a day the feed was
/// unreachable. The date seeds the stream, so every client simulates
/// the same fires for the same day.
pub fn simulated_fires(date: &str, max_fires: usize) -> Vec<FirePoint> {
    let mut s = Sampler::keyed(&format!("fires-{date}"));
    let count = (s.next_f64() * 20.0).floor() as usize + 5;

    let mut fires = Vec::with_capacity(count.min(max_fires));
    for _ in 0..count.min(max_fires) {
        let lat_deg = (s.next_f64() - 0.5) * 180.0;
        let lon_deg = (s.next_f64() - 0.5) * 360.0;
        let confidence_pct = (s.next_f64() * 100.0 * 10.0).round() / 10.0;
        let brightness_k = ((300.0 + s.next_f64() * 200.0) * 10.0).round() / 10.0;
        fires.push(FirePoint {
            lat_deg,
            lon_deg,
            brightness_k,
            confidence_pct,
        });
    }
    fires
}
