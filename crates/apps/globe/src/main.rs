use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::context::{AppConfig, AppContext};
use crate::orchestrator::Orchestrator;

mod context;
mod orchestrator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Environmental globe data pipeline")]
struct Args {
    /// OpenWeatherMap API key (the demo key keeps the feed in fallback mode)
    #[arg(long, default_value = "demo")]
    owm_api_key: String,

    /// CORS relay prefix for the air quality feed
    #[arg(long, default_value = feeds::relay::DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Skip the network entirely and simulate every feed
    #[arg(long)]
    offline: bool,

    /// Seconds between climate summary recomputations
    #[arg(long, default_value_t = 30)]
    refresh_secs: u64,

    /// Cap on registered fire detections per day
    #[arg(long, default_value_t = 200)]
    max_fires: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig {
        owm_api_key: args.owm_api_key,
        relay_url: args.relay_url,
        offline: args.offline,
        refresh: Duration::from_secs(args.refresh_secs),
        max_fires: args.max_fires,
    };

    let ctx = Arc::new(AppContext::new(config)?);
    let orchestrator = Arc::new(Orchestrator::new(ctx));

    let pipeline = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            if let Err(err) = orchestrator.run().await {
                error!(%err, "pipeline failed");
            }
        })
    };

    // A headless stand-in for the render loop: the camera flight and
    // marker scaling still advance at 60 Hz.
    let ticker = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(16));
            loop {
                interval.tick().await;
                orchestrator.frame_tick(0.016);
            }
        })
    };

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    orchestrator.shutdown();
    pipeline.abort();
    ticker.abort();
    Ok(())
}
