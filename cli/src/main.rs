mod sim;
mod term;

use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime};

use totem_core::storage::db::RedbStore;
use totem_core::types::BoothConfig;
use totem_core::{Booth, Event, Services};

const DATA_DIR: &str = "totem-data";
const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// Covers one capture cycle plus the full share window, with slack.
const DEMO_TICKS: u32 = 48;

fn main() -> totem_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data_dir = Path::new(DATA_DIR);
    let config = BoothConfig::load(&BoothConfig::path(data_dir))?;
    for issue in config.validate() {
        tracing::warn!(%issue, "invalid configuration value, falling back to default");
    }
    let config = config.with_defaults_for_invalid();

    let store = RedbStore::open(&data_dir.join("session.redb"))?;
    let services = Services {
        camera: Box::new(sim::SimCamera::new()),
        encoders: Box::new(sim::SimEncoderFactory),
        codes: Box::new(term::TermCodeRenderer),
        downloads: Box::new(sim::FileDownloadSink::new(data_dir.join("downloads"))),
        presenter: Box::new(term::TermPresenter::new()),
    };

    let mut booth = Booth::new(config, services, Box::new(store));
    booth.start(SystemTime::now());

    // Scripted kiosk run: one trigger press, then ticks until the share
    // code has expired.
    booth.handle(Event::CaptureRequested, SystemTime::now());
    for _ in 0..DEMO_TICKS {
        thread::sleep(TICK_INTERVAL);
        booth.handle(Event::Tick, SystemTime::now());
    }

    Ok(())
}
