use anyhow::Result;
use clap::Parser;
use tracing::event;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use bounce::app::App;
use bounce::config::Config;
use bounce::constants::LOOP_TIME;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bounce=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::parse().clamped();
    let mut app = App::new(config)?;

    event!(
        tracing::Level::INFO,
        "Starting game loop ({:.3}ms)",
        LOOP_TIME.as_secs_f32() * 1000.0
    );

    loop {
        if !app.run() {
            break;
        }
    }

    Ok(())
}
