use anyhow::Result;
use pacman_engine::app::{App, Settings};
use pacman_engine::formatter::TickTimer;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Setup tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_timer(TickTimer)
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new(Settings::from_env()?)?;
    while app.run()? {}

    info!("Exiting");
    Ok(())
}
