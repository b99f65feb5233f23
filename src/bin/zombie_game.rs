// Runs the alias, shallow copy and deep copy demonstrations in order.
// Narration goes to stdout; tracing diagnostics go to stderr.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use zombie_copy_demo::demo;
use zombie_copy_demo::{ConsoleNarrator, DemoConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DemoConfig::load_from_env().context("Failed to load demo config")?;
    tracing::debug!(?config, "starting demonstrations");

    let mut narrator = ConsoleNarrator::new();
    demo::run_all(&config, &mut narrator);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("zombie_copy_demo=warn,zombie_game=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
