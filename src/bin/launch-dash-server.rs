use anyhow::{Context, Result};

use launch_dash::config::DashboardConfig;
use launch_dash::dashboard::Dashboard;
use launch_dash::data::loader;
use launch_dash::server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env().context("reading configuration")?;

    // The blocking HTTP client must not run on a runtime worker.
    let source = config.source.clone();
    let table = tokio::task::spawn_blocking(move || loader::load_table(&source))
        .await
        .context("dataset loader task panicked")?
        .with_context(|| format!("loading launches from {}", config.source))?;

    let state = server::create_state(Dashboard::new(table, config.slider));

    println!();
    println!("Launch Dash");
    println!("   URL: http://{}", config.addr);
    println!("   API: http://{}/api/health", config.addr);
    println!();
    println!("   Press Ctrl+C to stop");
    println!();

    server::serve(config.addr, state)
        .await
        .with_context(|| format!("serving on {}", config.addr))
}
