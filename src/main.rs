mod app;
mod state;
mod ui;

use app::LaunchDashApp;
use eframe::egui;
use launch_dash::config::DashboardConfig;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env()?;

    // Fetch once up front; a failure leaves an empty dashboard with the
    // error in the status bar.
    let mut state = AppState::new(&config);
    state.load(config.source.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Dash – SpaceX Launch Records",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
