use launch_dash::config::{DashboardConfig, SliderConfig};
use launch_dash::dashboard::{ChartSet, Dashboard};
use launch_dash::data::filter::{PayloadRange, SiteSelection};
use launch_dash::data::loader::{self, DataSource};
use launch_dash::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current table came from (used by "Reload").
    pub source: DataSource,

    pub slider: SliderConfig,

    /// Loaded dashboard (None until a table loads).
    pub dashboard: Option<Dashboard>,

    /// Dropdown value.
    pub site: SiteSelection,

    /// Slider value.
    pub payload: PayloadRange,

    /// Charts for the current control values (cached).
    pub charts: Option<ChartSet>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            source: config.source.clone(),
            slider: config.slider,
            dashboard: None,
            site: SiteSelection::All,
            payload: PayloadRange::new(config.slider.min, config.slider.max),
            charts: None,
            status_message: None,
        }
    }

    /// Load (or reload) the table from `source`.
    pub fn load(&mut self, source: DataSource) {
        match loader::load_table(&source) {
            Ok(table) => {
                self.source = source;
                self.set_table(table);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load {source}: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded table and reset the controls to their defaults.
    pub fn set_table(&mut self, table: LaunchTable) {
        let dashboard = Dashboard::new(table, self.slider);
        self.site = SiteSelection::All;
        self.payload = dashboard.initial_range();
        self.dashboard = Some(dashboard);
        self.status_message = None;
        self.recompute();
    }

    pub fn set_site(&mut self, site: SiteSelection) {
        if site != self.site {
            self.site = site;
            self.recompute();
        }
    }

    /// Update the payload range, keeping `low <= high`.
    pub fn set_payload(&mut self, low: f64, high: f64) {
        let range = PayloadRange::new(low.min(high), low.max(high));
        if range != self.payload {
            self.payload = range;
            self.recompute();
        }
    }

    /// Recompute `charts` after a control change.
    pub fn recompute(&mut self) {
        self.charts = self
            .dashboard
            .as_ref()
            .map(|d| d.update_charts(&self.site, &self.payload));
    }
}
