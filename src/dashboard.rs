//! Dashboard model: control descriptors and the chart update function.
//!
//! Both front ends (the web page and the desktop window) drive the same
//! [`Dashboard`]: they read [`Controls`] once to build their widgets and call
//! [`Dashboard::update_charts`] whenever the site or payload range changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{ColorMap, Rgb};
use crate::config::SliderConfig;
use crate::data::filter::{filtered_records, PayloadRange, SiteSelection, ALL_SITES};
use crate::data::model::{LaunchRecord, LaunchTable};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

const ALL_SITES_TITLE: &str = "Total Success by Launch Sites";
const SITE_TITLE: &str = "Success Rate by Chosen Site";
const SCATTER_TITLE: &str = "Payload vs. Launch Outcome";

// ---------------------------------------------------------------------------
// Control descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial `[low, high]` selection.
    pub value: [f64; 2],
}

/// Everything a front end needs to build its input widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: RangeSlider,
}

fn slider_marks(slider: &SliderConfig) -> Vec<SliderMark> {
    let mark = |value: f64| SliderMark {
        value,
        label: format!("{value}"),
    };
    if slider.step <= 0.0 || slider.max <= slider.min {
        return vec![mark(slider.min), mark(slider.max)];
    }
    let count = ((slider.max - slider.min) / slider.step).round() as usize;
    (0..=count)
        .map(|k| mark(slider.min + k as f64 * slider.step))
        .collect()
}

// ---------------------------------------------------------------------------
// Chart descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Empty when nothing matched the filter.
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Hover text: flight number and booster version when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Points of one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Hover texts of the points of `series` sitting at `(x, y)`. Launches
    /// with equal payload and outcome share a position, so there may be
    /// several.
    pub fn labels_at(&self, series: &str, x: f64, y: f64) -> Vec<&str> {
        self.series
            .iter()
            .filter(|s| s.name == series)
            .flat_map(|s| &s.points)
            .filter(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9)
            .filter_map(|p| p.label.as_deref())
            .collect()
    }
}

/// Output of one update: both charts plus the size of the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub pie: PieChart,
    pub scatter: ScatterChart,
    pub selected_rows: usize,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The loaded table plus the colour assignments shared by every update.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: LaunchTable,
    slider: SliderConfig,
    site_colors: ColorMap,
    booster_colors: ColorMap,
}

impl Dashboard {
    pub fn new(table: LaunchTable, slider: SliderConfig) -> Self {
        let site_colors = ColorMap::new(table.launch_sites().iter().cloned());
        let booster_colors = ColorMap::new(table.booster_categories().iter().cloned());
        Dashboard {
            table,
            slider,
            site_colors,
            booster_colors,
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    /// The slider's starting selection: the table's payload span, or the
    /// whole slider when the table is empty.
    pub fn initial_range(&self) -> PayloadRange {
        match self.table.payload_bounds() {
            Some((lo, hi)) => PayloadRange::new(lo, hi),
            None => PayloadRange::new(self.slider.min, self.slider.max),
        }
    }

    pub fn controls(&self) -> Controls {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(self.table.launch_sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let initial = self.initial_range();
        Controls {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: SiteDropdown {
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
            },
            payload_slider: RangeSlider {
                min: self.slider.min,
                max: self.slider.max,
                step: self.slider.step,
                marks: slider_marks(&self.slider),
                value: [initial.low, initial.high],
            },
        }
    }

    /// Recompute both charts for the given control values.
    pub fn update_charts(&self, site: &SiteSelection, range: &PayloadRange) -> ChartSet {
        let rows = filtered_records(&self.table, site, range);
        log::debug!(
            "update_charts site={} payload=[{}, {}] -> {} rows",
            site.value(),
            range.low,
            range.high,
            rows.len()
        );

        let pie = match site {
            SiteSelection::All => self.success_by_site(&rows),
            SiteSelection::Site(_) => success_rate(&rows),
        };
        let scatter = self.payload_scatter(&rows);

        ChartSet {
            pie,
            scatter,
            selected_rows: rows.len(),
        }
    }

    /// Per-site success counts, sites in sorted order.
    fn success_by_site(&self, rows: &[&LaunchRecord]) -> PieChart {
        let mut by_site: BTreeMap<&str, f64> = BTreeMap::new();
        for rec in rows {
            *by_site.entry(rec.launch_site.as_str()).or_default() += rec.outcome_value();
        }

        PieChart {
            title: ALL_SITES_TITLE.to_string(),
            slices: by_site
                .into_iter()
                .map(|(site, successes)| PieSlice {
                    label: site.to_string(),
                    value: successes,
                    color: self.site_colors.color_for(site),
                })
                .collect(),
        }
    }

    fn payload_scatter(&self, rows: &[&LaunchRecord]) -> ScatterChart {
        let mut by_category: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
        for rec in rows {
            by_category
                .entry(rec.booster_category.as_str())
                .or_default()
                .push(ScatterPoint {
                    x: rec.payload_mass_kg,
                    y: rec.outcome_value(),
                    label: hover_label(rec),
                });
        }

        ScatterChart {
            title: SCATTER_TITLE.to_string(),
            x_label: "Payload Mass (kg)".to_string(),
            y_label: "class".to_string(),
            series: by_category
                .into_iter()
                .map(|(category, points)| ScatterSeries {
                    name: category.to_string(),
                    color: self.booster_colors.color_for(category),
                    points,
                })
                .collect(),
        }
    }
}

/// Success / failure split for one site. The mean is undefined for an empty
/// selection, which yields a chart with no slices.
fn success_rate(rows: &[&LaunchRecord]) -> PieChart {
    let slices = if rows.is_empty() {
        Vec::new()
    } else {
        let rate = rows.iter().map(|r| r.outcome_value()).sum::<f64>() / rows.len() as f64;
        vec![
            PieSlice {
                label: "Success".to_string(),
                value: rate,
                color: Rgb::SUCCESS,
            },
            PieSlice {
                label: "Failed".to_string(),
                value: 1.0 - rate,
                color: Rgb::FAILURE,
            },
        ]
    };

    PieChart {
        title: SITE_TITLE.to_string(),
        slices,
    }
}

fn hover_label(rec: &LaunchRecord) -> Option<String> {
    match (rec.flight_number, rec.booster_version.as_deref()) {
        (Some(n), Some(version)) => Some(format!("Flight {n}: {version}")),
        (Some(n), None) => Some(format!("Flight {n}")),
        (None, Some(version)) => Some(version.to_string()),
        (None, None) => None,
    }
}
