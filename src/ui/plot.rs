use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use launch_dash::dashboard::{PieChart, ScatterChart, DASHBOARD_TITLE};

use crate::state::AppState;

/// Arc resolution of a full circle.
const CIRCLE_SEGMENTS: f64 = 96.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the title, pie chart and scatter chart.
pub fn dashboard_charts(ui: &mut Ui, state: &AppState) {
    let Some(charts) = &state.charts else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No launch data loaded  (File → Open CSV…)");
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(DASHBOARD_TITLE);
    });
    ui.separator();

    let half = (ui.available_height() - 40.0).max(200.0) / 2.0;
    pie_chart(ui, &charts.pie, half);
    ui.separator();
    scatter_chart(ui, &charts.scatter, (state.slider.min, state.slider.max));
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Outline of one wedge of the unit circle, clockwise from `start`.
fn wedge_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * CIRCLE_SEGMENTS).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for k in 0..=steps {
        let angle = start - sweep * k as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

/// Why a pie has nothing to draw: no launches matched at all, or they did
/// but none succeeded.
fn empty_pie_message(pie: &PieChart) -> Option<&'static str> {
    if pie.slices.is_empty() {
        Some("No launches in the current selection.")
    } else if pie.total() <= 0.0 {
        Some("No successful launches in the current selection.")
    } else {
        None
    }
}

/// Draw a pie as filled polygons, first slice starting at twelve o'clock.
pub fn pie_chart(ui: &mut Ui, pie: &PieChart, height: f32) {
    ui.strong(&pie.title);

    let total = pie.total();
    if let Some(message) = empty_pie_message(pie) {
        ui.label(message);
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.6)
        .include_x(1.6)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                return;
            }
            let mut start = FRAC_PI_2;
            for slice in &pie.slices {
                let share = slice.value / total;
                if share <= 0.0 {
                    continue;
                }
                let sweep = share * TAU;
                let color = Color32::from(slice.color);

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge_points(start, sweep)))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE))
                        .name(format!("{} ({:.1}%)", slice.label, share * 100.0)),
                );
                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Payload vs. outcome, one point series per booster category.
pub fn scatter_chart(ui: &mut Ui, scatter: &ScatterChart, x_bounds: (f64, f64)) {
    ui.strong(&scatter.title);

    let x_label = scatter.x_label.clone();
    let y_label = scatter.y_label.clone();
    let hover = scatter.clone();

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .x_axis_label(x_label.clone())
        .y_axis_label(y_label.clone())
        .include_x(x_bounds.0)
        .include_x(x_bounds.1)
        .include_y(-0.2)
        .include_y(1.2)
        .label_formatter(move |name, value| {
            let mut text = String::new();
            for label in hover.labels_at(name, value.x, value.y) {
                text.push_str(label);
                text.push('\n');
            }
            if !name.is_empty() {
                text.push_str(&format!("{name}\n"));
            }
            text.push_str(&format!("{x_label}: {:.0}\n{y_label}: {:.0}", value.x, value.y));
            text
        })
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points: PlotPoints = series.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(5.0)
                        .color(Color32::from(series.color))
                        .name(&series.name),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_dash::color::Rgb;
    use launch_dash::dashboard::PieSlice;

    fn pie(values: &[f64]) -> PieChart {
        PieChart {
            title: "test".to_string(),
            slices: values
                .iter()
                .map(|&value| PieSlice {
                    label: format!("{value}"),
                    value,
                    color: Rgb::GRAY,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_selection_and_zero_successes_read_differently() {
        assert_eq!(
            empty_pie_message(&pie(&[])),
            Some("No launches in the current selection.")
        );
        assert_eq!(
            empty_pie_message(&pie(&[0.0, 0.0])),
            Some("No successful launches in the current selection.")
        );
        assert_eq!(empty_pie_message(&pie(&[0.25, 0.75])), None);
    }

    #[test]
    fn full_circle_closes_on_itself() {
        let pts = wedge_points(FRAC_PI_2, TAU);
        assert_eq!(pts[0], [0.0, 0.0]);
        let first = pts[1];
        let last = pts[pts.len() - 1];
        assert!((first[0] - last[0]).abs() < 1e-9 && (first[1] - last[1]).abs() < 1e-9);
        assert!((first[1] - 1.0).abs() < 1e-9, "starts at twelve o'clock");
    }

    #[test]
    fn wedges_run_clockwise() {
        let pts = wedge_points(FRAC_PI_2, TAU / 4.0);
        let end = pts[pts.len() - 1];
        // A quarter turn clockwise from the top ends at three o'clock.
        assert!((end[0] - 1.0).abs() < 1e-9 && end[1].abs() < 1e-9);
        assert!(pts.len() >= 4);
    }
}
