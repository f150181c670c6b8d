use eframe::egui::{self, Color32, RichText, Ui};

use launch_dash::data::filter::SiteSelection;
use launch_dash::data::loader::DataSource;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: launch site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(dashboard) = &state.dashboard else {
        ui.label("No dataset loaded.");
        return;
    };
    let controls = dashboard.controls();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let mut site = state.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .width(ui.available_width())
        .selected_text(site.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &controls.site_dropdown.options {
                let value = SiteSelection::from_value(&option.value);
                ui.selectable_value(&mut site, value, &option.label);
            }
        });
    state.set_site(site);

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range: two sliders kept in order ----
    ui.strong("Payload range (Kg)");
    let slider = controls.payload_slider;
    let mut low = state.payload.low;
    let mut high = state.payload.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .text("max"),
        )
        .changed();

    // Dragging one handle past the other pushes it along.
    if low_changed && low > high {
        high = low;
    } else if high_changed && high < low {
        low = high;
    }
    state.set_payload(low, high);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in &slider.marks {
            if ui.small_button(&mark.label).clicked() {
                let v = mark.value;
                if (v - low).abs() <= (v - high).abs() {
                    state.set_payload(v, high);
                } else {
                    state.set_payload(low, v);
                }
            }
        }
    });

    ui.add_space(8.0);
    ui.separator();

    if let Some(charts) = &state.charts {
        ui.label(format!("{} launches selected", charts.selected_rows));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload source").clicked() {
                let source = state.source.clone();
                state.load(source);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dashboard) = &state.dashboard {
            ui.label(format!(
                "{} launches from {}",
                dashboard.table().len(),
                state.source
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(DataSource::File(path));
    }
}
