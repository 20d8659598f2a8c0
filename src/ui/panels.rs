use eframe::egui::{self, Slider, Ui};

use crate::data::engine::SiteSelector;
use crate::state::{
    AppState, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the site selector and payload-range controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone the site list so we can mutate state inside the combo closure.
    let sites = state.dataset.sites.clone();

    ui.strong("Launch site");
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(state.selector.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = state.selector == SiteSelector::AllSites;
            if ui.selectable_label(all_selected, "All Sites").clicked() {
                state.set_selector(SiteSelector::AllSites);
            }
            for site in &sites {
                let selected =
                    matches!(&state.selector, SiteSelector::Site(s) if s == site);
                if ui.selectable_label(selected, site).clicked() {
                    state.set_selector(SiteSelector::Site(site.clone()));
                }
            }
        });

    ui.add_space(8.0);

    ui.strong("Payload range (kg)");
    let mut lo = state.payload_range.lo;
    let mut hi = state.payload_range.hi;
    let lo_response = ui.add(
        Slider::new(&mut lo, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    );
    let hi_response = ui.add(
        Slider::new(&mut hi, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    );
    if lo_response.changed() || hi_response.changed() {
        // Dragging one bound past the other drags the other along.
        if lo_response.changed() && lo > hi {
            hi = lo;
        }
        if hi_response.changed() && hi < lo {
            lo = hi;
        }
        state.set_payload_range(lo, hi);
    }

    ui.separator();

    if let Some((min, max)) = state.dataset.payload_extent {
        ui.label(format!("Observed payloads: {min:.0} to {max:.0} kg"));
    }
    ui.label(format!(
        "{} of {} launches in view",
        state.correlation.indices.len(),
        state.dataset.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard heading and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches across {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));
    });
}
