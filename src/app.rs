use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    /// Wrap the startup-loaded dataset into a runnable app.
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: heading and dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: site and payload controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = ui.available_height() * 0.45;
            ui.allocate_ui(egui::Vec2::new(ui.available_width(), pie_height), |ui| {
                plot::breakdown_pie(ui, &self.state);
            });
            ui.separator();
            plot::payload_scatter(ui, &self.state);
        });
    }
}
