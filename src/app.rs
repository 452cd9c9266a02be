use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchLensApp {
    pub state: AppState,
}

impl LaunchLensApp {
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: site and payload controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() - 16.0).max(0.0) / 2.0;
            plot::pie_chart(ui, &self.state.pie, chart_height);
            ui.separator();
            plot::scatter_chart(
                ui,
                &self.state.scatter,
                &self.state.booster_colors,
                chart_height,
            );
        });
    }
}
