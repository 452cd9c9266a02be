use eframe::egui::{self, Slider, Ui};

use crate::data::filter::SiteSelector;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the site and payload-range controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // Clone what we need so we can mutate state inside the closures.
    let sites: Vec<String> = state.dataset.sites.iter().cloned().collect();
    let payload_min = state.dataset.payload_min;
    let payload_max = state.dataset.payload_max;

    // ---- Site selector ----
    ui.strong("Select a site:");
    let selected_text = match &state.selected_site {
        SiteSelector::All => "All Sites".to_string(),
        SiteSelector::Site(s) => s.clone(),
    };
    let mut chosen: Option<SiteSelector> = None;
    egui::ComboBox::from_id_salt("site")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selected_site.is_all(), "All Sites")
                .clicked()
            {
                chosen = Some(SiteSelector::from_value("ALL"));
            }
            for site in &sites {
                let active = matches!(&state.selected_site, SiteSelector::Site(s) if s == site);
                if ui.selectable_label(active, site).clicked() {
                    chosen = Some(SiteSelector::from_value(site));
                }
            }
        });
    if let Some(selector) = chosen {
        state.select_site(selector);
    }

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let mut lo = state.payload_range.lo;
    let mut hi = state.payload_range.hi;
    // Each end is clamped by the other, so the range stays ordered.
    let lo_changed = ui
        .add(Slider::new(&mut lo, payload_min..=hi).text("min"))
        .changed();
    let hi_changed = ui
        .add(Slider::new(&mut hi, lo..=payload_max).text("max"))
        .changed();
    if lo_changed || hi_changed {
        state.set_payload_range(lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: dashboard heading and record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("Payload and Launch Outcome");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} shown",
            state.dataset.len(),
            state.scatter.point_count()
        ));
    });
}
