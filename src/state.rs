use crate::chart::{self, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelector};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, fixed for the lifetime of the app.
    pub dataset: LaunchDataset,

    /// Current site selection.
    pub selected_site: SiteSelector,

    /// Current payload range in kg, inclusive at both ends.
    pub payload_range: PayloadRange,

    /// Colour per booster version category.
    pub booster_colors: ColorMap,

    /// Outcome pie for the current selection (cached).
    pub pie: PieChart,

    /// Payload scatter for the current selection (cached).
    pub scatter: ScatterChart,
}

impl AppState {
    /// Initial state: every site selected and the payload range wide open.
    pub fn new(dataset: LaunchDataset) -> Self {
        let selected_site = SiteSelector::All;
        let payload_range = PayloadRange::new(dataset.payload_min, dataset.payload_max);
        let booster_colors = ColorMap::new(&dataset.booster_categories);
        let pie = chart::outcome_pie(&dataset, &selected_site);
        let scatter = chart::payload_scatter(&dataset, &selected_site, &payload_range);

        Self {
            dataset,
            selected_site,
            payload_range,
            booster_colors,
            pie,
            scatter,
        }
    }

    /// Switch the site selection and recompute both charts.
    pub fn select_site(&mut self, selector: SiteSelector) {
        self.selected_site = selector;
        self.refresh_charts();
    }

    /// Move the payload range and recompute both charts.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        self.payload_range = PayloadRange::new(lo, hi);
        self.refresh_charts();
    }

    /// Recompute the cached charts after a control change.
    fn refresh_charts(&mut self) {
        self.pie = chart::outcome_pie(&self.dataset, &self.selected_site);
        self.scatter =
            chart::payload_scatter(&self.dataset, &self.selected_site, &self.payload_range);
    }
}
