use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::filter::{self, PayloadRange, SiteSelector};
use crate::data::model::LaunchDataset;

/// Axis labels of the payload scatter, fixed by the dashboard layout.
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";

// ---------------------------------------------------------------------------
// Chart descriptions – plain data handed to the rendering layer
// ---------------------------------------------------------------------------

/// Pie chart of outcome counts: `labels[i]` goes with `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// One scatter series: all points sharing a booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    /// `[payload_mass_kg, outcome flag]` pairs in dataset order.
    pub points: Vec<[f64; 2]>,
}

/// Scatter chart of payload mass (x) against launch outcome (y), one series
/// per booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Builders – one per chart, invoked on every control change
// ---------------------------------------------------------------------------

/// Describe the outcome pie for the current site selection.
///
/// The title carries the uppercased selector value, `"ALL"` included.
pub fn outcome_pie(dataset: &LaunchDataset, selector: &SiteSelector) -> PieChart {
    let counts = filter::outcome_counts(dataset, selector);
    PieChart {
        title: format!(
            "Success/Failure Counts for {}",
            selector.to_string().to_uppercase()
        ),
        labels: counts.keys().cloned().collect(),
        values: counts.values().copied().collect(),
    }
}

/// Describe the payload scatter for the current site and payload range.
///
/// Points are grouped into one series per booster version category (sorted
/// by category label); within a series they keep dataset order. The title
/// carries the selector value as-is; only the pie uppercases it.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> ScatterChart {
    let mut grouped: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for point in filter::scatter_set(dataset, selector, range) {
        grouped
            .entry(point.booster_category)
            .or_default()
            .push([point.payload_mass_kg, f64::from(point.outcome.flag())]);
    }

    ScatterChart {
        title: format!("Payload and Launch Outcome for {selector}"),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        series: grouped
            .into_iter()
            .map(|(category, points)| ScatterSeries { category, points })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, kg: f64, flag: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: kg,
            outcome: Outcome::from_flag(flag).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, 1, "v1.0"),
            record("CCAFS LC-40", 1500.0, 0, "FT"),
            record("KSC LC-39A", 3000.0, 1, "FT"),
        ])
    }

    #[test]
    fn test_pie_for_all_sites() {
        let ds = sample_dataset();
        let pie = outcome_pie(&ds, &SiteSelector::All);
        assert_eq!(pie.title, "Success/Failure Counts for ALL");
        assert_eq!(pie.labels, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(pie.values, vec![1, 1]);
    }

    #[test]
    fn test_pie_for_one_site() {
        let ds = sample_dataset();
        let pie = outcome_pie(&ds, &SiteSelector::Site("CCAFS LC-40".to_string()));
        assert_eq!(pie.title, "Success/Failure Counts for CCAFS LC-40");
        assert_eq!(pie.labels, vec!["0", "1"]);
        assert_eq!(pie.values, vec![1, 1]);
        // Slices cover exactly the launches at the site.
        assert_eq!(pie.total(), 2);
    }

    #[test]
    fn test_pie_title_uppercases_selector() {
        let ds = LaunchDataset::from_records(vec![record("pad 39a", 100.0, 1, "v1.0")]);
        let pie = outcome_pie(&ds, &SiteSelector::Site("pad 39a".to_string()));
        assert_eq!(pie.title, "Success/Failure Counts for PAD 39A");
    }

    #[test]
    fn test_scatter_title_keeps_selector_case() {
        let ds = LaunchDataset::from_records(vec![record("pad 39a", 100.0, 1, "v1.0")]);
        let chart = payload_scatter(
            &ds,
            &SiteSelector::Site("pad 39a".to_string()),
            &PayloadRange::new(0.0, 200.0),
        );
        assert_eq!(chart.title, "Payload and Launch Outcome for pad 39a");
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "Launch Outcome");
    }

    #[test]
    fn test_scatter_series_grouped_by_category() {
        let ds = sample_dataset();
        let chart = payload_scatter(&ds, &SiteSelector::All, &PayloadRange::new(0.0, 10_000.0));

        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["FT", "v1.0"]);

        let ft = &chart.series[0];
        assert_eq!(ft.points, vec![[1500.0, 0.0], [3000.0, 1.0]]);
        let v1 = &chart.series[1];
        assert_eq!(v1.points, vec![[500.0, 1.0]]);
        assert_eq!(chart.point_count(), ds.len());
    }

    #[test]
    fn test_empty_selection_yields_empty_charts() {
        let ds = sample_dataset();
        let sel = SiteSelector::Site("VAFB SLC-4E".to_string());
        let pie = outcome_pie(&ds, &sel);
        assert!(pie.labels.is_empty());
        assert!(pie.values.is_empty());

        let chart = payload_scatter(&ds, &sel, &PayloadRange::new(0.0, 10_000.0));
        assert!(chart.series.is_empty());
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn test_chart_descriptions_serialize() {
        let ds = sample_dataset();
        let pie = outcome_pie(&ds, &SiteSelector::All);
        let js = serde_json::to_value(&pie).unwrap();
        assert_eq!(js["title"], "Success/Failure Counts for ALL");
        assert_eq!(js["labels"][0], "CCAFS LC-40");

        let chart = payload_scatter(&ds, &SiteSelector::All, &PayloadRange::new(0.0, 10_000.0));
        let js = serde_json::to_value(&chart).unwrap();
        assert_eq!(js["series"][0]["category"], "FT");
        assert_eq!(js["series"][0]["points"][0][0], 1500.0);
    }
}
