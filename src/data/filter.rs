use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Selector and range – the two dashboard controls
// ---------------------------------------------------------------------------

/// The site filter value: the `"ALL"` wildcard or one concrete launch site.
///
/// Site values are not checked against the dataset; an unknown site simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelector {
    All,
    Site(String),
}

impl SiteSelector {
    /// Build a selector from the control's string value. The exact literal
    /// `"ALL"` is the wildcard; anything else names a site.
    pub fn from_value(value: &str) -> Self {
        if value == "ALL" {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => write!(f, "ALL"),
            SiteSelector::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Inclusive payload mass window in kilograms. An inverted window (lo > hi)
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    pub fn contains(&self, kg: f64) -> bool {
        self.lo <= kg && kg <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Aggregations feeding the two charts
// ---------------------------------------------------------------------------

/// Pie groups: label → count.
pub type OutcomeCounts = BTreeMap<String, u64>;

/// One launch reduced to the charted triple.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// The filtered point set, in dataset order.
pub type ScatterSet = Vec<ScatterPoint>;

/// Group counts for the outcome pie.
///
/// With the wildcard selector there is one group per distinct site, counting
/// that site's successes (zero-success sites appear with value 0). With a
/// concrete site there is one group per outcome flag occurring at that site,
/// labelled `"0"`/`"1"`. An unknown site yields an empty map.
pub fn outcome_counts(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeCounts {
    let mut counts = OutcomeCounts::new();
    match selector {
        SiteSelector::All => {
            for site in &dataset.sites {
                counts.insert(site.clone(), 0);
            }
            for rec in &dataset.records {
                if rec.outcome.is_success() {
                    *counts.entry(rec.site.clone()).or_insert(0) += 1;
                }
            }
        }
        SiteSelector::Site(site) => {
            for rec in &dataset.records {
                if rec.site == *site {
                    *counts.entry(rec.outcome.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}

/// Point set for the payload scatter, in dataset order.
///
/// With the wildcard selector every record is included and the payload range
/// is ignored; the range only takes effect once a concrete site is chosen.
pub fn scatter_set(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> ScatterSet {
    dataset
        .records
        .iter()
        .filter(|rec| match selector {
            SiteSelector::All => true,
            SiteSelector::Site(site) => rec.site == *site && range.contains(rec.payload_mass_kg),
        })
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome: rec.outcome,
            booster_category: rec.booster_category.clone(),
        })
        .collect()
}
