use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary launch result flag
// ---------------------------------------------------------------------------

/// Launch result, the `class` column of the source table: 0 = failure,
/// 1 = success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

/// The `class` column held something other than 0 or 1.
#[derive(Debug, Error)]
#[error("outcome flag must be 0 or 1, got {0}")]
pub struct InvalidOutcome(pub i64);

impl Outcome {
    /// Parse the 0/1 flag used by the source table.
    pub fn from_flag(flag: i64) -> Result<Self, InvalidOutcome> {
        match flag {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(InvalidOutcome(other)),
        }
    }

    /// The numeric flag; also the scatter chart's y value.
    pub fn flag(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// Outcome groups keep the raw flag digit as their label, matching what the
/// dashboard has always shown in the pie legend.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier (`Launch Site` column).
    pub site: String,
    /// Payload mass in kilograms (`Payload Mass (kg)` column).
    pub payload_mass_kg: f64,
    /// Launch result (`class` column).
    pub outcome: Outcome,
    /// Booster version category (`Booster Version Category` column).
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices. Built once at startup,
/// read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted set of distinct launch sites.
    pub sites: BTreeSet<String>,
    /// Sorted set of distinct booster version categories.
    pub booster_categories: BTreeSet<String>,
    /// Smallest payload mass in the dataset (0.0 when empty).
    pub payload_min: f64,
    /// Largest payload mass in the dataset (0.0 when empty).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site/category indices and payload bounds from the rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites = BTreeSet::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            sites.insert(rec.site.clone());
            booster_categories.insert(rec.booster_category.clone());
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }
        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
