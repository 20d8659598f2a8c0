use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Mission outcome of a single launch.
///
/// Source files encode this as an integer class column restricted to 0
/// (failure) and 1 (success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// The integer class value as it appears in the source data.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Human-readable label for chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = RecordError;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(RecordError::InvalidOutcome(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Record validation errors
// ---------------------------------------------------------------------------

/// A source row carried a value outside the domain of the data model.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("outcome class must be 0 or 1, got {0}")]
    InvalidOutcome(u8),

    #[error("payload mass must be finite and non-negative, got {0}")]
    InvalidPayload(f64),
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single historical launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `"KSC LC-39A"`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Binary mission outcome.
    pub outcome: Outcome,
    /// Booster version category, e.g. `"FT"`; colors the scatter points.
    pub booster_category: String,
}

impl LaunchRecord {
    /// Build a record from raw column values, validating the domain
    /// invariants (class ∈ {0, 1}, payload finite and ≥ 0).
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        class: u8,
        booster_category: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(RecordError::InvalidPayload(payload_mass_kg));
        }
        Ok(LaunchRecord {
            site: site.into(),
            payload_mass_kg,
            outcome: Outcome::try_from(class)?,
            booster_category: booster_category.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded record set
// ---------------------------------------------------------------------------

/// The full loaded record set with precomputed indices.
///
/// Built once at startup, owned by the application state, never mutated
/// afterwards; the chart operations borrow it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    /// All launch records (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch site identifiers.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
    /// Observed payload extent `(min, max)` in kg; `None` when empty.
    pub payload_extent: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build the dataset indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut site_set: BTreeSet<&str> = BTreeSet::new();
        let mut category_set: BTreeSet<&str> = BTreeSet::new();
        let mut payload_extent: Option<(f64, f64)> = None;

        for rec in &records {
            site_set.insert(rec.site.as_str());
            category_set.insert(rec.booster_category.as_str());
            payload_extent = match payload_extent {
                None => Some((rec.payload_mass_kg, rec.payload_mass_kg)),
                Some((lo, hi)) => {
                    Some((lo.min(rec.payload_mass_kg), hi.max(rec.payload_mass_kg)))
                }
            };
        }

        let sites = site_set.into_iter().map(str::to_string).collect();
        let booster_categories = category_set.into_iter().map(str::to_string).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_extent,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
