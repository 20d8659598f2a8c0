use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Selection inputs: site selector and payload range
// ---------------------------------------------------------------------------

/// Which launch site's records to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelector {
    /// Wildcard: records of every site.
    AllSites,
    /// Records of a single named site.
    Site(String),
}

impl SiteSelector {
    /// Whether a record from the given site passes this selector.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::AllSites => true,
            SiteSelector::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::AllSites => write!(f, "All Sites"),
            SiteSelector::Site(name) => write!(f, "{name}"),
        }
    }
}

/// Inclusive payload-mass interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    /// Build a range, swapping the bounds if they arrive inverted so that
    /// `lo <= hi` always holds.
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo <= hi {
            PayloadRange { lo, hi }
        } else {
            PayloadRange { lo: hi, hi: lo }
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        (self.lo..=self.hi).contains(&payload_mass_kg)
    }
}

// ---------------------------------------------------------------------------
// Chart data outputs
// ---------------------------------------------------------------------------

/// One slice of the proportion chart: a category label and its count.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    pub label: String,
    pub count: u64,
}

/// Proportion-chart data: titled list of slices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutcomeBreakdown {
    pub title: String,
    pub slices: Vec<BreakdownSlice>,
}

/// Scatter-chart data: titled subset of the dataset, as record indices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorrelationView {
    pub title: String,
    /// Indices into `LaunchDataset::records` of the rows in view.
    pub indices: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Operation A – outcome breakdown
// ---------------------------------------------------------------------------

/// Compute the proportion-chart breakdown for the given site selector.
///
/// * Wildcard: one slice per distinct site, holding the total number of
///   successful launches at that site, ordered by site name.
/// * Specific site: one slice per outcome value present among that site's
///   records, ordered failure before success.  A site where only one
///   outcome occurs yields a single slice.
/// * A selector naming no known site yields an empty breakdown.
pub fn outcome_breakdown(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeBreakdown {
    match selector {
        SiteSelector::AllSites => {
            let mut successes_by_site: BTreeMap<&str, u64> = BTreeMap::new();
            for rec in &dataset.records {
                *successes_by_site.entry(rec.site.as_str()).or_default() +=
                    u64::from(rec.outcome.class());
            }
            OutcomeBreakdown {
                title: "Total Successes by Launch Site".to_string(),
                slices: successes_by_site
                    .into_iter()
                    .map(|(site, count)| BreakdownSlice {
                        label: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelector::Site(site) => {
            let mut counts: BTreeMap<Outcome, u64> = BTreeMap::new();
            for rec in dataset.records.iter().filter(|r| &r.site == site) {
                *counts.entry(rec.outcome).or_default() += 1;
            }
            // BTreeMap keyed by Outcome iterates Failure (0) before
            // Success (1), keeping slice order stable across renders.
            OutcomeBreakdown {
                title: format!("Total Success Launches for site {site}"),
                slices: counts
                    .into_iter()
                    .map(|(outcome, count)| BreakdownSlice {
                        label: outcome.label().to_string(),
                        count,
                    })
                    .collect(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Operation B – correlation subset
// ---------------------------------------------------------------------------

/// Compute the scatter-chart subset for the given selector and payload range.
///
/// The payload-range filter applies in both branches: with the wildcard it is
/// the only filter, and with a specific site it is intersected with the site
/// filter.  Bounds are inclusive, so a record with payload exactly `lo` or
/// `hi` stays in view.  A selector naming no known site yields an empty
/// subset.
pub fn correlation_subset(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> CorrelationView {
    let title = match selector {
        SiteSelector::AllSites => {
            "Correlation between Payload and Success for all Sites".to_string()
        }
        SiteSelector::Site(site) => {
            format!("Correlation between Payload and Success for {site}")
        }
    };

    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selector.matches(&rec.site) && range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect();

    CorrelationView { title, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    /// Small fixed dataset: three sites, one of them all-successes.
    fn sample_dataset() -> LaunchDataset {
        let rows = [
            ("CCAFS LC-40", 0.0, 0, "v1.0"),
            ("CCAFS LC-40", 2000.0, 0, "v1.1"),
            ("CCAFS LC-40", 3170.0, 1, "FT"),
            ("CCAFS LC-40", 9600.0, 1, "FT"),
            ("KSC LC-39A", 5300.0, 1, "FT"),
            ("KSC LC-39A", 6070.0, 1, "B4"),
            ("VAFB SLC-4E", 500.0, 0, "v1.1"),
            ("VAFB SLC-4E", 8000.0, 1, "FT"),
        ];
        LaunchDataset::from_records(
            rows.into_iter()
                .map(|(site, kg, class, cat)| LaunchRecord::new(site, kg, class, cat).unwrap())
                .collect(),
        )
    }

    fn labels(breakdown: &OutcomeBreakdown) -> Vec<&str> {
        breakdown.slices.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn wildcard_breakdown_sums_successes_per_site() {
        let ds = sample_dataset();
        let breakdown = outcome_breakdown(&ds, &SiteSelector::AllSites);

        assert_eq!(breakdown.title, "Total Successes by Launch Site");
        assert_eq!(
            labels(&breakdown),
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        let counts: Vec<u64> = breakdown.slices.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn site_breakdown_orders_failure_before_success() {
        let ds = sample_dataset();
        let breakdown = outcome_breakdown(&ds, &SiteSelector::Site("CCAFS LC-40".into()));

        assert_eq!(
            breakdown.title,
            "Total Success Launches for site CCAFS LC-40"
        );
        assert_eq!(labels(&breakdown), vec!["Failure", "Success"]);
        assert_eq!(breakdown.slices[0].count, 2);
        assert_eq!(breakdown.slices[1].count, 2);
    }

    #[test]
    fn single_outcome_site_yields_single_slice() {
        let ds = sample_dataset();
        let breakdown = outcome_breakdown(&ds, &SiteSelector::Site("KSC LC-39A".into()));

        assert_eq!(labels(&breakdown), vec!["Success"]);
        assert_eq!(breakdown.slices[0].count, 2);
    }

    #[test]
    fn unknown_site_yields_empty_breakdown() {
        let ds = sample_dataset();
        let breakdown = outcome_breakdown(&ds, &SiteSelector::Site("BOCA CHICA".into()));
        assert!(breakdown.slices.is_empty());
    }

    #[test]
    fn wildcard_subset_filters_on_payload_only() {
        let ds = sample_dataset();
        let view = correlation_subset(
            &ds,
            &SiteSelector::AllSites,
            &PayloadRange::new(2000.0, 8000.0),
        );

        assert_eq!(
            view.title,
            "Correlation between Payload and Success for all Sites"
        );
        // Inclusive on both bounds: 2000 and 8000 stay in view.
        assert_eq!(view.indices, vec![1, 2, 4, 5, 7]);
        for &i in &view.indices {
            let kg = ds.records[i].payload_mass_kg;
            assert!((2000.0..=8000.0).contains(&kg));
        }
    }

    #[test]
    fn site_subset_intersects_site_and_payload_filters() {
        let ds = sample_dataset();
        let view = correlation_subset(
            &ds,
            &SiteSelector::Site("CCAFS LC-40".into()),
            &PayloadRange::new(1000.0, 4000.0),
        );

        assert_eq!(
            view.title,
            "Correlation between Payload and Success for CCAFS LC-40"
        );
        assert_eq!(view.indices, vec![1, 2]);
    }

    #[test]
    fn unknown_site_yields_empty_subset() {
        let ds = sample_dataset();
        let view = correlation_subset(
            &ds,
            &SiteSelector::Site("BOCA CHICA".into()),
            &PayloadRange::new(0.0, 10000.0),
        );
        assert!(view.indices.is_empty());
    }

    #[test]
    fn degenerate_range_keeps_exact_matches() {
        let ds = sample_dataset();
        let view = correlation_subset(
            &ds,
            &SiteSelector::AllSites,
            &PayloadRange::new(500.0, 500.0),
        );
        assert_eq!(view.indices, vec![6]);
    }

    #[test]
    fn inverted_bounds_are_normalized() {
        let range = PayloadRange::new(8000.0, 2000.0);
        assert_eq!(range, PayloadRange::new(2000.0, 8000.0));
        assert!(range.contains(5000.0));
    }

    #[test]
    fn operations_are_idempotent() {
        let ds = sample_dataset();
        let selector = SiteSelector::Site("VAFB SLC-4E".into());
        let range = PayloadRange::new(0.0, 10000.0);

        assert_eq!(
            outcome_breakdown(&ds, &selector),
            outcome_breakdown(&ds, &selector)
        );
        assert_eq!(
            correlation_subset(&ds, &selector, &range),
            correlation_subset(&ds, &selector, &range)
        );
    }
}
