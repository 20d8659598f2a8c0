use crate::color::ColorMap;
use crate::data::engine::{
    CorrelationView, OutcomeBreakdown, PayloadRange, SiteSelector, correlation_subset,
    outcome_breakdown,
};
use crate::data::model::LaunchDataset;

/// Payload slider bounds and step, in kilograms.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Initial payload selection shown before the user touches the slider.
pub const PAYLOAD_DEFAULT_RANGE: (f64, f64) = (2_000.0, 8_000.0);

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the UI starts and never changes; the
/// selection fields change on control events and the chart data is
/// recomputed through the pure engine operations whenever they do.
pub struct AppState {
    /// Immutable record table, loaded at startup.
    pub dataset: LaunchDataset,

    /// Currently selected launch site.
    pub selector: SiteSelector,

    /// Currently selected payload interval.
    pub payload_range: PayloadRange,

    /// Proportion-chart data for the current selector (cached).
    pub breakdown: OutcomeBreakdown,

    /// Scatter-chart subset for the current selection (cached).
    pub correlation: CorrelationView,

    /// Booster-category colours, fixed for the dataset's lifetime.
    pub color_map: ColorMap,
}

impl AppState {
    /// Wrap a freshly loaded dataset with the default selection.
    pub fn new(dataset: LaunchDataset) -> Self {
        let color_map = ColorMap::new(&dataset.booster_categories);
        let mut state = AppState {
            dataset,
            selector: SiteSelector::AllSites,
            payload_range: PayloadRange::new(PAYLOAD_DEFAULT_RANGE.0, PAYLOAD_DEFAULT_RANGE.1),
            breakdown: OutcomeBreakdown::default(),
            correlation: CorrelationView::default(),
            color_map,
        };
        state.refresh_charts();
        state
    }

    /// Switch the site selector and recompute both charts.
    pub fn set_selector(&mut self, selector: SiteSelector) {
        if self.selector != selector {
            self.selector = selector;
            self.refresh_charts();
        }
    }

    /// Set the payload interval (bounds in either order) and recompute.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        let range = PayloadRange::new(lo, hi);
        if self.payload_range != range {
            self.payload_range = range;
            self.refresh_charts();
        }
    }

    /// Recompute the cached chart data from the current selection.
    fn refresh_charts(&mut self) {
        self.breakdown = outcome_breakdown(&self.dataset, &self.selector);
        self.correlation = correlation_subset(&self.dataset, &self.selector, &self.payload_range);
    }
}
