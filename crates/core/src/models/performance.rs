use serde::{Deserialize, Serialize};

use super::nav::SchemeMeta;

/// Performance of one fund over a selected window, derived strictly from
/// the first and last point of the filtered series. Intermediate points do
/// not affect it.
///
/// All three values are rounded to 2 decimal places for display. The zero
/// summary (the `Default`) is returned whenever the window has fewer than
/// two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// last NAV - first NAV over the window
    pub absolute_change: f64,

    /// (last NAV / first NAV - 1) * 100; defined as 0 when the first NAV is 0
    pub percent_change: f64,

    /// The last NAV in the window
    pub most_recent_nav: f64,
}

impl PerformanceSummary {
    /// True when this is the degenerate zero summary.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.absolute_change == 0.0 && self.percent_change == 0.0 && self.most_recent_nav == 0.0
    }
}

/// One row of the fund details table shown under the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundPerformanceRow {
    /// The scheme code this row describes
    pub scheme_code: String,

    /// Legend label (matches the chart series label)
    pub label: String,

    /// Scheme metadata as reported upstream
    pub meta: SchemeMeta,

    /// Performance over the currently selected period
    pub summary: PerformanceSummary,
}
