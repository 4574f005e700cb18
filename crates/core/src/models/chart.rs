use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Line colors assigned to chart series by selection index (wrapping around
/// past the end, though the selection cap keeps it to one lap).
pub const CHART_COLORS: [&str; 10] = [
    "hsl(210, 80%, 50%)",  // blue
    "hsl(120, 60%, 50%)",  // green
    "hsl(349, 70%, 56%)",  // red
    "hsl(39, 100%, 50%)",  // orange
    "hsl(280, 70%, 60%)",  // purple
    "hsl(160, 60%, 50%)",  // teal
    "hsl(30, 90%, 50%)",   // coral
    "hsl(195, 80%, 50%)",  // cyan
    "hsl(270, 70%, 60%)",  // indigo
    "hsl(50, 100%, 50%)",  // yellow
];

/// One row of the merged multi-fund chart table: a calendar date and the
/// NAV of every fund that has an observation on exactly that date.
///
/// The core generates these, the frontend just renders them. Funds with no
/// point on this date are simply absent from `navs`: no interpolation, no
/// fill-forward. `BTreeMap` keeps column order deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// The date for this row
    pub date: NaiveDate,

    /// scheme code → NAV on this date (sparse)
    pub navs: BTreeMap<String, f64>,
}

impl MergedRow {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            navs: BTreeMap::new(),
        }
    }

    /// NAV for one fund on this date, if it has an observation here.
    #[must_use]
    pub fn nav_for(&self, scheme_code: &str) -> Option<f64> {
        self.navs.get(scheme_code).copied()
    }

    #[must_use]
    pub fn fund_count(&self) -> usize {
        self.navs.len()
    }
}

/// Per-series display hints for the chart legend.
///
/// Tells the frontend "this scheme code is drawn with this label and
/// this color". Order matches the selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesConfig {
    pub scheme_code: String,

    /// Legend label: shortened scheme name, or `Fund {code}` while
    /// metadata has not loaded.
    pub label: String,

    /// CSS color string from [`CHART_COLORS`].
    pub color: String,
}
