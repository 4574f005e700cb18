use chrono::NaiveDate;

use crate::models::dashboard::DashboardState;
use crate::models::nav::{FundSeries, NavPoint};
use crate::models::performance::{FundPerformanceRow, PerformanceSummary};
use crate::models::period::Period;

/// Derives per-fund performance figures over a selected window.
///
/// Everything is computed from the first and last point of the windowed
/// series; intermediate points never matter. Degenerate windows (fewer
/// than two points) produce the zero summary instead of failing.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// The slice of a series inside the period, relative to `today`.
    #[must_use]
    pub fn window<'a>(
        &self,
        series: &'a FundSeries,
        period: Period,
        today: NaiveDate,
    ) -> &'a [NavPoint] {
        series.points_since(period.cutoff(today))
    }

    /// Summarize an already-windowed slice of points.
    ///
    /// `percent_change` is 0 when the window's first NAV is 0; the result
    /// never carries a non-finite value. All figures are rounded to two
    /// decimal places, half away from zero.
    #[must_use]
    pub fn derive(&self, points: &[NavPoint]) -> PerformanceSummary {
        if points.len() < 2 {
            return PerformanceSummary::default();
        }

        let first = points[0].nav;
        let last = points[points.len() - 1].nav;

        let absolute_change = last - first;
        let percent_change = if first == 0.0 {
            0.0
        } else {
            (last / first - 1.0) * 100.0
        };

        PerformanceSummary {
            absolute_change: round2(absolute_change),
            percent_change: round2(percent_change),
            most_recent_nav: round2(last),
        }
    }

    /// Window + derive in one step.
    #[must_use]
    pub fn summary_for(
        &self,
        series: &FundSeries,
        period: Period,
        today: NaiveDate,
    ) -> PerformanceSummary {
        self.derive(self.window(series, period, today))
    }

    /// One details-table row per loaded fund, in selection order.
    #[must_use]
    pub fn performance_rows(
        &self,
        state: &DashboardState,
        period: Period,
        today: NaiveDate,
    ) -> Vec<FundPerformanceRow> {
        state
            .loaded_series()
            .map(|series| FundPerformanceRow {
                scheme_code: series.scheme_code.clone(),
                label: series.display_name(),
                meta: series.meta.clone(),
                summary: self.summary_for(series, period, today),
            })
            .collect()
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places, half away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
