use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::chart::{ChartSeriesConfig, MergedRow, CHART_COLORS};
use crate::models::dashboard::DashboardState;
use crate::models::nav::FundSeries;
use crate::models::period::Period;

/// Builds chart-ready tables from per-fund NAV series.
///
/// The core computes all the numbers; the frontend only renders.
/// Chart data consists of:
/// - One sorted row per calendar date with every fund's NAV on that date
/// - A legend config (label + color) per selected fund
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Merge per-fund series onto one shared timeline.
    ///
    /// Each input point lands in exactly one output row under its fund's
    /// scheme code. Rows come out sorted ascending by date and sparse: a
    /// fund appears in a row only when it has an observation on exactly
    /// that date. If one fund reports two points for the same date, the
    /// later point in series order wins. Empty input yields no rows.
    #[must_use]
    pub fn merge_series<'a, I>(&self, funds: I) -> Vec<MergedRow>
    where
        I: IntoIterator<Item = &'a FundSeries>,
    {
        let mut by_date: BTreeMap<NaiveDate, MergedRow> = BTreeMap::new();

        for series in funds {
            for point in series.points() {
                by_date
                    .entry(point.date)
                    .or_insert_with(|| MergedRow::new(point.date))
                    .navs
                    .insert(series.scheme_code.clone(), point.nav);
            }
        }

        by_date.into_values().collect()
    }

    /// Drop the rows before the period's cutoff. Rows must already be
    /// sorted (as `merge_series` produces them); "max" is a no-op.
    #[must_use]
    pub fn rows_for_period(
        &self,
        mut rows: Vec<MergedRow>,
        period: Period,
        today: NaiveDate,
    ) -> Vec<MergedRow> {
        if let Some(cutoff) = period.cutoff(today) {
            let start = rows.partition_point(|r| r.date < cutoff);
            rows.drain(..start);
        }
        rows
    }

    /// The full chart table for a dashboard: every loaded fund merged,
    /// windowed to the given period.
    #[must_use]
    pub fn merged_rows(
        &self,
        state: &DashboardState,
        period: Period,
        today: NaiveDate,
    ) -> Vec<MergedRow> {
        let rows = self.merge_series(state.loaded_series());
        self.rows_for_period(rows, period, today)
    }

    /// Legend config per selected fund, in selection order. Colors are
    /// assigned by selection index from [`CHART_COLORS`]; funds whose
    /// metadata has not loaded yet get the `Fund {code}` label.
    #[must_use]
    pub fn chart_config(&self, state: &DashboardState) -> Vec<ChartSeriesConfig> {
        state
            .selected()
            .iter()
            .enumerate()
            .map(|(idx, code)| {
                let label = state
                    .series(code)
                    .map_or_else(|| format!("Fund {code}"), |s| s.display_name());
                ChartSeriesConfig {
                    scheme_code: code.clone(),
                    label,
                    color: CHART_COLORS[idx % CHART_COLORS.len()].to_string(),
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
