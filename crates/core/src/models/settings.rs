use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::fund::Metric;
use super::period::Period;

/// How the NAV comparison charts are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// One chart with every selected fund overlaid
    Combined,
    /// A small chart per fund
    Individual,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Combined
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Combined => write!(f, "Combined"),
            ViewMode::Individual => write!(f, "Individual"),
        }
    }
}

/// Which metric rows the comparison table currently shows.
///
/// Defaults to everything visible except turnover rate and dividend yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricVisibility {
    visible: HashSet<Metric>,
}

impl Default for MetricVisibility {
    fn default() -> Self {
        let visible = Metric::ALL
            .into_iter()
            .filter(|m| !matches!(m, Metric::TurnoverRate | Metric::DividendYield))
            .collect();
        Self { visible }
    }
}

impl MetricVisibility {
    /// All metrics visible.
    #[must_use]
    pub fn all() -> Self {
        Self {
            visible: Metric::ALL.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_visible(&self, metric: Metric) -> bool {
        self.visible.contains(&metric)
    }

    pub fn show(&mut self, metric: Metric) {
        self.visible.insert(metric);
    }

    pub fn hide(&mut self, metric: Metric) {
        self.visible.remove(&metric);
    }

    /// Flip one metric; returns the new visibility.
    pub fn toggle(&mut self, metric: Metric) -> bool {
        if self.visible.remove(&metric) {
            false
        } else {
            self.visible.insert(metric);
            true
        }
    }

    /// The visible metrics in table display order.
    #[must_use]
    pub fn visible_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.visible.contains(m))
            .collect()
    }
}

/// User-tweakable dashboard state. Lives only for the session; nothing is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Chart look-back window (defaults to 1 year)
    pub period: Period,

    /// Combined or per-fund charts
    pub view_mode: ViewMode,

    /// Comparison-table metric toggles
    pub metrics: MetricVisibility,
}
