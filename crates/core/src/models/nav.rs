use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single NAV observation (date → net asset value per unit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

/// Descriptive metadata for a scheme, as reported by the upstream API.
///
/// Every field is optional: the upstream `meta` object may be absent or
/// partial, and a series with no metadata is still chartable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeMeta {
    pub scheme_name: Option<String>,
    pub fund_house: Option<String>,
    pub scheme_category: Option<String>,
}

/// One fund's full NAV history plus its metadata.
///
/// Points are kept sorted ascending by date. The constructor sorts whatever
/// order the upstream returned (newest-first is common); the sort is stable,
/// so two points on the same date keep their arrival order and downstream
/// "last point wins" overwrites resolve by that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSeries {
    /// The scheme code this history was requested for.
    pub scheme_code: String,

    pub meta: SchemeMeta,

    points: Vec<NavPoint>,
}

/// How many words of the scheme name make it into a chart label.
const LABEL_WORDS: usize = 3;

impl FundSeries {
    pub fn new(
        scheme_code: impl Into<String>,
        meta: SchemeMeta,
        mut points: Vec<NavPoint>,
    ) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            scheme_code: scheme_code.into(),
            meta,
            points,
        }
    }

    /// All points, ascending by date.
    #[must_use]
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first_point(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// The most recent NAV on record, if any.
    #[must_use]
    pub fn latest_nav(&self) -> Option<f64> {
        self.points.last().map(|p| p.nav)
    }

    /// The sub-slice of points on or after `cutoff`, preserving order.
    /// `None` means no cutoff: the full history. Binary search, O(log n).
    #[must_use]
    pub fn points_since(&self, cutoff: Option<NaiveDate>) -> &[NavPoint] {
        match cutoff {
            Some(cutoff) => {
                let start = self.points.partition_point(|p| p.date < cutoff);
                &self.points[start..]
            }
            None => &self.points,
        }
    }

    /// Short label for chart legends: the first few words of the scheme
    /// name, or `Fund {code}` when no name was reported.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.meta.scheme_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name
                .split_whitespace()
                .take(LABEL_WORDS)
                .collect::<Vec<_>>()
                .join(" "),
            _ => format!("Fund {}", self.scheme_code),
        }
    }
}
