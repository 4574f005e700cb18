use crate::models::fund::{ComparisonTable, FundColumn, FundRecord, MetricRow};
use crate::models::settings::MetricVisibility;

/// Read-only operations over the static fund catalog.
///
/// Pure business logic, no I/O. The catalog itself is owned by the
/// facade; this service only borrows it.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Records matching a search query (case-insensitive over name and
    /// ticker), in catalog order. The empty query matches everything.
    #[must_use]
    pub fn search<'a>(&self, records: &'a [FundRecord], query: &str) -> Vec<&'a FundRecord> {
        records
            .iter()
            .filter(|record| record.matches_query(query))
            .collect()
    }

    #[must_use]
    pub fn find<'a>(&self, records: &'a [FundRecord], id: &str) -> Option<&'a FundRecord> {
        records.iter().find(|record| record.id == id)
    }

    /// Assemble the side-by-side comparison table for a set of record ids.
    ///
    /// Funds keep catalog order regardless of the order ids were passed
    /// in; unknown ids are skipped. Rows cover exactly the visible
    /// metrics, values aligned with the fund columns.
    #[must_use]
    pub fn comparison_table(
        &self,
        records: &[FundRecord],
        ids: &[String],
        visibility: &MetricVisibility,
    ) -> ComparisonTable {
        let selected: Vec<&FundRecord> = records
            .iter()
            .filter(|record| ids.contains(&record.id))
            .collect();

        let funds = selected
            .iter()
            .map(|record| FundColumn {
                id: record.id.clone(),
                ticker: record.ticker.clone(),
                name: record.name.clone(),
                category: record.category.clone(),
            })
            .collect();

        let rows = visibility
            .visible_metrics()
            .into_iter()
            .map(|metric| MetricRow {
                metric,
                label: metric.label().to_string(),
                values: selected.iter().map(|record| metric.value_of(record)).collect(),
            })
            .collect();

        ComparisonTable { funds, rows }
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
