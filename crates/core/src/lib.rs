pub mod errors;
pub mod fixtures;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use chrono::NaiveDate;
use models::{
    chart::{ChartSeriesConfig, MergedRow},
    dashboard::{DashboardState, FetchFailure, FetchStatus, FetchTicket},
    fund::{ComparisonTable, FundRecord, Metric},
    nav::FundSeries,
    performance::{FundPerformanceRow, PerformanceSummary},
    period::Period,
    settings::{DashboardSettings, ViewMode},
};
use providers::traits::NavProvider;
use services::{
    catalog_service::CatalogService, chart_service::ChartService, nav_service::NavService,
    performance_service::PerformanceService,
};

use errors::CoreError;

/// Main entry point for the fund-comparison core library.
/// Holds the catalog, the dashboard state, and all services that operate
/// on them; the frontend renders what this struct computes.
#[must_use]
pub struct FundComparison {
    catalog: Vec<FundRecord>,
    state: DashboardState,
    settings: DashboardSettings,
    nav_service: NavService,
    chart_service: ChartService,
    performance_service: PerformanceService,
    catalog_service: CatalogService,
}

impl std::fmt::Debug for FundComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundComparison")
            .field("catalog_records", &self.catalog.len())
            .field("selected_funds", &self.state.fund_count())
            .field("pending_funds", &self.state.pending_funds().len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl FundComparison {
    /// Create a dashboard with an empty catalog.
    pub fn new() -> Self {
        Self::build(Vec::new())
    }

    /// Create a dashboard over a caller-supplied catalog.
    pub fn with_catalog(catalog: Vec<FundRecord>) -> Self {
        Self::build(catalog)
    }

    /// Create a dashboard preloaded with the built-in sample catalog.
    pub fn with_sample_data() -> Self {
        Self::build(fixtures::sample_fund_records())
    }

    /// Swap the NAV data source (tests, alternative providers).
    pub fn set_nav_provider(&mut self, provider: Arc<dyn NavProvider>) {
        self.nav_service = NavService::with_provider(provider);
    }

    // ── Catalog & Comparison Table ──────────────────────────────────

    /// The full static catalog.
    #[must_use]
    pub fn get_catalog(&self) -> &[FundRecord] {
        &self.catalog
    }

    /// Catalog records matching a query (case-insensitive over name and
    /// ticker), in catalog order.
    #[must_use]
    pub fn search_funds(&self, query: &str) -> Vec<&FundRecord> {
        self.catalog_service.search(&self.catalog, query)
    }

    /// Look up one catalog record by id.
    #[must_use]
    pub fn get_fund_record(&self, id: &str) -> Option<&FundRecord> {
        self.catalog_service.find(&self.catalog, id)
    }

    /// The side-by-side comparison table for a set of catalog ids,
    /// honoring the current metric visibility.
    #[must_use]
    pub fn get_comparison_table(&self, ids: &[String]) -> ComparisonTable {
        self.catalog_service
            .comparison_table(&self.catalog, ids, &self.settings.metrics)
    }

    // ── Fund Selection ──────────────────────────────────────────────

    /// Add a fund to the comparison. Rejects duplicates and growth past
    /// the selection cap; on success the fund is pending and the ticket
    /// identifies its fetch.
    pub fn add_fund(&mut self, scheme_code: &str) -> Result<FetchTicket, CoreError> {
        self.state.add_fund(scheme_code)
    }

    /// Remove a fund and everything cached for it. Returns `false` if it
    /// was not selected.
    pub fn remove_fund(&mut self, scheme_code: &str) -> bool {
        self.state.remove_fund(scheme_code)
    }

    /// Selected scheme codes in the order they were added.
    #[must_use]
    pub fn get_selected_funds(&self) -> &[String] {
        self.state.selected()
    }

    #[must_use]
    pub fn is_selected(&self, scheme_code: &str) -> bool {
        self.state.is_selected(scheme_code)
    }

    #[must_use]
    pub fn fund_count(&self) -> usize {
        self.state.fund_count()
    }

    // ── Data Loading ────────────────────────────────────────────────

    /// Perform the fetch a ticket stands for and apply the outcome.
    ///
    /// On failure the state records the per-fund failure (unless the
    /// ticket went stale meanwhile) and the error is returned for the
    /// caller to surface. Other funds are never touched.
    pub async fn load_fund(&mut self, ticket: &FetchTicket) -> Result<FetchStatus, CoreError> {
        match self.nav_service.fetch_series(&ticket.scheme_code).await {
            Ok(series) => Ok(self.state.resolve_fetch(ticket, series)),
            Err(err) => {
                self.state.fail_fetch(ticket, err.to_string());
                Err(err)
            }
        }
    }

    /// Add a fund and immediately load its history.
    pub async fn track_fund(&mut self, scheme_code: &str) -> Result<FetchStatus, CoreError> {
        let ticket = self.state.add_fund(scheme_code)?;
        self.load_fund(&ticket).await
    }

    /// Open a refresh fetch for an already-selected fund without
    /// performing it. The ticket goes to whoever runs the fetch.
    pub fn begin_refresh(&mut self, scheme_code: &str) -> Result<FetchTicket, CoreError> {
        self.state.begin_refresh(scheme_code)
    }

    /// Re-fetch one selected fund's history and apply the outcome.
    pub async fn refresh_fund(&mut self, scheme_code: &str) -> Result<FetchStatus, CoreError> {
        let ticket = self.state.begin_refresh(scheme_code)?;
        self.load_fund(&ticket).await
    }

    /// Re-fetch every selected fund, one at a time. Failures are
    /// collected per fund and never interrupt the rest.
    pub async fn refresh_all(&mut self) -> Vec<(String, CoreError)> {
        let codes: Vec<String> = self.state.selected().to_vec();
        let mut failures = Vec::new();

        for code in codes {
            if let Err(err) = self.refresh_fund(&code).await {
                failures.push((code, err));
            }
        }

        failures
    }

    /// Apply an externally performed fetch. Callers that want several
    /// fetches in flight clone [`nav_service`], run the fetches, and feed
    /// each result back here with its ticket.
    ///
    /// [`nav_service`]: Self::nav_service
    pub fn apply_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FundSeries, CoreError>,
    ) -> FetchStatus {
        match result {
            Ok(series) => self.state.resolve_fetch(ticket, series),
            Err(err) => self.state.fail_fetch(ticket, err.to_string()),
        }
    }

    /// A handle on the NAV fetcher sharing this dashboard's provider.
    #[must_use]
    pub fn nav_service(&self) -> NavService {
        self.nav_service.clone()
    }

    /// The loaded series for one fund, if its last fetch succeeded.
    #[must_use]
    pub fn get_fund_series(&self, scheme_code: &str) -> Option<&FundSeries> {
        self.state.series(scheme_code)
    }

    /// Recorded per-fund fetch failures, in selection order.
    #[must_use]
    pub fn get_fetch_failures(&self) -> Vec<&FetchFailure> {
        self.state.failures()
    }

    /// Scheme codes with a fetch still in flight, in selection order.
    #[must_use]
    pub fn get_pending_funds(&self) -> Vec<&str> {
        self.state.pending_funds()
    }

    /// `true` while any fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.has_pending()
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Current dashboard settings.
    #[must_use]
    pub fn get_settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn set_period(&mut self, period: Period) {
        self.settings.period = period;
    }

    #[must_use]
    pub fn get_period(&self) -> Period {
        self.settings.period
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.settings.view_mode = view_mode;
    }

    #[must_use]
    pub fn get_view_mode(&self) -> ViewMode {
        self.settings.view_mode
    }

    /// Flip one comparison-table metric; returns the new visibility.
    pub fn toggle_metric(&mut self, metric: Metric) -> bool {
        self.settings.metrics.toggle(metric)
    }

    /// The visible metrics in table display order.
    #[must_use]
    pub fn get_visible_metrics(&self) -> Vec<Metric> {
        self.settings.metrics.visible_metrics()
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// The merged chart table for every loaded fund, windowed to the
    /// current period relative to today.
    #[must_use]
    pub fn get_chart_rows(&self) -> Vec<MergedRow> {
        self.get_chart_rows_for(self.settings.period, Self::today())
    }

    /// Same as [`get_chart_rows`], with the period and reference date
    /// supplied by the caller.
    ///
    /// [`get_chart_rows`]: Self::get_chart_rows
    #[must_use]
    pub fn get_chart_rows_for(&self, period: Period, today: NaiveDate) -> Vec<MergedRow> {
        self.chart_service.merged_rows(&self.state, period, today)
    }

    /// Legend config (label + color) per selected fund, in selection
    /// order.
    #[must_use]
    pub fn get_chart_config(&self) -> Vec<ChartSeriesConfig> {
        self.chart_service.chart_config(&self.state)
    }

    // ── Performance ─────────────────────────────────────────────────

    /// One fund's performance over the current period, if it is loaded.
    #[must_use]
    pub fn get_performance(&self, scheme_code: &str) -> Option<PerformanceSummary> {
        self.get_performance_for(scheme_code, self.settings.period, Self::today())
    }

    /// One fund's performance over an explicit window.
    #[must_use]
    pub fn get_performance_for(
        &self,
        scheme_code: &str,
        period: Period,
        today: NaiveDate,
    ) -> Option<PerformanceSummary> {
        self.state
            .series(scheme_code)
            .map(|series| self.performance_service.summary_for(series, period, today))
    }

    /// The details-table rows for every loaded fund over the current
    /// period, in selection order.
    #[must_use]
    pub fn get_performance_rows(&self) -> Vec<FundPerformanceRow> {
        self.get_performance_rows_for(self.settings.period, Self::today())
    }

    /// Same as [`get_performance_rows`], with the window supplied.
    ///
    /// [`get_performance_rows`]: Self::get_performance_rows
    #[must_use]
    pub fn get_performance_rows_for(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> Vec<FundPerformanceRow> {
        self.performance_service
            .performance_rows(&self.state, period, today)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(catalog: Vec<FundRecord>) -> Self {
        Self {
            catalog,
            state: DashboardState::new(),
            settings: DashboardSettings::default(),
            nav_service: NavService::new(),
            chart_service: ChartService::new(),
            performance_service: PerformanceService::new(),
            catalog_service: CatalogService::new(),
        }
    }

    fn today() -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

impl Default for FundComparison {
    fn default() -> Self {
        Self::new()
    }
}
