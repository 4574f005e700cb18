use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::errors::CoreError;

use super::nav::FundSeries;

/// Upper bound on how many funds can be compared at once.
pub const MAX_SELECTED_FUNDS: usize = 10;

/// Why a fund has no usable series: the failure recorded for its last fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub scheme_code: String,

    /// Human-readable message naming the fund, ready to display.
    pub message: String,
}

/// What the cache knows about one selected fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOutcome {
    Loaded(FundSeries),
    Failed(FetchFailure),
}

impl FetchOutcome {
    #[must_use]
    pub fn series(&self) -> Option<&FundSeries> {
        match self {
            FetchOutcome::Loaded(series) => Some(series),
            FetchOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchOutcome::Loaded(_) => None,
            FetchOutcome::Failed(failure) => Some(failure),
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }
}

/// Identifies one fetch attempt for one fund.
///
/// Every add/refresh bumps the fund's generation and hands out a ticket
/// carrying it; a result is applied only while its ticket is still the
/// fund's current generation. A fetch that outlives a remove (or a
/// remove-then-readd) therefore resolves as stale instead of writing old
/// data over the new selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket {
    pub scheme_code: String,
    pub generation: u64,
}

/// Whether a fetch result was applied to the state or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Applied,
    Stale,
}

/// The dashboard's entire mutable state: which funds are selected, what
/// their last fetch produced, and which fetches are still in flight.
///
/// All transitions are synchronous and pure (no I/O); whoever performs
/// the actual fetch feeds the result back through [`resolve_fetch`] or
/// [`fail_fetch`] with the ticket it was given.
///
/// [`resolve_fetch`]: DashboardState::resolve_fetch
/// [`fail_fetch`]: DashboardState::fail_fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    /// Selected scheme codes in the order the user added them.
    selection: Vec<String>,

    /// scheme code → outcome of its most recently applied fetch.
    cache: HashMap<String, FetchOutcome>,

    /// Scheme codes with a fetch in flight.
    pending: HashSet<String>,

    /// scheme code → current fetch generation. Never reset, even on
    /// removal, so stale in-flight fetches can always be told apart.
    generations: HashMap<String, u64>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Add a fund to the selection and open a fetch for it.
    ///
    /// Rejects empty codes, duplicates, and growth beyond
    /// [`MAX_SELECTED_FUNDS`]. On success the fund is pending and the
    /// returned ticket must accompany the fetch result.
    pub fn add_fund(&mut self, scheme_code: &str) -> Result<FetchTicket, CoreError> {
        let scheme_code = scheme_code.trim();
        if scheme_code.is_empty() {
            return Err(CoreError::ValidationError(
                "scheme code must not be empty".to_string(),
            ));
        }
        if self.is_selected(scheme_code) {
            return Err(CoreError::DuplicateSelection {
                scheme_code: scheme_code.to_string(),
            });
        }
        if self.selection.len() >= MAX_SELECTED_FUNDS {
            return Err(CoreError::SelectionFull {
                limit: MAX_SELECTED_FUNDS,
            });
        }

        self.selection.push(scheme_code.to_string());
        let ticket = self.open_fetch(scheme_code);
        debug!(scheme_code, generation = ticket.generation, "fund added");
        Ok(ticket)
    }

    /// Remove a fund: drops its selection entry, cached outcome, and
    /// pending flag, and bumps its generation so any in-flight fetch
    /// lands stale. Returns `false` if the fund was not selected.
    pub fn remove_fund(&mut self, scheme_code: &str) -> bool {
        let Some(pos) = self.selection.iter().position(|c| c == scheme_code) else {
            return false;
        };
        self.selection.remove(pos);
        self.cache.remove(scheme_code);
        self.pending.remove(scheme_code);
        self.bump_generation(scheme_code);
        debug!(scheme_code, "fund removed");
        true
    }

    /// Open a refresh fetch for an already-selected fund. The cached
    /// outcome stays visible until the refresh resolves.
    pub fn begin_refresh(&mut self, scheme_code: &str) -> Result<FetchTicket, CoreError> {
        if !self.is_selected(scheme_code) {
            return Err(CoreError::FundNotSelected {
                scheme_code: scheme_code.to_string(),
            });
        }
        Ok(self.open_fetch(scheme_code))
    }

    /// Apply a successful fetch, unless its ticket is stale.
    pub fn resolve_fetch(&mut self, ticket: &FetchTicket, series: FundSeries) -> FetchStatus {
        if self.is_stale(ticket) {
            debug!(
                scheme_code = %ticket.scheme_code,
                generation = ticket.generation,
                "dropping stale fetch result"
            );
            return FetchStatus::Stale;
        }
        self.cache
            .insert(ticket.scheme_code.clone(), FetchOutcome::Loaded(series));
        self.pending.remove(&ticket.scheme_code);
        FetchStatus::Applied
    }

    /// Record a failed fetch, unless its ticket is stale. The failure
    /// replaces whatever outcome the fund had; no partial data remains.
    pub fn fail_fetch(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> FetchStatus {
        if self.is_stale(ticket) {
            debug!(
                scheme_code = %ticket.scheme_code,
                generation = ticket.generation,
                "dropping stale fetch failure"
            );
            return FetchStatus::Stale;
        }
        self.cache.insert(
            ticket.scheme_code.clone(),
            FetchOutcome::Failed(FetchFailure {
                scheme_code: ticket.scheme_code.clone(),
                message: message.into(),
            }),
        );
        self.pending.remove(&ticket.scheme_code);
        FetchStatus::Applied
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Selected scheme codes in insertion order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, scheme_code: &str) -> bool {
        self.selection.iter().any(|c| c == scheme_code)
    }

    #[must_use]
    pub fn fund_count(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn outcome(&self, scheme_code: &str) -> Option<&FetchOutcome> {
        self.cache.get(scheme_code)
    }

    /// The loaded series for one fund, if its last fetch succeeded.
    #[must_use]
    pub fn series(&self, scheme_code: &str) -> Option<&FundSeries> {
        self.cache.get(scheme_code).and_then(FetchOutcome::series)
    }

    /// The recorded failure for one fund, if its last fetch failed.
    #[must_use]
    pub fn failure(&self, scheme_code: &str) -> Option<&FetchFailure> {
        self.cache.get(scheme_code).and_then(FetchOutcome::failure)
    }

    /// Every loaded series, in selection order.
    pub fn loaded_series(&self) -> impl Iterator<Item = &FundSeries> {
        self.selection.iter().filter_map(|code| self.series(code))
    }

    /// Every recorded failure, in selection order.
    #[must_use]
    pub fn failures(&self) -> Vec<&FetchFailure> {
        self.selection
            .iter()
            .filter_map(|code| self.failure(code))
            .collect()
    }

    #[must_use]
    pub fn is_pending(&self, scheme_code: &str) -> bool {
        self.pending.contains(scheme_code)
    }

    /// Scheme codes with a fetch still in flight, in selection order.
    #[must_use]
    pub fn pending_funds(&self) -> Vec<&str> {
        self.selection
            .iter()
            .filter(|code| self.pending.contains(*code))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The fund's current fetch generation (0 if never fetched).
    #[must_use]
    pub fn generation(&self, scheme_code: &str) -> u64 {
        self.generations.get(scheme_code).copied().unwrap_or(0)
    }

    // ── Internals ───────────────────────────────────────────────────

    fn open_fetch(&mut self, scheme_code: &str) -> FetchTicket {
        let generation = self.bump_generation(scheme_code);
        self.pending.insert(scheme_code.to_string());
        FetchTicket {
            scheme_code: scheme_code.to_string(),
            generation,
        }
    }

    fn bump_generation(&mut self, scheme_code: &str) -> u64 {
        let counter = self.generations.entry(scheme_code.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    fn is_stale(&self, ticket: &FetchTicket) -> bool {
        !self.is_selected(&ticket.scheme_code)
            || self.generation(&ticket.scheme_code) != ticket.generation
    }
}
