use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::nav::FundSeries;
use crate::providers::mfapi::MfApiProvider;
use crate::providers::traits::NavProvider;

/// Fetches NAV histories through the configured [`NavProvider`].
///
/// Clones share the same provider, so callers that want several fetches in
/// flight at once can clone the service per fetch and apply the results to
/// the dashboard state with their tickets as they land.
///
/// **Note on precision**: NAVs are `f64` end to end, ~15-17 significant
/// decimal digits. Fine for display and percent-change math; not a ledger.
#[derive(Clone)]
pub struct NavService {
    provider: Arc<dyn NavProvider>,
}

impl NavService {
    /// Service backed by the live mfapi.in provider.
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MfApiProvider::new()),
        }
    }

    /// Service backed by a caller-supplied provider (tests, alternative
    /// data sources).
    pub fn with_provider(provider: Arc<dyn NavProvider>) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch one fund's full history.
    ///
    /// Every provider error (transport, upstream status, malformed fields)
    /// comes back as the per-fund `FetchFailed` message, ready to surface
    /// to the user. An empty history is a success.
    pub async fn fetch_series(&self, scheme_code: &str) -> Result<FundSeries, CoreError> {
        debug!(
            scheme_code,
            provider = self.provider.name(),
            "fetching NAV history"
        );

        match self.provider.fetch_history(scheme_code).await {
            Ok(series) => {
                debug!(scheme_code, points = series.len(), "NAV history loaded");
                Ok(series)
            }
            Err(err) => {
                warn!(scheme_code, error = %err, "NAV fetch failed");
                // Don't re-wrap a provider that already produced the
                // user-facing message.
                if matches!(err, CoreError::FetchFailed { .. }) {
                    Err(err)
                } else {
                    Err(CoreError::FetchFailed {
                        scheme_code: scheme_code.to_string(),
                        message: err.to_string(),
                    })
                }
            }
        }
    }
}

impl Default for NavService {
    fn default() -> Self {
        Self::new()
    }
}
