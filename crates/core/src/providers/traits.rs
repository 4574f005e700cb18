use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::nav::FundSeries;

/// Trait abstraction over the NAV history source.
///
/// The live implementation talks to mfapi.in; tests inject mocks. If the
/// upstream API changes or disappears, only the one implementation is
/// replaced and the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NavProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full NAV history plus metadata for one scheme code.
    ///
    /// An empty history is a valid result. Transport errors, non-success
    /// upstream status, and malformed fields all fail the whole fetch;
    /// implementations never return a partially parsed series.
    async fn fetch_history(&self, scheme_code: &str) -> Result<FundSeries, CoreError>;
}
