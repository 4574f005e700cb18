use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::NavProvider;
use crate::errors::CoreError;
use crate::models::nav::{FundSeries, NavPoint, SchemeMeta};

const BASE_URL: &str = "https://api.mfapi.in/mf";

/// mfapi.in provider for Indian mutual-fund NAV histories.
///
/// - **Free**: No API key, no authentication.
/// - **Source**: AMFI NAV data republished as JSON.
/// - **Endpoint**: `/mf/{schemeCode}` returns the scheme's full history,
///   newest first, plus scheme metadata.
///
/// Note: NAV values arrive as decimal strings and dates as `DD-MM-YYYY`;
/// both are validated here so nothing downstream ever sees a half-parsed
/// series.
pub struct MfApiProvider {
    client: Client,
}

impl MfApiProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for MfApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── mfapi.in response types ─────────────────────────────────────────

#[derive(Deserialize)]
struct NavHistoryResponse {
    #[serde(default)]
    status: Option<String>,

    #[serde(default)]
    meta: Option<RawMeta>,

    #[serde(default)]
    data: Vec<RawNavEntry>,
}

// The upstream also sends a numeric `scheme_code` here; the requested
// code is authoritative, so it is not read.
#[derive(Deserialize)]
struct RawMeta {
    #[serde(default)]
    scheme_name: Option<String>,

    #[serde(default)]
    fund_house: Option<String>,

    #[serde(default)]
    scheme_category: Option<String>,
}

#[derive(Deserialize)]
struct RawNavEntry {
    date: String,
    nav: String,
}

/// Parse one raw mfapi.in response body into a date-sorted [`FundSeries`].
///
/// Enforces the upstream contract: `status` must be `"SUCCESS"`, dates are
/// `DD-MM-YYYY`, NAVs are finite non-negative decimal strings. `data` and
/// `meta` may be empty or absent. Any violation fails the whole parse.
pub fn parse_nav_history(scheme_code: &str, body: &str) -> Result<FundSeries, CoreError> {
    let response: NavHistoryResponse = serde_json::from_str(body)?;

    let status = response.status.unwrap_or_else(|| "missing".to_string());
    if status != "SUCCESS" {
        return Err(CoreError::UpstreamStatus {
            scheme_code: scheme_code.to_string(),
            status,
        });
    }

    let mut points = Vec::with_capacity(response.data.len());
    for entry in &response.data {
        let date = NaiveDate::parse_from_str(&entry.date, "%d-%m-%Y").map_err(|_| {
            malformed(scheme_code, format!("unparseable date {:?}", entry.date))
        })?;
        let nav: f64 = entry.nav.trim().parse().map_err(|_| {
            malformed(
                scheme_code,
                format!("unparseable nav {:?} on {}", entry.nav, entry.date),
            )
        })?;
        if !nav.is_finite() || nav < 0.0 {
            return Err(malformed(
                scheme_code,
                format!("nav {nav} on {} is out of range", entry.date),
            ));
        }
        points.push(NavPoint { date, nav });
    }

    let meta = response
        .meta
        .map(|m| SchemeMeta {
            scheme_name: m.scheme_name,
            fund_house: m.fund_house,
            scheme_category: m.scheme_category,
        })
        .unwrap_or_default();

    Ok(FundSeries::new(scheme_code, meta, points))
}

fn malformed(scheme_code: &str, message: String) -> CoreError {
    CoreError::MalformedResponse {
        scheme_code: scheme_code.to_string(),
        message,
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl NavProvider for MfApiProvider {
    fn name(&self) -> &str {
        "MFAPI"
    }

    async fn fetch_history(&self, scheme_code: &str) -> Result<FundSeries, CoreError> {
        let url = format!("{BASE_URL}/{scheme_code}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CoreError::Api {
                provider: "MFAPI".into(),
                message: format!("HTTP {} fetching scheme {scheme_code}", response.status()),
            });
        }

        let body = response.text().await?;
        parse_nav_history(scheme_code, &body)
    }
}
