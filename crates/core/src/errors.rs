use thiserror::Error;

/// Unified error type for the entire fund-comparison-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("upstream returned status {status:?} for fund {scheme_code}")]
    UpstreamStatus {
        scheme_code: String,
        status: String,
    },

    #[error("malformed response for fund {scheme_code}: {message}")]
    MalformedResponse {
        scheme_code: String,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The per-fund failure surfaced to the user. Wraps any of the
    /// transport/status/parse errors above with the offending fund named.
    #[error("Failed to fetch data for fund {scheme_code}: {message}")]
    FetchFailed {
        scheme_code: String,
        message: String,
    },

    // ── Selection / Business Logic ──────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("a maximum of {limit} funds can be compared at once")]
    SelectionFull { limit: usize },

    #[error("fund {scheme_code} is already in the comparison")]
    DuplicateSelection { scheme_code: String },

    #[error("fund {scheme_code} is not in the comparison")]
    FundNotSelected { scheme_code: String },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs embedded in transport errors so
        // log lines never echo request parameters back at the user.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
