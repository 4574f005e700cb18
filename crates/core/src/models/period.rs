use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A chart look-back window, measured relative to "today".
///
/// `cutoff` turns a period into a concrete start date; everything on or
/// after the cutoff belongs to the window. `Max` has no cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    OneMonth,
    ThreeMonths,
    SixMonths,
    YearToDate,
    OneYear,
    ThreeYears,
    FiveYears,
    Max,
}

impl Period {
    /// All periods in display order (shortest window first).
    pub const ALL: [Period; 8] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::YearToDate,
        Period::OneYear,
        Period::ThreeYears,
        Period::FiveYears,
        Period::Max,
    ];

    /// Short code used at the presentation boundary (e.g., "1M", "YTD").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::YearToDate => "YTD",
            Period::OneYear => "1Y",
            Period::ThreeYears => "3Y",
            Period::FiveYears => "5Y",
            Period::Max => "MAX",
        }
    }

    /// Human-readable label (e.g., "1 Month", "Year to Date").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1 Month",
            Period::ThreeMonths => "3 Months",
            Period::SixMonths => "6 Months",
            Period::YearToDate => "Year to Date",
            Period::OneYear => "1 Year",
            Period::ThreeYears => "3 Years",
            Period::FiveYears => "5 Years",
            Period::Max => "Max",
        }
    }

    /// The earliest date inside this window, relative to `today`.
    ///
    /// Month-based windows subtract whole calendar months, clamping at
    /// month ends (Mar 31 minus 1 month is Feb 28/29). `YearToDate` is
    /// January 1 of today's year. Returns `None` for `Max`: no cutoff,
    /// the window is unbounded.
    #[must_use]
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let months_back = match self {
            Period::OneMonth => 1,
            Period::ThreeMonths => 3,
            Period::SixMonths => 6,
            Period::OneYear => 12,
            Period::ThreeYears => 36,
            Period::FiveYears => 60,
            Period::YearToDate => {
                return NaiveDate::from_ymd_opt(today.year(), 1, 1);
            }
            Period::Max => return None,
        };
        today.checked_sub_months(Months::new(months_back))
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::OneYear
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(Period::OneMonth),
            "3M" => Ok(Period::ThreeMonths),
            "6M" => Ok(Period::SixMonths),
            "YTD" => Ok(Period::YearToDate),
            "1Y" => Ok(Period::OneYear),
            "3Y" => Ok(Period::ThreeYears),
            "5Y" => Ok(Period::FiveYears),
            "MAX" => Ok(Period::Max),
            other => Err(CoreError::ValidationError(format!(
                "unknown period code: {other}"
            ))),
        }
    }
}
