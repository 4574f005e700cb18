use serde::{Deserialize, Serialize};

/// Qualitative risk tier of a fund, alongside its 1-5 numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    BelowAverage,
    Average,
    AboveAverage,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::BelowAverage => write!(f, "Below Average"),
            RiskLevel::Average => write!(f, "Average"),
            RiskLevel::AboveAverage => write!(f, "Above Average"),
        }
    }
}

/// Static reference data for one fund in the comparison table.
///
/// Immutable once loaded; the comparison view only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub category: String,

    /// Annual fee as a percentage of assets
    pub expense_ratio: f64,

    /// Assets under management, in billions of dollars
    pub aum: f64,

    /// Trailing returns, in percent (1y+ horizons annualized)
    pub ytd_return: f64,
    pub one_year_return: f64,
    pub three_year_return: f64,
    pub five_year_return: f64,
    pub ten_year_return: f64,

    pub risk: RiskLevel,

    /// 1-5 bar rating matching `risk`
    pub risk_rating: u8,

    /// 1-5 stars
    pub morningstar_rating: u8,

    /// Minimum initial investment in dollars; 0 means none
    pub min_investment: f64,

    /// Percentage of holdings replaced per year
    pub turnover_rate: f64,

    /// Trailing dividend yield, in percent
    pub dividend_yield: f64,
}

impl FundRecord {
    /// Case-insensitive substring match over name and ticker.
    /// The empty query matches every record.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.ticker.to_lowercase().contains(&query)
    }
}

/// The toggleable metric columns of the comparison table.
/// Category is always shown and is not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    ExpenseRatio,
    Aum,
    YtdReturn,
    OneYearReturn,
    ThreeYearReturn,
    FiveYearReturn,
    TenYearReturn,
    Risk,
    MorningstarRating,
    MinInvestment,
    TurnoverRate,
    DividendYield,
}

impl Metric {
    /// All metrics in table display order.
    pub const ALL: [Metric; 12] = [
        Metric::ExpenseRatio,
        Metric::Aum,
        Metric::YtdReturn,
        Metric::OneYearReturn,
        Metric::ThreeYearReturn,
        Metric::FiveYearReturn,
        Metric::TenYearReturn,
        Metric::Risk,
        Metric::MorningstarRating,
        Metric::MinInvestment,
        Metric::TurnoverRate,
        Metric::DividendYield,
    ];

    /// Row label shown in the comparison table.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Metric::ExpenseRatio => "Expense Ratio",
            Metric::Aum => "AUM ($ Billions)",
            Metric::YtdReturn => "YTD Return",
            Metric::OneYearReturn => "1-Year Return",
            Metric::ThreeYearReturn => "3-Year Return (Annualized)",
            Metric::FiveYearReturn => "5-Year Return (Annualized)",
            Metric::TenYearReturn => "10-Year Return (Annualized)",
            Metric::Risk => "Risk Level",
            Metric::MorningstarRating => "Morningstar Rating",
            Metric::MinInvestment => "Minimum Investment",
            Metric::TurnoverRate => "Turnover Rate",
            Metric::DividendYield => "Dividend Yield",
        }
    }

    /// This metric's value for one fund, typed for rendering.
    #[must_use]
    pub fn value_of(&self, fund: &FundRecord) -> MetricValue {
        match self {
            Metric::ExpenseRatio => MetricValue::Percent(fund.expense_ratio),
            Metric::Aum => MetricValue::Billions(fund.aum),
            Metric::YtdReturn => MetricValue::Return(fund.ytd_return),
            Metric::OneYearReturn => MetricValue::Return(fund.one_year_return),
            Metric::ThreeYearReturn => MetricValue::Return(fund.three_year_return),
            Metric::FiveYearReturn => MetricValue::Return(fund.five_year_return),
            Metric::TenYearReturn => MetricValue::Return(fund.ten_year_return),
            Metric::Risk => MetricValue::Risk {
                level: fund.risk,
                rating: fund.risk_rating,
            },
            Metric::MorningstarRating => MetricValue::Rating(fund.morningstar_rating),
            Metric::MinInvestment => MetricValue::Money(fund.min_investment),
            Metric::TurnoverRate => MetricValue::Percent(fund.turnover_rate),
            Metric::DividendYield => MetricValue::Percent(fund.dividend_yield),
        }
    }
}

/// A single cell of the comparison table, typed so the frontend knows how
/// to render it (sign coloring, star count, risk bars, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// Plain percentage (expense ratio, turnover, yield)
    Percent(f64),

    /// Signed return percentage, rendered with an explicit `+` when positive
    Return(f64),

    /// Dollar billions (AUM)
    Billions(f64),

    /// Dollar amount; 0 renders as "None" (minimum investment)
    Money(f64),

    /// 1-5 star rating
    Rating(u8),

    /// Risk tier plus its 1-5 bar rating
    Risk { level: RiskLevel, rating: u8 },
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Percent(v) => write!(f, "{v}%"),
            MetricValue::Return(v) => {
                if *v >= 0.0 {
                    write!(f, "+{v}%")
                } else {
                    write!(f, "{v}%")
                }
            }
            MetricValue::Billions(v) => write!(f, "${v:.1}B"),
            MetricValue::Money(v) => {
                if *v == 0.0 {
                    write!(f, "None")
                } else {
                    write!(f, "${v:.0}")
                }
            }
            MetricValue::Rating(stars) => write!(f, "{stars}/5"),
            MetricValue::Risk { level, rating } => write!(f, "{level} ({rating}/5)"),
        }
    }
}

/// Column header data for one selected fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundColumn {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub category: String,
}

/// One row of the comparison table: a metric and its value per selected
/// fund, aligned with the table's fund columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: String,
    pub values: Vec<MetricValue>,
}

/// The assembled side-by-side comparison table.
///
/// Funds appear in catalog order; rows cover the visible metrics in
/// [`Metric::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub funds: Vec<FundColumn>,
    pub rows: Vec<MetricRow>,
}

impl ComparisonTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}
