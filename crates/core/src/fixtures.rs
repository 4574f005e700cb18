//! Read-only sample data, exposed as constructor functions rather than
//! module-level statics so each caller owns its copy.

use crate::models::fund::{FundRecord, RiskLevel};

/// The built-in comparison-table catalog: five well-known US funds.
#[must_use]
pub fn sample_fund_records() -> Vec<FundRecord> {
    vec![
        FundRecord {
            id: "1".to_string(),
            name: "Vanguard Total Stock Market Index Fund".to_string(),
            ticker: "VTSAX".to_string(),
            category: "Large Blend".to_string(),
            expense_ratio: 0.04,
            aum: 1300.5,
            ytd_return: 12.8,
            one_year_return: 15.2,
            three_year_return: 9.7,
            five_year_return: 11.3,
            ten_year_return: 12.1,
            risk: RiskLevel::Average,
            risk_rating: 3,
            morningstar_rating: 5,
            min_investment: 3000.0,
            turnover_rate: 2.8,
            dividend_yield: 1.35,
        },
        FundRecord {
            id: "2".to_string(),
            name: "Fidelity 500 Index Fund".to_string(),
            ticker: "FXAIX".to_string(),
            category: "Large Blend".to_string(),
            expense_ratio: 0.015,
            aum: 425.7,
            ytd_return: 13.1,
            one_year_return: 16.4,
            three_year_return: 10.2,
            five_year_return: 11.8,
            ten_year_return: 12.3,
            risk: RiskLevel::Average,
            risk_rating: 3,
            morningstar_rating: 5,
            min_investment: 0.0,
            turnover_rate: 2.1,
            dividend_yield: 1.42,
        },
        FundRecord {
            id: "3".to_string(),
            name: "T. Rowe Price Blue Chip Growth Fund".to_string(),
            ticker: "TRBCX".to_string(),
            category: "Large Growth".to_string(),
            expense_ratio: 0.69,
            aum: 89.3,
            ytd_return: 14.5,
            one_year_return: 18.7,
            three_year_return: 8.9,
            five_year_return: 12.5,
            ten_year_return: 13.8,
            risk: RiskLevel::AboveAverage,
            risk_rating: 4,
            morningstar_rating: 4,
            min_investment: 2500.0,
            turnover_rate: 37.2,
            dividend_yield: 0.12,
        },
        FundRecord {
            id: "4".to_string(),
            name: "American Funds Washington Mutual Investors Fund".to_string(),
            ticker: "AWSHX".to_string(),
            category: "Large Value".to_string(),
            expense_ratio: 0.58,
            aum: 145.2,
            ytd_return: 9.8,
            one_year_return: 12.3,
            three_year_return: 7.5,
            five_year_return: 9.1,
            ten_year_return: 10.2,
            risk: RiskLevel::BelowAverage,
            risk_rating: 2,
            morningstar_rating: 4,
            min_investment: 250.0,
            turnover_rate: 22.5,
            dividend_yield: 2.05,
        },
        FundRecord {
            id: "5".to_string(),
            name: "Vanguard Mid-Cap Index Fund".to_string(),
            ticker: "VIMAX".to_string(),
            category: "Mid-Cap Blend".to_string(),
            expense_ratio: 0.05,
            aum: 152.8,
            ytd_return: 10.2,
            one_year_return: 11.8,
            three_year_return: 8.3,
            five_year_return: 9.7,
            ten_year_return: 10.5,
            risk: RiskLevel::Average,
            risk_rating: 3,
            morningstar_rating: 4,
            min_investment: 3000.0,
            turnover_rate: 15.8,
            dividend_yield: 1.48,
        },
    ]
}

/// The two catalog ids the comparison table starts with.
#[must_use]
pub fn default_comparison_ids() -> Vec<String> {
    vec!["1".to_string(), "2".to_string()]
}

/// Well-known scheme codes for trying out the NAV comparison
/// (all Nifty index funds). The demo flow preloads the first three.
#[must_use]
pub fn sample_scheme_codes() -> Vec<String> {
    [
        "153330", // Angel One Nifty Total Market Index Fund
        "120503", // SBI Nifty Index Fund
        "118989", // HDFC Index Fund-NIFTY 50 Plan
        "120716", // UTI Nifty Index Fund
        "125497", // Nippon India Index Fund - Nifty Plan
        "148617", // Motilal Oswal Nifty 500 Index Fund
        "147020", // ICICI Prudential Nifty Index Fund
        "125354", // Tata Index Fund Nifty Plan
        "118560", // Franklin India Index Fund - NSE Nifty Plan
        "119598", // Aditya Birla Sun Life Index Fund
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
