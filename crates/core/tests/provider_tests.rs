// ═══════════════════════════════════════════════════════════════════
// Provider Tests — mfapi.in response parsing, NavProvider trait
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use std::sync::Arc;

use fund_comparison_core::errors::CoreError;
use fund_comparison_core::providers::mfapi::{parse_nav_history, MfApiProvider};
use fund_comparison_core::providers::traits::NavProvider;
use fund_comparison_core::services::nav_service::NavService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Successful parses
// ═══════════════════════════════════════════════════════════════════

mod parse_success {
    use super::*;

    const FULL_BODY: &str = r#"{
        "meta": {
            "fund_house": "SBI Mutual Fund",
            "scheme_type": "Open Ended Schemes",
            "scheme_category": "Other Scheme - Index Funds",
            "scheme_code": 120503,
            "scheme_name": "SBI Nifty Index Fund - Direct Plan - Growth"
        },
        "data": [
            { "date": "16-06-2025", "nav": "213.1560" },
            { "date": "13-06-2025", "nav": "211.0917" },
            { "date": "12-06-2025", "nav": "212.0105" }
        ],
        "status": "SUCCESS"
    }"#;

    #[test]
    fn full_response() {
        let series = parse_nav_history("120503", FULL_BODY).unwrap();

        assert_eq!(series.scheme_code, "120503");
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.meta.scheme_name.as_deref(),
            Some("SBI Nifty Index Fund - Direct Plan - Growth")
        );
        assert_eq!(series.meta.fund_house.as_deref(), Some("SBI Mutual Fund"));
        assert_eq!(
            series.meta.scheme_category.as_deref(),
            Some("Other Scheme - Index Funds")
        );
    }

    #[test]
    fn newest_first_input_comes_out_date_sorted() {
        let series = parse_nav_history("120503", FULL_BODY).unwrap();
        let points = series.points();

        assert_eq!(points[0].date, d(2025, 6, 12));
        assert_eq!(points[1].date, d(2025, 6, 13));
        assert_eq!(points[2].date, d(2025, 6, 16));
        assert_eq!(points[0].nav, 212.0105);
        assert_eq!(series.latest_nav(), Some(213.156));
    }

    #[test]
    fn requested_code_wins_over_meta_scheme_code() {
        // The body says scheme_code 120503; the caller asked for 999.
        let series = parse_nav_history("999", FULL_BODY).unwrap();
        assert_eq!(series.scheme_code, "999");
    }

    #[test]
    fn display_name_shortens_scheme_name() {
        let series = parse_nav_history("120503", FULL_BODY).unwrap();
        assert_eq!(series.display_name(), "SBI Nifty Index");
    }

    #[test]
    fn empty_data_is_a_valid_series() {
        let body = r#"{ "meta": null, "data": [], "status": "SUCCESS" }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.latest_nav(), None);
    }

    #[test]
    fn missing_data_key_is_a_valid_series() {
        let body = r#"{ "status": "SUCCESS" }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_meta_falls_back_to_defaults() {
        let body = r#"{
            "data": [ { "date": "16-06-2025", "nav": "213.1560" } ],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert!(series.meta.scheme_name.is_none());
        assert!(series.meta.fund_house.is_none());
        assert_eq!(series.display_name(), "Fund 120503");
    }

    #[test]
    fn null_meta_falls_back_to_defaults() {
        let body = r#"{
            "meta": null,
            "data": [ { "date": "16-06-2025", "nav": "213.1560" } ],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert!(series.meta.scheme_name.is_none());
    }

    #[test]
    fn partial_meta_keeps_known_fields() {
        let body = r#"{
            "meta": { "scheme_name": "HDFC Index Fund-NIFTY 50 Plan" },
            "data": [],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("118989", body).unwrap();
        assert_eq!(
            series.meta.scheme_name.as_deref(),
            Some("HDFC Index Fund-NIFTY 50 Plan")
        );
        assert!(series.meta.fund_house.is_none());
    }

    #[test]
    fn unknown_top_level_fields_ignored() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [],
            "extra": { "anything": [1, 2, 3] }
        }"#;
        assert!(parse_nav_history("120503", body).is_ok());
    }

    #[test]
    fn whitespace_padded_nav_is_trimmed() {
        let body = r#"{
            "data": [ { "date": "16-06-2025", "nav": " 101.5000 " } ],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert_eq!(series.latest_nav(), Some(101.5));
    }

    #[test]
    fn zero_nav_accepted() {
        let body = r#"{
            "data": [ { "date": "16-06-2025", "nav": "0.0000" } ],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert_eq!(series.latest_nav(), Some(0.0));
    }

    #[test]
    fn repeated_dates_all_kept() {
        let body = r#"{
            "data": [
                { "date": "16-06-2025", "nav": "101.0" },
                { "date": "16-06-2025", "nav": "102.0" }
            ],
            "status": "SUCCESS"
        }"#;
        let series = parse_nav_history("120503", body).unwrap();
        assert_eq!(series.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Upstream status handling
// ═══════════════════════════════════════════════════════════════════

mod parse_status {
    use super::*;

    #[test]
    fn non_success_status_rejected() {
        let body = r#"{ "status": "FAIL", "data": [] }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::UpstreamStatus { scheme_code, status } => {
                assert_eq!(scheme_code, "120503");
                assert_eq!(status, "FAIL");
            }
            other => panic!("Expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn status_error_names_the_status() {
        let body = r#"{ "status": "FAIL", "data": [] }"#;
        let err = parse_nav_history("120503", body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "upstream returned status \"FAIL\" for fund 120503"
        );
    }

    #[test]
    fn missing_status_reported_as_missing() {
        let body = r#"{ "data": [] }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::UpstreamStatus { status, .. } => assert_eq!(status, "missing"),
            other => panic!("Expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn status_is_case_sensitive() {
        let body = r#"{ "status": "success", "data": [] }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::UpstreamStatus { .. })
        ));
    }

    #[test]
    fn status_checked_before_data() {
        // A bad entry behind a bad status never gets parsed.
        let body = r#"{
            "status": "FAIL",
            "data": [ { "date": "garbage", "nav": "garbage" } ]
        }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::UpstreamStatus { .. })
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Malformed bodies
// ═══════════════════════════════════════════════════════════════════

mod parse_failures {
    use super::*;

    #[test]
    fn invalid_json() {
        match parse_nav_history("120503", "not json at all").unwrap_err() {
            CoreError::Deserialization(_) => {}
            other => panic!("Expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn truncated_json() {
        let body = r#"{ "status": "SUCCESS", "data": [ { "date": "16-"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn entry_missing_nav_field() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025" } ]
        }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn iso_date_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "2025-06-16", "nav": "101.0" } ]
        }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::MalformedResponse { scheme_code, message } => {
                assert_eq!(scheme_code, "120503");
                assert!(message.contains("unparseable date"));
                assert!(message.contains("2025-06-16"));
            }
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn impossible_date_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "31-02-2025", "nav": "101.0" } ]
        }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn garbage_nav_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025", "nav": "N.A." } ]
        }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::MalformedResponse { message, .. } => {
                assert!(message.contains("unparseable nav"));
                assert!(message.contains("16-06-2025"));
            }
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn empty_nav_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025", "nav": "" } ]
        }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn negative_nav_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025", "nav": "-5.0" } ]
        }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::MalformedResponse { message, .. } => {
                assert!(message.contains("out of range"));
            }
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn infinite_nav_rejected() {
        // "inf" parses as a float but is not a usable NAV.
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025", "nav": "inf" } ]
        }"#;
        match parse_nav_history("120503", body).unwrap_err() {
            CoreError::MalformedResponse { message, .. } => {
                assert!(message.contains("out of range"));
            }
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn nan_nav_rejected() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [ { "date": "16-06-2025", "nav": "NaN" } ]
        }"#;
        assert!(matches!(
            parse_nav_history("120503", body),
            Err(CoreError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn one_bad_entry_fails_the_whole_parse() {
        let body = r#"{
            "status": "SUCCESS",
            "data": [
                { "date": "16-06-2025", "nav": "101.0" },
                { "date": "13-06-2025", "nav": "oops" }
            ]
        }"#;
        assert!(parse_nav_history("120503", body).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Provider construction & trait compliance
// ═══════════════════════════════════════════════════════════════════

mod provider {
    use super::*;

    #[test]
    fn name_is_mfapi() {
        let provider = MfApiProvider::new();
        assert_eq!(provider.name(), "MFAPI");
    }

    #[test]
    fn default_constructs() {
        let provider = MfApiProvider::default();
        assert_eq!(provider.name(), "MFAPI");
    }
}

mod trait_compliance {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn provider_is_send_sync() {
        assert_send_sync::<MfApiProvider>();
        assert_send_sync::<Arc<dyn NavProvider>>();
    }

    #[test]
    fn provider_usable_as_trait_object() {
        let provider: Arc<dyn NavProvider> = Arc::new(MfApiProvider::new());
        assert_eq!(provider.name(), "MFAPI");
    }

    #[test]
    fn provider_injectable_into_nav_service() {
        let service = NavService::with_provider(Arc::new(MfApiProvider::new()));
        assert_eq!(service.provider_name(), "MFAPI");
    }
}
