//! Catalog, validation and calculation endpoint tests.

use matching_client::{Error, LegInput, LegType};
use matching_tests::{covered_call_legs, create_test_client};

#[tokio::test]
async fn test_catalog_order() {
    let client = create_test_client().expect("Failed to create client");

    let catalog = client.get_catalog().await.expect("Failed to get catalog");
    let shapes: Vec<&str> = catalog.shapes.iter().map(|s| s.shape.as_str()).collect();

    assert_eq!(shapes, vec!["1B", "1D", "1A", "1C", "2B", "2A", "2C", "2D"]);
    assert!(catalog.shapes.iter().all(|s| s.target.iter().sum::<u64>() == 2));
}

#[tokio::test]
async fn test_calculate_covered_call() {
    let client = create_test_client().expect("Failed to create client");

    let response = client
        .calculate(covered_call_legs())
        .await
        .expect("Calculation failed");

    let covered_call = &response.report.available_combinations["1B"];
    assert_eq!(covered_call.count, 1);
    assert_eq!(covered_call.details[0].code, "BABA 210205C00055000");
    assert_eq!(covered_call.details[1].code, "BABA");
    assert!(response.report.non_available_combinations.is_empty());
    assert_eq!(response.report.remaining_legs.len(), 1);
    assert_eq!(response.report.remaining_legs[0].count, 99);
}

#[tokio::test]
async fn test_calculate_pending_only_combinations() {
    let client = create_test_client().expect("Failed to create client");

    let response = client
        .calculate(vec![
            LegInput::uncoded(LegType::LongCall, 1, 0),
            LegInput::uncoded(LegType::ShortCall, 0, 1),
            LegInput::uncoded(LegType::LongPut, 0, 1),
        ])
        .await
        .expect("Calculation failed");

    assert!(response.report.available_combinations.is_empty());
    assert_eq!(response.report.non_available_combinations["2B"].count, 1);
    // Leftovers come from the run that includes pending orders
    assert_eq!(response.report.remaining_legs[0].leg_type, "long Put");
    assert_eq!(response.inventory.total, vec![1, 1, 1, 0, 0, 0]);
}

#[tokio::test]
async fn test_calculate_rejects_invalid_codes() {
    let client = create_test_client().expect("Failed to create client");

    let result = client
        .calculate(vec![
            LegInput::new(LegType::LongStock, "baba", 1, 0),
            LegInput::new(LegType::ShortCall, "BABA", 1, 0),
        ])
        .await;

    match result {
        Err(Error::InvalidRequest { code, issues, .. }) => {
            assert_eq!(code, "INVALID_LEGS");
            assert_eq!(issues.len(), 2);
            assert_eq!(issues[0].code, "INVALID_STOCK_CODE");
            assert_eq!(issues[1].code, "INVALID_OPTION_CODE");
        }
        other => panic!("expected invalid legs, got {other:?}"),
    }
}

#[tokio::test]
async fn test_calculate_rejects_empty_request() {
    let client = create_test_client().expect("Failed to create client");

    let result = client.calculate(Vec::new()).await;

    assert!(matches!(
        result,
        Err(Error::InvalidRequest { ref code, .. }) if code == "INVALID_REQUEST"
    ));
}

#[tokio::test]
async fn test_validate_legs() {
    let client = create_test_client().expect("Failed to create client");

    let response = client
        .validate_legs(vec![
            LegInput::new(LegType::ShortPut, "BABA 210205P00050000", 1, 0),
            LegInput::new(LegType::ShortStock, "TOOLONG", 1, 0),
        ])
        .await
        .expect("Validation failed");

    assert!(!response.valid);
    assert_eq!(response.leg_count, 2);
    assert_eq!(response.issues.len(), 1);
    assert_eq!(response.issues[0].index, 1);
}
