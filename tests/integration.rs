//! Integration tests for the tool rental engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - The reference checkout scenarios
//! - Holiday and weekend classification in the day schedule
//! - Validation failures
//! - The plain text printout
//! - The file-backed catalog

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use tool_rental::api::{AppState, MAX_SCHEDULE_DAYS, create_router};
use tool_rental::catalog::ToolTable;
use tool_rental::checkout::CheckoutService;
use tool_rental::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(CheckoutService::with_defaults(
        ToolTable::builtin(),
    )))
}

fn create_router_from_config() -> Router {
    let config = ConfigLoader::load("./config/catalog").expect("Failed to load config");
    create_router(AppState::new(CheckoutService::from_config(config)))
}

fn checkout_body(tool_code: &str, checkout_date: &str, rental_days: i64, discount: i64) -> Value {
    json!({
        "tool_code": tool_code,
        "checkout_date": checkout_date,
        "rental_days": rental_days,
        "discount_percent": discount
    })
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_checkout(router: Router, body: Value) -> (StatusCode, Value) {
    let (status, body) = post(router, "/checkout", body).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_print(router: Router, body: Value) -> (StatusCode, String) {
    let (status, body) = post(router, "/checkout/print", body).await;
    (status, String::from_utf8(body).unwrap())
}

/// Asserts the priced agreement of a successful checkout. Amounts are
/// compared as wire strings, so the number of decimal places counts.
fn assert_priced(
    result: &Value,
    chargeable_days: u64,
    pre_discount: &str,
    discount: &str,
    final_charge: &str,
) {
    let agreement = &result["agreement"];
    assert_eq!(agreement["chargeable_days"], chargeable_days);
    assert_eq!(agreement["pre_discount_charge"], pre_discount);
    assert_eq!(agreement["discount_amount"], discount);
    assert_eq!(agreement["final_charge"], final_charge);
}

// =============================================================================
// SECTION 1: Reference Scenarios
// =============================================================================

#[tokio::test]
async fn test_jakr_discount_over_100_rejected() {
    let (status, error) = post_checkout(
        create_router_for_test(),
        checkout_body("JAKR", "2015-09-03", 5, 101),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(
        error["details"],
        json!(["discount percent must be between 0 and 100, got 101"])
    );
}

#[tokio::test]
async fn test_ladw_2020_independence_day() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("LADW", "2020-07-02", 3, 10),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["agreement"]["due_date"], "2020-07-05");
    assert_priced(&result, 2, "3.98", "0.40", "3.58");
}

#[tokio::test]
async fn test_chns_2015_independence_day() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("CHNS", "2015-07-02", 5, 25),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["agreement"]["due_date"], "2015-07-07");
    assert_priced(&result, 3, "4.47", "1.12", "3.35");
}

#[tokio::test]
async fn test_jakd_2015_labor_day() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("JAKD", "2015-09-03", 6, 0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["agreement"]["due_date"], "2015-09-09");
    assert_priced(&result, 3, "8.97", "0.00", "8.97");
}

#[tokio::test]
async fn test_jakr_2015_independence_day_nine_days() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("JAKR", "2015-07-02", 9, 0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["agreement"]["due_date"], "2015-07-11");
    assert_priced(&result, 5, "14.95", "0.00", "14.95");
}

#[tokio::test]
async fn test_jakr_2020_independence_day_half_off() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("JAKR", "2020-07-02", 4, 50),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["agreement"]["due_date"], "2020-07-06");
    assert_priced(&result, 1, "2.99", "1.50", "1.49");
}

#[tokio::test]
async fn test_chns_2021_sunday_holiday_shifted_to_monday() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("CHNS", "2021-07-03", 1, 0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_priced(&result, 0, "0.00", "0.00", "0.00");
}

// =============================================================================
// SECTION 2: Day Schedule
// =============================================================================

#[tokio::test]
async fn test_schedule_marks_observed_holiday_and_weekend() {
    let (_, result) = post_checkout(
        create_router_for_test(),
        checkout_body("JAKR", "2015-07-02", 9, 0),
    )
    .await;

    let days = result["day_charges"].as_array().unwrap();
    assert_eq!(days.len(), 9);

    // Friday 07-03 is the observed Independence Day
    assert_eq!(days[0]["date"], "2015-07-03");
    assert_eq!(days[0]["day_type"], "observed_holiday");
    assert_eq!(days[0]["charged"], false);

    // Saturday 07-04 itself is an ordinary weekend day
    assert_eq!(days[1]["date"], "2015-07-04");
    assert_eq!(days[1]["day_type"], "weekend");

    assert_eq!(days[3]["day_type"], "weekday");
    assert_eq!(days[3]["charged"], true);
}

#[tokio::test]
async fn test_schedule_never_includes_checkout_date() {
    let (_, result) = post_checkout(
        create_router_for_test(),
        checkout_body("LADW", "2015-09-06", 2, 0),
    )
    .await;

    let days = result["day_charges"].as_array().unwrap();
    assert_eq!(days[0]["date"], "2015-09-07");
    // Labor Day 2015 is not billed for ladders
    assert_eq!(days[0]["day_type"], "observed_holiday");
    assert_eq!(days[0]["charged"], false);
    assert_eq!(result["agreement"]["chargeable_days"], 1);
}

#[tokio::test]
async fn test_long_rental_schedule_is_cut_off() {
    let (status, result) = post_checkout(
        create_router_for_test(),
        checkout_body("LADW", "2015-07-02", 5_000, 0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule_truncated"], true);
    let days = result["day_charges"].as_array().unwrap();
    assert_eq!(days.len(), MAX_SCHEDULE_DAYS);
    assert_eq!(days.last().unwrap()["date"], "2016-07-02");
    // The agreement still prices the whole rental
    assert_eq!(result["agreement"]["due_date"], "2029-03-10");
}

#[tokio::test]
async fn test_checkout_id_is_unique_per_request() {
    let router = create_router_for_test();
    let (_, first) = post_checkout(router.clone(), checkout_body("CHNS", "2015-07-02", 5, 25)).await;
    let (_, second) = post_checkout(router, checkout_body("CHNS", "2015-07-02", 5, 25)).await;

    assert_ne!(first["checkout_id"], second["checkout_id"]);
    assert_eq!(first["agreement"], second["agreement"]);
}

// =============================================================================
// SECTION 3: Validation
// =============================================================================

#[tokio::test]
async fn test_all_violations_reported_together() {
    let (status, error) = post_checkout(
        create_router_for_test(),
        checkout_body("FOOBAR", "2015-07-02", 0, 200),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(
        error["details"],
        json!([
            "rental days must be at least 1, got 0",
            "discount percent must be between 0 and 100, got 200",
            "unknown tool code 'FOOBAR'"
        ])
    );
    assert_eq!(
        error["message"],
        "Validation failed: rental days must be at least 1, got 0; \
         discount percent must be between 0 and 100, got 200; \
         unknown tool code 'FOOBAR'"
    );
}

#[tokio::test]
async fn test_negative_rental_days_rejected() {
    let (status, error) = post_checkout(
        create_router_for_test(),
        checkout_body("LADW", "2015-07-02", -2, 0),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["details"],
        json!(["rental days must be at least 1, got -2"])
    );
}

#[tokio::test]
async fn test_invalid_date_is_malformed_json() {
    let (status, error) = post_checkout(
        create_router_for_test(),
        checkout_body("LADW", "2015-02-30", 1, 0),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// SECTION 4: Printout
// =============================================================================

#[tokio::test]
async fn test_printout_for_ladder() {
    let (status, text) = post_print(
        create_router_for_test(),
        checkout_body("LADW", "2020-07-02", 3, 10),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let expected = "\
Tool code: LADW
Tool type: Ladder
Tool brand: Werner
Rental days: 3
Check out date: 07/02/20
Due date: 07/05/20
Daily rental charge: $1.99
Charge days: 2
Pre-discount charge: $3.98
Discount percent: 10%
Discount amount: $0.40
Final charge: $3.58";
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_printout_rejects_invalid_input() {
    let (status, body) = post_print(
        create_router_for_test(),
        checkout_body("FOOBAR", "2015-07-02", 0, 200),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["details"].as_array().unwrap().len(), 3);
}

// =============================================================================
// SECTION 5: File-backed Catalog
// =============================================================================

#[tokio::test]
async fn test_config_catalog_prices_like_builtin() {
    for (tool, date, days, discount) in [
        ("LADW", "2020-07-02", 3, 10),
        ("CHNS", "2015-07-02", 5, 25),
        ("JAKD", "2015-09-03", 6, 0),
        ("JAKR", "2020-07-02", 4, 50),
    ] {
        let (_, builtin) = post_checkout(
            create_router_for_test(),
            checkout_body(tool, date, days, discount),
        )
        .await;
        let (status, loaded) = post_checkout(
            create_router_from_config(),
            checkout_body(tool, date, days, discount),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(builtin["agreement"], loaded["agreement"], "{tool} {date}");
    }
}
