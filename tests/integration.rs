//! Integration tests for the Staffing Compliance Engine API.
//!
//! This test suite covers the HTTP surface end to end:
//! - Same-day shift calculation (RDC 502/2021 dimensioning)
//! - Grau I daily component applied to a single shift per day
//! - Compliance classification (compliant / attention / non_compliant)
//! - Period coverage reports, warnings and the hourly coverage rate
//! - Error cases (invalid durations, inverted ranges, malformed JSON)

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use staffing_engine::api::{create_router, AppState};
use staffing_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/rdc502").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
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
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Builds a resident list with the given per-grade counts.
fn residents(grau_i: u32, grau_ii: u32, grau_iii: u32, without_level: u32) -> Vec<Value> {
    let mut list = Vec::new();
    let mut push = |count: u32, level: Option<&str>| {
        for _ in 0..count {
            let index = list.len();
            list.push(json!({
                "id": format!("res_{:03}", index),
                "dependencyLevel": level,
                "status": "Ativo"
            }));
        }
    };
    push(grau_i, Some("Grau I"));
    push(grau_ii, Some("Grau II"));
    push(grau_iii, Some("Grau III"));
    push(without_level, None);
    list
}

fn template(id: &str, shift_type: &str, start: &str, end: &str, duration: u32) -> Value {
    json!({
        "id": id,
        "type": shift_type,
        "name": id,
        "startTime": start,
        "endTime": end,
        "durationHours": duration
    })
}

fn three_8h_templates() -> Vec<Value> {
    vec![
        template("shift_day_8h", "DAY_8H", "07:00", "15:00", 8),
        template("shift_afternoon_8h", "AFTERNOON_8H", "15:00", "23:00", 8),
        template("shift_night_8h", "NIGHT_8H", "23:00", "07:00", 8),
    ]
}

fn day_request(date: &str, res: Vec<Value>, shifts: Vec<(Value, u32)>) -> Value {
    let shifts: Vec<Value> = shifts
        .into_iter()
        .map(|(template, assigned)| json!({ "template": template, "assignedCount": assigned }))
        .collect();
    json!({ "date": date, "residents": res, "shifts": shifts })
}

// =============================================================================
// /calculate
// =============================================================================

#[tokio::test]
async fn test_calculate_reference_census_across_three_shifts() {
    let body = json!({
        "date": "2026-02-02",
        "residents": residents(40, 10, 6, 0),
        "shiftTemplates": three_8h_templates()
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["date"], "2026-02-02");
    assert_eq!(response["totalResidents"]["grauI"], 40);
    assert_eq!(response["totalResidents"]["withoutLevel"], 0);
    assert_eq!(response["warnings"].as_array().unwrap().len(), 0);

    let calculations = response["calculations"].as_array().unwrap();
    assert_eq!(calculations.len(), 3);

    // 07:00 shift carries the Grau I daily component: 2 + 1 + 1 = 4.
    assert_eq!(calculations[0]["requirement"]["minimumRequired"], 4);
    assert_eq!(calculations[0]["requirement"]["appliesGrauIComponent"], true);
    // Later shifts owe only the per-shift Grau II/III components.
    assert_eq!(calculations[1]["requirement"]["minimumRequired"], 2);
    assert_eq!(calculations[1]["requirement"]["appliesGrauIComponent"], false);
    assert_eq!(calculations[2]["requirement"]["minimumRequired"], 2);
}

#[tokio::test]
async fn test_calculate_12h_shift_scales_grau_i_workload() {
    let body = json!({
        "date": "2026-02-02",
        "residents": residents(40, 0, 0, 0),
        "shiftTemplates": [
            template("shift_day_12h", "DAY_12H", "07:00", "19:00", 12),
            template("shift_night_12h", "NIGHT_12H", "19:00", "07:00", 12),
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    let calculations = response["calculations"].as_array().unwrap();
    // 40/20 = 2.0 scaled by 12/8 = 1.5 -> ceil(3.0) = 3.
    assert_eq!(calculations[0]["requirement"]["minimumRequired"], 3);
    assert_eq!(calculations[0]["requirement"]["grauIWorkloadFactor"], "1.5");
    assert_eq!(calculations[1]["requirement"]["minimumRequired"], 0);
}

#[tokio::test]
async fn test_calculate_warns_about_unclassified_residents() {
    let body = json!({
        "date": "2026-02-02",
        "residents": residents(20, 0, 0, 3),
        "shiftTemplates": vec![template("shift_day_8h", "DAY_8H", "07:00", "15:00", 8)]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["totalResidents"]["withoutLevel"], 3);
    let warnings = response["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]
        .as_str()
        .unwrap()
        .contains("3 resident(s) without a dependency grade"));
    // Unclassified residents never change the formula.
    assert_eq!(response["calculations"][0]["requirement"]["minimumRequired"], 1);
}

#[tokio::test]
async fn test_calculate_ignores_inactive_residents() {
    let mut res = residents(20, 0, 0, 0);
    res.push(json!({
        "id": "res_inactive",
        "dependencyLevel": "Grau III",
        "status": "Inativo"
    }));

    let body = json!({
        "date": "2026-02-02",
        "residents": res,
        "shiftTemplates": vec![template("shift_day_8h", "DAY_8H", "07:00", "15:00", 8)]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["totalResidents"]["grauIII"], 0);
    assert_eq!(response["calculations"][0]["requirement"]["minimumRequired"], 1);
}

#[tokio::test]
async fn test_calculate_rejects_invalid_shift_duration() {
    let body = json!({
        "date": "2026-02-02",
        "residents": residents(10, 0, 0, 0),
        "shiftTemplates": vec![template("shift_odd", "DAY_8H", "07:00", "13:00", 6)]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "INVALID_SHIFT_DURATION");
    assert!(response["message"].as_str().unwrap().contains("shift_odd"));
}

#[tokio::test]
async fn test_calculate_rejects_duration_mismatching_span() {
    // Declared 8h over a 12h window.
    let body = json!({
        "date": "2026-02-02",
        "residents": residents(10, 0, 0, 0),
        "shiftTemplates": vec![template("shift_mislabeled", "DAY_8H", "07:00", "19:00", 8)]
    });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "INVALID_SHIFT_DURATION");
}

#[tokio::test]
async fn test_calculate_rejects_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_calculate_rejects_missing_fields() {
    let body = json!({ "date": "2026-02-02" });

    let (status, response) = post_json(create_router_for_test(), "/calculate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert!(response["message"].as_str().unwrap().contains("missing field"));
}

// =============================================================================
// /coverage-report
// =============================================================================

#[tokio::test]
async fn test_coverage_report_fully_staffed_period() {
    let day_12h = template("shift_day_12h", "DAY_12H", "07:00", "19:00", 12);
    let night_12h = template("shift_night_12h", "NIGHT_12H", "19:00", "07:00", 12);

    let body = json!({
        "startDate": "2026-02-01",
        "endDate": "2026-02-02",
        "days": [
            day_request(
                "2026-02-01",
                residents(40, 10, 6, 0),
                vec![(day_12h.clone(), 5), (night_12h.clone(), 2)],
            ),
            day_request(
                "2026-02-02",
                residents(40, 10, 6, 0),
                vec![(day_12h, 5), (night_12h, 2)],
            ),
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["summary"]["totalDays"], 2);
    assert_eq!(response["summary"]["totalShifts"], 4);
    assert_eq!(response["summary"]["compliantShifts"], 4);
    assert_eq!(response["summary"]["totalCoveredHours"], 48);
    assert_eq!(response["summary"]["expectedHours"], 48);
    assert_eq!(response["summary"]["hourlyCoverageRate"], "1");
    assert_eq!(response["warnings"].as_array().unwrap().len(), 0);

    for day in response["days"].as_array().unwrap() {
        assert_eq!(day["complianceStatus"], "compliant");
        assert_eq!(day["coveredHours"], 24);
        assert_eq!(day["uncoveredHours"], 0);
    }
}

#[tokio::test]
async fn test_coverage_report_classifies_assigned_counts() {
    // Reference scenario: minimum 4 on the 8h day shift. Assigned 4, 3 and 2
    // over three days must classify compliant, attention, non_compliant.
    let day_8h = template("shift_day_8h", "DAY_8H", "07:00", "15:00", 8);

    let body = json!({
        "startDate": "2026-02-01",
        "endDate": "2026-02-03",
        "days": [
            day_request("2026-02-01", residents(40, 10, 6, 0), vec![(day_8h.clone(), 4)]),
            day_request("2026-02-02", residents(40, 10, 6, 0), vec![(day_8h.clone(), 3)]),
            day_request("2026-02-03", residents(40, 10, 6, 0), vec![(day_8h, 2)]),
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::OK);
    let shifts = response["shifts"].as_array().unwrap();
    assert_eq!(shifts[0]["complianceStatus"], "compliant");
    assert_eq!(shifts[1]["complianceStatus"], "attention");
    assert_eq!(shifts[2]["complianceStatus"], "non_compliant");
    for shift in shifts {
        assert_eq!(shift["minimumRequired"], 4);
    }

    assert_eq!(response["summary"]["compliantShifts"], 1);
    assert_eq!(response["summary"]["attentionShifts"], 1);
    assert_eq!(response["summary"]["nonCompliantShifts"], 1);
    assert_eq!(response["summary"]["compliantDays"], 1);
    assert_eq!(response["summary"]["attentionDays"], 1);
    assert_eq!(response["summary"]["nonCompliantDays"], 1);
}

#[tokio::test]
async fn test_coverage_report_under_staffed_shift_becomes_period() {
    let day_12h = template("shift_day_12h", "DAY_12H", "07:00", "19:00", 12);
    let night_12h = template("shift_night_12h", "NIGHT_12H", "19:00", "07:00", 12);

    let body = json!({
        "startDate": "2026-02-01",
        "endDate": "2026-02-01",
        "days": [day_request(
            "2026-02-01",
            residents(40, 10, 6, 0),
            vec![(day_12h, 5), (night_12h, 1)],
        )]
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::OK);
    let day = &response["days"][0];
    assert_eq!(day["complianceStatus"], "attention");
    assert_eq!(day["coveredHours"], 12);
    assert_eq!(day["uncoveredHours"], 12);

    let periods = day["nonCompliantPeriods"].as_array().unwrap();
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0]["shiftTemplateName"], "shift_night_12h");
    assert_eq!(periods[0]["startTime"], "19:00");
    assert_eq!(periods[0]["endTime"], "07:00");
    assert_eq!(periods[0]["assignedCount"], 1);
    assert_eq!(periods[0]["minimumRequired"], 2);

    assert_eq!(response["summary"]["hourlyCoverageRate"], "0.5");
}

#[tokio::test]
async fn test_coverage_report_missing_day_warns_and_counts_uncovered() {
    let body = json!({
        "startDate": "2026-02-01",
        "endDate": "2026-02-02",
        "days": [day_request(
            "2026-02-01",
            residents(0, 0, 6, 0),
            vec![(template("shift_day_12h", "DAY_12H", "07:00", "19:00", 12), 1)],
        )]
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = response["warnings"].as_array().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("No census data for 2026-02-02")));
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("No shifts configured for 2026-02-02")));

    let missing_day = &response["days"][1];
    assert_eq!(missing_day["date"], "2026-02-02");
    assert_eq!(missing_day["complianceStatus"], "non_compliant");
    assert_eq!(missing_day["coveredHours"], 0);
    assert_eq!(missing_day["uncoveredHours"], 24);
    assert_eq!(missing_day["nonCompliantPeriods"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_coverage_report_rejects_inverted_range() {
    let body = json!({
        "startDate": "2026-02-10",
        "endDate": "2026-02-01",
        "days": []
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_coverage_report_aborts_on_invalid_shift_configuration() {
    let body = json!({
        "startDate": "2026-02-01",
        "endDate": "2026-02-01",
        "days": [day_request(
            "2026-02-01",
            residents(10, 0, 0, 0),
            vec![(template("shift_odd", "DAY_8H", "07:00", "16:00", 9), 2)],
        )]
    });

    let (status, response) = post_json(create_router_for_test(), "/coverage-report", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "INVALID_SHIFT_DURATION");
    assert!(response["message"].as_str().unwrap().contains("shift_odd"));
}
