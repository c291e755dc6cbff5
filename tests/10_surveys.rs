mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

fn survey_payload() -> serde_json::Value {
    json!({
        "quarter": "Q3",
        "year": 2026,
        "evaluator": "dana@example.com",
        "questions": [
            { "id": 1, "text": "Communicates clearly" },
            { "id": 2, "text": "Delivers on commitments" }
        ],
        "teamMembers": ["alice", "bob"]
    })
}

#[tokio::test]
async fn create_then_fetch_round_trips() -> Result<()> {
    let (app, _store) = common::test_app();

    let (status, _, body) = common::send(&app, common::post_json("/surveys", &survey_payload())).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    let survey_id = body["surveyId"].as_str().expect("surveyId in response").to_string();
    assert!(!survey_id.is_empty());

    let (status, _, fetched) =
        common::send(&app, common::get(&format!("/surveys/{}", survey_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["quarter"], "Q3");
    assert_eq!(fetched["year"], 2026);
    assert_eq!(fetched["evaluator"], "dana@example.com");
    assert_eq!(fetched["teamMembers"], json!(["alice", "bob"]));
    assert_eq!(fetched["surveyId"].as_str(), Some(survey_id.as_str()));
    assert!(fetched["createdAt"].is_string(), "server stamps createdAt: {}", fetched);
    Ok(())
}

#[tokio::test]
async fn each_missing_field_is_named_and_nothing_is_stored() -> Result<()> {
    for field in ["quarter", "year", "evaluator", "questions", "teamMembers"] {
        let (app, store) = common::test_app();
        let mut payload = survey_payload();
        payload.as_object_mut().unwrap().remove(field);

        let (status, _, body) = common::send(&app, common::post_json("/surveys", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
        assert_eq!(body["message"], json!(format!("Missing field: {}", field)));
        assert!(store.documents("surveys").await.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected() -> Result<()> {
    let (app, store) = common::test_app();

    let (status, _, body) = common::send(&app, common::post_raw("/surveys", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON payload");

    // An array is not a survey object either
    let (status, _, body) = common::send(&app, common::post_raw("/surveys", "[1, 2]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON payload");

    assert!(store.documents("surveys").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_survey_is_not_found() -> Result<()> {
    let (app, _store) = common::test_app();

    let (status, _, body) = common::send(&app, common::get("/surveys/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Survey not found");
    Ok(())
}

#[tokio::test]
async fn path_identifier_wins_over_stored_value() -> Result<()> {
    let (app, store) = common::test_app();
    store
        .put("surveys", "abc123", json!({ "quarter": "Q1", "surveyId": "stored-value" }))
        .await;

    let (status, _, body) = common::send(&app, common::get("/surveys/abc123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["surveyId"], "abc123");
    assert_eq!(body["quarter"], "Q1");
    Ok(())
}

#[tokio::test]
async fn store_failure_is_a_generic_500() -> Result<()> {
    let (app, store) = common::test_app();
    store.refuse_writes(true);

    let (status, _, body) = common::send(&app, common::post_json("/surveys", &survey_payload())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error storing survey");
    Ok(())
}
