use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Map, Value};
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::models::SurveyCreated;
use crate::store::SURVEYS;
use crate::{validate, AppState};

/// POST /surveys - create a survey from a free-form payload
///
/// The payload stays a map on purpose: beyond the five required keys the
/// contract accepts and persists arbitrary extra fields verbatim.
pub async fn create(State(state): State<AppState>, body: Bytes) -> ApiResult<SurveyCreated> {
    let mut survey: Map<String, Value> = validate::survey_payload(&body)?;

    survey.insert("createdAt".to_string(), json!(Utc::now()));

    let survey_id = state
        .store
        .add(SURVEYS, Value::Object(survey))
        .await
        .map_err(|e| {
            error!("error storing survey: {}", e);
            ApiError::internal_server_error("Error storing survey")
        })?;

    Ok(Json(SurveyCreated { survey_id }))
}

/// GET /surveys/:survey_id - fetch a survey by its identifier
pub async fn show(State(state): State<AppState>, Path(survey_id): Path<String>) -> ApiResult<Value> {
    let doc = match state.store.get(SURVEYS, &survey_id).await {
        Ok(Some(doc)) => doc,
        Ok(None) => return Err(ApiError::not_found("Survey not found")),
        Err(e) => {
            error!("error fetching survey {}: {}", survey_id, e);
            return Err(ApiError::not_found("Survey not found"));
        }
    };

    let mut survey = match doc {
        Value::Object(map) => map,
        _ => return Err(ApiError::not_found("Survey not found")),
    };

    // Written last so the path-derived identifier wins over any stored value.
    survey.insert("surveyId".to_string(), Value::String(survey_id));

    Ok(Json(Value::Object(survey)))
}
