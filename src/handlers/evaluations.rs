use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use chrono::{Datelike, Utc};
use serde_json::{json, Value};
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::grading::average_grade;
use crate::models::EvaluationRecord;
use crate::store::EVALUATIONS;
use crate::{validate, AppState};

/// POST /evaluations - store a batch of per-member evaluation submissions
///
/// Entries are validated and persisted one at a time; the first invalid or
/// unstorable entry aborts the request and entries stored before it stay
/// stored.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> ApiResult<Value> {
    let batch = validate::evaluation_batch(&body)?;
    let current_year = Utc::now().year();

    for raw_entry in &batch {
        let entry = validate::evaluation_entry(raw_entry, current_year)?;
        let average = average_grade(&entry.evaluations);

        let record = EvaluationRecord::new(entry, average, Utc::now());
        let team_member = record.team_member.clone();

        let doc = serde_json::to_value(&record).map_err(|e| {
            error!("error encoding evaluation for {}: {}", team_member, e);
            ApiError::internal_server_error("Error storing evaluation")
        })?;

        if let Err(e) = state.store.add(EVALUATIONS, doc).await {
            error!("error storing evaluation for {}: {}", team_member, e);
            return Err(ApiError::internal_server_error("Error storing evaluation"));
        }
    }

    Ok(Json(json!({ "message": "Evaluations stored successfully" })))
}
