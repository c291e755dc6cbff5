use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::EvaluationEntry;

/// Keys a survey payload must carry before it is accepted. Checked in this
/// order; the first missing key is the one reported.
pub const SURVEY_REQUIRED_FIELDS: [&str; 5] =
    ["quarter", "year", "evaluator", "questions", "teamMembers"];

/// Validation failures with their exact client-facing messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON payload")]
    InvalidPayload,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Missing {0} field")]
    MissingEntryField(&'static str),

    #[error("Invalid evaluations field")]
    InvalidEvaluations,
}

/// Decode and check a survey payload. Only key presence is enforced; values
/// stay free-form so the handler can persist the payload verbatim.
pub fn survey_payload(raw: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    let survey: Map<String, Value> =
        serde_json::from_slice(raw).map_err(|_| ValidationError::InvalidPayload)?;

    for field in SURVEY_REQUIRED_FIELDS {
        if !survey.contains_key(field) {
            return Err(ValidationError::MissingField(field));
        }
    }

    Ok(survey)
}

/// Decode a batch of evaluation entries. A non-array payload or a non-object
/// element is a decode failure; per-entry field checks happen in
/// [`evaluation_entry`].
pub fn evaluation_batch(raw: &[u8]) -> Result<Vec<Map<String, Value>>, ValidationError> {
    serde_json::from_slice(raw).map_err(|_| ValidationError::InvalidPayload)
}

/// Extract one typed evaluation entry. `current_year` is the lower bound
/// accepted for `year`.
pub fn evaluation_entry(
    entry: &Map<String, Value>,
    current_year: i32,
) -> Result<EvaluationEntry, ValidationError> {
    let team_member =
        non_empty_str(entry, "teamMember").ok_or(ValidationError::MissingEntryField("teamMember"))?;
    let survey_id =
        non_empty_str(entry, "surveyId").ok_or(ValidationError::MissingEntryField("surveyId"))?;
    let quarter =
        non_empty_str(entry, "quarter").ok_or(ValidationError::MissingEntryField("quarter"))?;

    let year = match entry.get("year") {
        Some(Value::Number(n)) if n.as_f64().map_or(false, |y| y >= f64::from(current_year)) => {
            n.clone()
        }
        _ => return Err(ValidationError::MissingEntryField("year")),
    };

    let evaluations = match entry.get("evaluations") {
        Some(Value::Array(items)) => items.clone(),
        _ => return Err(ValidationError::InvalidEvaluations),
    };

    Ok(EvaluationEntry {
        team_member,
        survey_id,
        quarter,
        year,
        evaluations,
    })
}

fn non_empty_str(entry: &Map<String, Value>, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
