use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

/// Response body for POST /surveys.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyCreated {
    pub survey_id: String,
}

/// One validated element of a POST /evaluations batch.
///
/// `evaluations` stays untyped: per-question entries are persisted verbatim
/// and only probed for a numeric `grade` during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationEntry {
    pub team_member: String,
    pub survey_id: String,
    pub quarter: String,
    pub year: Number,
    pub evaluations: Vec<Value>,
}

/// Document persisted to the `evaluations` collection, one per team member.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub survey_id: String,
    pub year: Number,
    pub quarter: String,
    pub team_member: String,
    pub evaluations: Vec<Value>,
    pub average_grade: f64,
    pub submitted_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn new(entry: EvaluationEntry, average_grade: f64, submitted_at: DateTime<Utc>) -> Self {
        Self {
            survey_id: entry.survey_id,
            year: entry.year,
            quarter: entry.quarter,
            team_member: entry.team_member,
            evaluations: entry.evaluations,
            average_grade,
            submitted_at,
        }
    }
}
