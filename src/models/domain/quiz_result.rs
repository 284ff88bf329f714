use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a completed session. Derived from a quiz and its answer
/// record; never stored or mutated, always recomputable.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub quiz_id: String,
    pub correct_count: usize,
    pub total_questions: usize,
    pub score_percentage: u8,
    pub passed: bool,
    /// Per-question selections in question order, `None` where unanswered.
    pub answers: Vec<Option<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
    pub completed_at: DateTime<Utc>,
}
