use crate::errors::AppResult;
use crate::models::domain::QuizResult;

/// Collaborator handed the finalized result of a completed session, once
/// per session. The result is an opaque payload to the sink.
pub trait AttemptSink: Send + Sync {
    fn submit(&self, result: &QuizResult) -> AppResult<()>;
}

/// Default sink: logs the finalized result. Stands in until attempts are
/// actually persisted somewhere.
pub struct LoggingAttemptSink;

impl AttemptSink for LoggingAttemptSink {
    fn submit(&self, result: &QuizResult) -> AppResult<()> {
        log::info!(
            "quiz {} finished: {}/{} correct ({}%), {}: {}",
            result.quiz_id,
            result.correct_count,
            result.total_questions,
            result.score_percentage,
            if result.passed { "passed" } else { "failed" },
            serde_json::to_string(result)?
        );
        Ok(())
    }
}
