use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerRecord, Quiz, QuizQuestion, QuizResult};

pub struct ScoringService;

impl ScoringService {
    /// Grade an attempt from a quiz definition and its answer record, pure
    /// in its inputs; `completed_at` is the caller's completion timestamp.
    /// Missing answers count as incorrect; a quiz with no questions is a
    /// definition error, not a zero score.
    pub fn score(
        quiz: &Quiz,
        answers: &AnswerRecord,
        completed_at: DateTime<Utc>,
    ) -> AppResult<QuizResult> {
        let total_questions = quiz.question_count();
        if total_questions == 0 {
            return Err(AppError::ValidationError(
                "Quiz has no questions".to_string(),
            ));
        }

        let correct_count = quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(index, question)| Self::is_answered_correctly(question, answers, *index))
            .count();

        let score_percentage = Self::percentage(correct_count, total_questions);

        Ok(QuizResult {
            quiz_id: quiz.id.clone(),
            correct_count,
            total_questions,
            score_percentage,
            passed: score_percentage >= quiz.passing_score,
            answers: answers.to_dense(total_questions),
            time_spent_seconds: None,
            completed_at,
        })
    }

    fn is_answered_correctly(
        question: &QuizQuestion,
        answers: &AnswerRecord,
        index: usize,
    ) -> bool {
        answers
            .selected(index)
            .map_or(false, |option| question.is_correct(option))
    }

    /// Rounded percentage, half-up on the exact value (1/3 -> 33, 2/3 -> 67).
    fn percentage(correct_count: usize, total_questions: usize) -> u8 {
        ((correct_count as f64 / total_questions as f64) * 100.0).round() as u8
    }
}
