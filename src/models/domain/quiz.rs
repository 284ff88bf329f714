use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub questions: Vec<QuizQuestion>,
    /// Whole seconds; absent means the quiz is untimed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub time_limit_seconds: Option<u32>,
    /// Minimum rounded percentage required to pass.
    #[validate(range(min = 0, max = 100))]
    pub passing_score: u8,
}

impl Quiz {
    /// Field-level constraints plus the cross-field invariant that every
    /// question's correct answer indexes into its own options.
    pub fn validate_definition(&self) -> AppResult<()> {
        self.validate()?;

        for (index, question) in self.questions.iter().enumerate() {
            if question.correct_answer >= question.options.len() {
                return Err(AppError::ValidationError(format!(
                    "question {} of quiz '{}' marks option {} correct but only has {} options",
                    index,
                    self.id,
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }

        Ok(())
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_timed(&self) -> bool {
        self.time_limit_seconds.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_quiz() -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            title: "Traffic Rules Basics".to_string(),
            description: "Test your knowledge of fundamental traffic rules".to_string(),
            category: "Traffic Rules".to_string(),
            questions: vec![QuizQuestion {
                id: "q-1".to_string(),
                prompt: "What does a red octagonal sign mean?".to_string(),
                options: vec![
                    "No parking".to_string(),
                    "Yield right of way".to_string(),
                    "Stop completely".to_string(),
                ],
                correct_answer: 2,
                explanation: "A red octagonal sign always means stop.".to_string(),
                image: None,
            }],
            time_limit_seconds: Some(300),
            passing_score: 80,
        }
    }

    #[test]
    fn valid_quiz_passes_definition_validation() {
        let quiz = make_quiz();

        assert!(quiz.validate_definition().is_ok());
        assert_eq!(quiz.question_count(), 1);
        assert!(quiz.is_timed());
    }

    #[test]
    fn quiz_without_questions_fails_validation() {
        let mut quiz = make_quiz();
        quiz.questions.clear();

        assert!(quiz.validate_definition().is_err());
    }

    #[test]
    fn quiz_with_out_of_range_correct_answer_fails_validation() {
        let mut quiz = make_quiz();
        quiz.questions[0].correct_answer = 3;

        let err = quiz.validate_definition().expect_err("index 3 of 3 options");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn quiz_with_zero_time_limit_fails_validation() {
        let mut quiz = make_quiz();
        quiz.time_limit_seconds = Some(0);

        assert!(quiz.validate_definition().is_err());
    }

    #[test]
    fn untimed_quiz_is_valid() {
        let mut quiz = make_quiz();
        quiz.time_limit_seconds = None;

        assert!(quiz.validate_definition().is_ok());
        assert!(!quiz.is_timed());
    }

    #[test]
    fn quiz_round_trip_serialization() {
        let quiz = make_quiz();

        let json = serde_json::to_string(&quiz).expect("quiz should serialize");
        let parsed: Quiz = serde_json::from_str(&json).expect("quiz should deserialize");

        assert_eq!(quiz, parsed);
    }
}
