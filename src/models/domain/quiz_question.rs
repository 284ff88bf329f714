use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    #[validate(length(min = 2))]
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl QuizQuestion {
    /// Whether the given option index is this question's correct answer.
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question() -> QuizQuestion {
        QuizQuestion {
            id: "q-1".to_string(),
            prompt: "What should you do when approaching a yellow traffic light?".to_string(),
            options: vec![
                "Speed up to get through".to_string(),
                "Stop if it is safe to do so".to_string(),
                "Always stop immediately".to_string(),
            ],
            correct_answer: 1,
            explanation: "Yellow light means caution.".to_string(),
            image: None,
        }
    }

    #[test]
    fn quiz_question_round_trip_serialization() {
        let question = make_question();

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: QuizQuestion =
            serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(question, parsed);
    }

    #[test]
    fn quiz_question_rejects_unknown_fields() {
        let invalid = r#"{
            "id": "q-1",
            "prompt": "What?",
            "options": ["a", "b"],
            "correct_answer": 0,
            "explanation": "",
            "difficulty": "hard"
        }"#;
        let parsed = serde_json::from_str::<QuizQuestion>(invalid);

        assert!(parsed.is_err());
    }

    #[test]
    fn quiz_question_is_correct_matches_only_the_correct_index() {
        let question = make_question();

        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(2));
    }

    #[test]
    fn quiz_question_with_one_option_fails_validation() {
        let mut question = make_question();
        question.options.truncate(1);

        assert!(question.validate().is_err());
    }
}
