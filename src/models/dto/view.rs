use serde::Serialize;

use crate::models::domain::QuizResult;
use crate::session::QuizSession;

/// Snapshot of a session for presentation. Views render from this and
/// issue session operations; they never touch the answer record directly.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub quiz_id: String,
    pub quiz_title: String,
    pub question_index: usize,
    pub question_count: usize,
    /// `None` means the quiz is untimed.
    pub remaining_seconds: Option<u32>,
    pub completed: bool,
    pub question: QuestionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Previously recorded answer, pre-selected on back-navigation.
    pub selected_option: Option<usize>,
}

impl From<&QuizSession> for SessionView {
    fn from(session: &QuizSession) -> Self {
        let quiz = session.quiz();
        let question = &quiz.questions[session.current_question()];

        SessionView {
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            question_index: session.current_question(),
            question_count: quiz.question_count(),
            remaining_seconds: session.remaining_seconds(),
            completed: session.is_completed(),
            question: QuestionView {
                prompt: question.prompt.clone(),
                options: question.options.clone(),
                image: question.image.clone(),
                selected_option: session.selected_answer(),
            },
            result: session.result().ok(),
        }
    }
}
