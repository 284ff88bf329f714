use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerRecord, Quiz, QuizResult};
use crate::services::scoring_service::ScoringService;
use crate::session::countdown::{CountdownTimer, TimerEvent};

/// One attempt at a single quiz. Owns the answer record and the countdown
/// timer; completion is terminal and the only exits are discarding the
/// session or starting a fresh one for the same quiz.
#[derive(Debug)]
pub struct QuizSession {
    id: String,
    quiz: Arc<Quiz>,
    current_question: usize,
    answers: AnswerRecord,
    remaining_seconds: Option<u32>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    started_at: DateTime<Utc>,
    timer: Option<CountdownTimer>,
    timer_events: Option<mpsc::UnboundedReceiver<TimerEvent>>,
}

impl QuizSession {
    /// Validates the quiz and begins a fresh attempt at its first
    /// question. Timed quizzes start their countdown immediately, so this
    /// must run inside a Tokio runtime when a time limit is set.
    pub fn start(quiz: Arc<Quiz>) -> AppResult<Self> {
        quiz.validate_definition()?;

        let (timer, timer_events) = match quiz.time_limit_seconds {
            Some(limit) => {
                let (tx, rx) = mpsc::unbounded_channel();
                (Some(CountdownTimer::start(limit, tx)), Some(rx))
            }
            None => (None, None),
        };

        let session = Self {
            id: Uuid::new_v4().to_string(),
            remaining_seconds: quiz.time_limit_seconds,
            quiz,
            current_question: 0,
            answers: AnswerRecord::new(),
            completed: false,
            completed_at: None,
            started_at: Utc::now(),
            timer,
            timer_events,
        };

        log::info!(
            "session {} started for quiz '{}' ({} questions, {})",
            session.id,
            session.quiz.id,
            session.quiz.question_count(),
            match session.remaining_seconds {
                Some(limit) => format!("{}s limit", limit),
                None => "untimed".to_string(),
            }
        );

        Ok(session)
    }

    /// Records an answer for the current question, overwriting any prior
    /// selection. Does not advance.
    pub fn select_answer(&mut self, option_index: usize) -> AppResult<()> {
        if self.completed {
            return Err(AppError::InvalidOperation(
                "cannot answer a completed session".to_string(),
            ));
        }

        let question = &self.quiz.questions[self.current_question];
        if option_index >= question.options.len() {
            return Err(AppError::ValidationError(format!(
                "option {} is out of range for question {} ({} options)",
                option_index,
                self.current_question,
                question.options.len()
            )));
        }

        self.answers.record(self.current_question, option_index);
        log::debug!(
            "session {}: question {} answered with option {}",
            self.id,
            self.current_question,
            option_index
        );
        Ok(())
    }

    /// Moves to the next question, or completes the session from the last
    /// one. Gated on the current question having a recorded answer; timer
    /// expiry is the only way to complete with gaps.
    pub fn advance(&mut self) -> AppResult<()> {
        if self.completed {
            return Err(AppError::InvalidOperation(
                "cannot advance a completed session".to_string(),
            ));
        }
        if !self.answers.is_answered(self.current_question) {
            return Err(AppError::InvalidOperation(format!(
                "question {} has no recorded answer",
                self.current_question
            )));
        }

        if self.current_question + 1 == self.quiz.question_count() {
            self.complete();
        } else {
            self.current_question += 1;
        }
        Ok(())
    }

    /// Moves back one question, keeping the answer recorded for the
    /// question being left. Already at the first question is a no-op.
    pub fn retreat(&mut self) -> AppResult<()> {
        if self.completed {
            return Err(AppError::InvalidOperation(
                "cannot navigate a completed session".to_string(),
            ));
        }

        self.current_question = self.current_question.saturating_sub(1);
        Ok(())
    }

    /// Applies a countdown tick. Ticks arriving after completion are
    /// ignored.
    pub fn on_tick(&mut self, remaining_seconds: u32) {
        if self.completed {
            return;
        }
        self.remaining_seconds = Some(remaining_seconds);
    }

    /// Forces completion regardless of unanswered questions; they score as
    /// incorrect. Returns whether this call completed the session, so a
    /// late expiry against an already-completed session is a silent no-op.
    pub fn on_timer_expired(&mut self) -> bool {
        if self.completed {
            log::debug!("session {}: expiry after completion ignored", self.id);
            return false;
        }

        log::info!(
            "session {}: time expired with {}/{} questions answered",
            self.id,
            self.answers.answered_count(),
            self.quiz.question_count()
        );
        self.remaining_seconds = Some(0);
        self.complete();
        true
    }

    fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        log::info!("session {} completed", self.id);
    }

    /// Scores the attempt. Only available once the session has completed.
    pub fn result(&self) -> AppResult<QuizResult> {
        let completed_at = self.completed_at.ok_or_else(|| {
            AppError::InvalidOperation("session is not completed".to_string())
        })?;

        let mut result = ScoringService::score(&self.quiz, &self.answers, completed_at)?;
        result.time_spent_seconds = Some((completed_at - self.started_at).num_seconds());
        Ok(result)
    }

    /// Hands the timer event stream to the driving loop. `None` for
    /// untimed sessions or if already taken.
    pub fn take_timer_events(&mut self) -> Option<mpsc::UnboundedReceiver<TimerEvent>> {
        self.timer_events.take()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// Recorded answer for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.answers.selected(self.current_question)
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
