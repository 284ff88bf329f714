use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::QuizCatalog;
use crate::errors::{AppError, AppResult};
use crate::models::dto::SessionView;
use crate::services::attempt_sink::AttemptSink;
use crate::session::{QuizSession, TimerEvent};

/// Single-owner session flow behind the presentation contract: catalog
/// lookup on start, the five session operations, view snapshots, and a
/// one-shot hand-off of each finalized result to the attempt sink.
pub struct SessionService {
    catalog: Arc<dyn QuizCatalog>,
    sink: Arc<dyn AttemptSink>,
    session: Option<QuizSession>,
}

impl SessionService {
    pub fn new(catalog: Arc<dyn QuizCatalog>, sink: Arc<dyn AttemptSink>) -> Self {
        Self {
            catalog,
            sink,
            session: None,
        }
    }

    /// Starts a session for the given quiz. Any prior session is replaced,
    /// which cancels its timer.
    pub async fn start(&mut self, quiz_id: &str) -> AppResult<()> {
        let quiz = self
            .catalog
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        self.session = Some(QuizSession::start(quiz)?);
        Ok(())
    }

    /// Restarts the current quiz as a fresh attempt: cleared answers,
    /// restarted timer. Works from both active and completed sessions.
    pub fn retake(&mut self) -> AppResult<()> {
        let quiz = self.active_session()?.quiz().clone();
        self.session = Some(QuizSession::start(quiz)?);
        Ok(())
    }

    pub fn select_answer(&mut self, option_index: usize) -> AppResult<()> {
        self.active_session_mut()?.select_answer(option_index)
    }

    pub fn advance(&mut self) -> AppResult<()> {
        let session = self.active_session_mut()?;
        session.advance()?;
        if session.is_completed() {
            self.finalize()?;
        }
        Ok(())
    }

    pub fn retreat(&mut self) -> AppResult<()> {
        self.active_session_mut()?.retreat()
    }

    pub fn on_tick(&mut self, remaining_seconds: u32) {
        if let Some(session) = self.session.as_mut() {
            session.on_tick(remaining_seconds);
        }
    }

    /// Forwards timer expiry into the session. Expiry against a missing or
    /// already-completed session is tolerated silently.
    pub fn on_timer_expired(&mut self) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if session.on_timer_expired() {
            self.finalize()?;
        }
        Ok(())
    }

    /// Discards the session and its timer. Calling with no session active
    /// is a no-op.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("session {} discarded", session.id());
        }
    }

    pub fn view(&self) -> Option<SessionView> {
        self.session.as_ref().map(SessionView::from)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn take_timer_events(&mut self) -> Option<mpsc::UnboundedReceiver<TimerEvent>> {
        self.session.as_mut().and_then(|session| session.take_timer_events())
    }

    fn finalize(&self) -> AppResult<()> {
        let session = self.active_session()?;
        let result = session.result()?;
        self.sink.submit(&result)
    }

    fn active_session(&self) -> AppResult<&QuizSession> {
        self.session
            .as_ref()
            .ok_or_else(|| AppError::InvalidOperation("no active session".to_string()))
    }

    fn active_session_mut(&mut self) -> AppResult<&mut QuizSession> {
        self.session
            .as_mut()
            .ok_or_else(|| AppError::InvalidOperation("no active session".to_string()))
    }
}
