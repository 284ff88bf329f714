pub mod countdown;
pub mod quiz_session;
pub use countdown::{CountdownTimer, TimerEvent};
pub use quiz_session::QuizSession;
