pub mod attempt_sink;
pub mod scoring_service;
pub mod session_service;

pub use attempt_sink::{AttemptSink, LoggingAttemptSink};
pub use scoring_service::ScoringService;
pub use session_service::SessionService;
