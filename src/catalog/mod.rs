pub mod in_memory;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::domain::Quiz;

/// Read-only quiz provider. The session layer never mutates catalog data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizCatalog: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Arc<Quiz>>>;
    async fn list_quizzes(&self) -> AppResult<Vec<Arc<Quiz>>>;
}

pub use in_memory::InMemoryQuizCatalog;
