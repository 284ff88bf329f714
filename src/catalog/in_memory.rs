use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::QuizCatalog;
use crate::errors::{AppError, AppResult};
use crate::models::domain::Quiz;

/// In-memory catalog over a fixed, validated quiz list. List order is the
/// order quizzes were supplied in.
#[derive(Debug)]
pub struct InMemoryQuizCatalog {
    quizzes: Vec<Arc<Quiz>>,
}

impl InMemoryQuizCatalog {
    pub fn new(quizzes: Vec<Quiz>) -> AppResult<Self> {
        let mut seen_ids = HashSet::new();

        for quiz in &quizzes {
            quiz.validate_definition()?;
            if !seen_ids.insert(quiz.id.clone()) {
                return Err(AppError::AlreadyExists(format!(
                    "duplicate quiz id '{}'",
                    quiz.id
                )));
            }
        }

        log::info!("loaded catalog with {} quizzes", quizzes.len());

        Ok(Self {
            quizzes: quizzes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Catalog backed by the built-in DriveSmart quiz set.
    pub fn with_seed_data() -> AppResult<Self> {
        Self::new(crate::catalog::seed::seed_quizzes())
    }

    pub fn from_json_str(data: &str) -> AppResult<Self> {
        let quizzes: Vec<Quiz> = serde_json::from_str(data)?;
        Self::new(quizzes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

#[async_trait]
impl QuizCatalog for InMemoryQuizCatalog {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Arc<Quiz>>> {
        Ok(self.quizzes.iter().find(|quiz| quiz.id == id).cloned())
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Arc<Quiz>>> {
        Ok(self.quizzes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[tokio::test]
    async fn find_by_id_returns_matching_quiz() {
        let catalog = InMemoryQuizCatalog::new(vec![fixtures::untimed_quiz()]).unwrap();

        let quiz = catalog.find_by_id("quiz-untimed").await.unwrap();

        assert_eq!(quiz.expect("quiz should exist").title, "Right of Way");
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let catalog = InMemoryQuizCatalog::new(vec![fixtures::untimed_quiz()]).unwrap();

        let quiz = catalog.find_by_id("missing").await.unwrap();

        assert!(quiz.is_none());
    }

    #[tokio::test]
    async fn list_preserves_supplied_order() {
        let catalog = InMemoryQuizCatalog::new(vec![
            fixtures::untimed_quiz(),
            fixtures::timed_quiz(),
        ])
        .unwrap();

        let quizzes = catalog.list_quizzes().await.unwrap();

        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].id, "quiz-untimed");
        assert_eq!(quizzes[1].id, "quiz-timed");
    }

    #[test]
    fn duplicate_quiz_ids_are_rejected() {
        let err = InMemoryQuizCatalog::new(vec![
            fixtures::untimed_quiz(),
            fixtures::untimed_quiz(),
        ])
        .expect_err("duplicate ids");

        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn invalid_quiz_definitions_are_rejected() {
        let mut quiz = fixtures::untimed_quiz();
        quiz.questions[0].correct_answer = 99;

        let err = InMemoryQuizCatalog::new(vec![quiz]).expect_err("broken correct index");

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn seed_data_is_a_valid_catalog() {
        assert!(InMemoryQuizCatalog::with_seed_data().is_ok());
    }

    #[tokio::test]
    async fn catalog_loads_from_json() {
        let json = serde_json::to_string(&vec![fixtures::timed_quiz()]).unwrap();

        let catalog = InMemoryQuizCatalog::from_json_str(&json).unwrap();

        let quiz = catalog.find_by_id("quiz-timed").await.unwrap();
        assert!(quiz.is_some());
    }

    #[test]
    fn malformed_json_maps_to_catalog_error() {
        let err = InMemoryQuizCatalog::from_json_str("not json").expect_err("parse failure");

        assert_eq!(err.error_code(), "CATALOG_ERROR");
    }
}
