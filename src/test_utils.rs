use crate::models::domain::{Quiz, QuizQuestion};
