pub mod answer_record;
pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub use answer_record::AnswerRecord;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use quiz_result::QuizResult;
