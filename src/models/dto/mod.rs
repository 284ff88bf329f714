pub mod view;
pub use view::{QuestionView, SessionView};
