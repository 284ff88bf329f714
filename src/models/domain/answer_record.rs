use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse mapping from question index to selected option index, scoped to
/// one session. Entries may be overwritten but never removed while the
/// session is active.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    answers: BTreeMap<usize, usize>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected option for a question, overwriting any prior
    /// selection for the same question.
    pub fn record(&mut self, question_index: usize, option_index: usize) {
        self.answers.insert(question_index, option_index);
    }

    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.answers.get(&question_index).copied()
    }

    pub fn is_answered(&self, question_index: usize) -> bool {
        self.answers.contains_key(&question_index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Dense per-question view, `None` where no answer was recorded.
    pub fn to_dense(&self, question_count: usize) -> Vec<Option<usize>> {
        (0..question_count).map(|index| self.selected(index)).collect()
    }
}
