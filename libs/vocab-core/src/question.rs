//! Multiple-choice rounds (reverse-match and fill-in-the-blank).

use serde::{Deserialize, Serialize};

use crate::types::{Question, Word, WordId};

/// Question round phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuestionState {
    Asking,
    Answered { selected: WordId },
}

/// Per-option marking once the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionFeedback {
    None,
    /// The right answer, picked by the player.
    Correct,
    /// The wrong answer the player picked.
    Incorrect,
    /// The right answer, not picked.
    Revealed,
}

/// State of one multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRound {
    question: Question,
    state: QuestionState,
}

impl QuestionRound {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            state: QuestionState::Asking,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn state(&self) -> &QuestionState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuestionState::Answered { .. })
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            QuestionState::Answered { selected } => Some(selected.as_str()),
            QuestionState::Asking => None,
        }
    }

    /// Whether the player picked the right word. `None` while asking.
    pub fn was_correct(&self) -> Option<bool> {
        self.selected()
            .map(|selected| selected == self.question.correct_word.id)
    }

    /// Answer with `word_id`. Ignored once answered or for ids that are not options.
    pub fn select(&mut self, word_id: &str) {
        if self.is_finished() || !self.question.options.iter().any(|w| w.id == word_id) {
            return;
        }
        self.state = QuestionState::Answered {
            selected: word_id.to_string(),
        };
    }

    pub fn feedback_for(&self, option: &Word) -> OptionFeedback {
        let Some(selected) = self.selected() else {
            return OptionFeedback::None;
        };

        let is_answer = option.id == self.question.correct_word.id;
        let is_selected = option.id == selected;

        match (is_answer, is_selected) {
            (true, true) => OptionFeedback::Correct,
            (true, false) => OptionFeedback::Revealed,
            (false, true) => OptionFeedback::Incorrect,
            (false, false) => OptionFeedback::None,
        }
    }
}
