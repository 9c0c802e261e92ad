//! Scoring of matching rounds.

use serde::{Deserialize, Serialize};

use crate::matching::UserMatches;
use crate::types::{DefinitionKey, TargetDefinition, WordId};

/// Outcome for one definition slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    /// `struck` is the wrong word the player placed, if any.
    Incorrect { struck: Option<WordId> },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Review of a single target definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReview {
    pub key: DefinitionKey,
    pub definition: String,
    pub correct_word: WordId,
    pub verdict: Verdict,
}

/// Review of a whole round, in target order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub slots: Vec<SlotReview>,
    pub correct: usize,
    pub total: usize,
}

impl Review {
    pub fn slot(&self, key: DefinitionKey) -> Option<&SlotReview> {
        self.slots.iter().find(|s| s.key == key)
    }

    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Compare placements with the targets. Does not touch `matches`.
///
/// A slot with no placement counts as incorrect with nothing struck.
pub fn evaluate(targets: &[TargetDefinition], matches: &UserMatches) -> Review {
    let slots: Vec<SlotReview> = targets
        .iter()
        .map(|target| {
            let verdict = match matches.get(&target.key) {
                Some(placed) if *placed == target.word_id => Verdict::Correct,
                Some(placed) => Verdict::Incorrect {
                    struck: Some(placed.clone()),
                },
                None => Verdict::Incorrect { struck: None },
            };
            SlotReview {
                key: target.key,
                definition: target.definition.clone(),
                correct_word: target.word_id.clone(),
                verdict,
            }
        })
        .collect();

    let correct = slots.iter().filter(|s| s.verdict.is_correct()).count();

    Review {
        total: slots.len(),
        correct,
        slots,
    }
}
