//! Matching game state machine.
//!
//! A round starts in [`Phase::Practicing`]. The player holds at most one
//! thing at a time (a word or a definition slot); clicking the other kind
//! while something is held places the word into the slot. [`MatchAction::Check`]
//! moves the round to [`Phase::Feedback`] once every slot is filled, after
//! which the round is frozen.
//!
//! Invariant while practicing: a word fills at most one slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{evaluate, Review};
use crate::types::{DefinitionKey, TargetDefinition, Word, WordId};

/// Player placements: definition slot -> word.
pub type UserMatches = BTreeMap<DefinitionKey, WordId>;

/// Matching round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Practicing,
    Feedback,
}

/// The single picked-up item awaiting placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Held {
    Word(WordId),
    Definition(DefinitionKey),
}

/// Player input during a matching round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchAction {
    ClickWord { word_id: WordId },
    ClickDefinition { slot: DefinitionKey },
    Check,
}

/// State of one matching round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRound {
    practice: Vec<Word>,
    targets: Vec<TargetDefinition>,
    display_order: Vec<DefinitionKey>,
    phase: Phase,
    matches: UserMatches,
    held: Option<Held>,
}

impl MatchRound {
    pub fn new(
        practice: Vec<Word>,
        targets: Vec<TargetDefinition>,
        display_order: Vec<DefinitionKey>,
    ) -> Self {
        Self {
            practice,
            targets,
            display_order,
            phase: Phase::Practicing,
            matches: UserMatches::new(),
            held: None,
        }
    }

    pub fn practice_words(&self) -> &[Word] {
        &self.practice
    }

    pub fn targets(&self) -> &[TargetDefinition] {
        &self.targets
    }

    pub fn display_order(&self) -> &[DefinitionKey] {
        &self.display_order
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn matches(&self) -> &UserMatches {
        &self.matches
    }

    pub fn held(&self) -> Option<&Held> {
        self.held.as_ref()
    }

    pub fn target(&self, slot: DefinitionKey) -> Option<&TargetDefinition> {
        self.targets.iter().find(|t| t.key == slot)
    }

    pub fn word(&self, word_id: &str) -> Option<&Word> {
        self.practice.iter().find(|w| w.id == word_id)
    }

    /// Slot currently filled by `word_id`.
    pub fn slot_of(&self, word_id: &str) -> Option<DefinitionKey> {
        self.matches
            .iter()
            .find(|(_, placed)| placed.as_str() == word_id)
            .map(|(slot, _)| *slot)
    }

    pub fn occupant(&self, slot: DefinitionKey) -> Option<&str> {
        self.matches.get(&slot).map(String::as_str)
    }

    pub fn is_word_held(&self, word_id: &str) -> bool {
        matches!(&self.held, Some(Held::Word(held)) if held == word_id)
    }

    pub fn is_slot_held(&self, slot: DefinitionKey) -> bool {
        self.held == Some(Held::Definition(slot))
    }

    /// Every slot has a word and the round is still open.
    pub fn can_check(&self) -> bool {
        self.phase == Phase::Practicing && self.matches.len() == self.targets.len()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Feedback
    }

    /// Scoring of the frozen placements; `None` until checked.
    pub fn review(&self) -> Option<Review> {
        self.is_finished()
            .then(|| evaluate(&self.targets, &self.matches))
    }

    /// Pure transition: the state after `action`.
    pub fn apply(&self, action: &MatchAction) -> Self {
        let mut next = self.clone();
        next.dispatch(action);
        next
    }

    /// Apply `action` in place. Rejected actions leave the round untouched.
    pub fn dispatch(&mut self, action: &MatchAction) {
        if self.phase == Phase::Feedback {
            return;
        }
        match action {
            MatchAction::ClickWord { word_id } => self.click_word(word_id),
            MatchAction::ClickDefinition { slot } => self.click_definition(*slot),
            MatchAction::Check => self.check(),
        }
    }

    fn click_word(&mut self, word_id: &str) {
        if self.word(word_id).is_none() {
            return;
        }

        match self.held.take() {
            Some(Held::Definition(slot)) => {
                if self.occupant(slot) != Some(word_id) {
                    self.place(word_id, slot);
                }
            }
            Some(Held::Word(held)) if held == word_id => {}
            _ => self.held = Some(Held::Word(word_id.to_string())),
        }
    }

    fn click_definition(&mut self, slot: DefinitionKey) {
        if self.target(slot).is_none() {
            return;
        }

        match self.held.take() {
            Some(Held::Word(word_id)) => {
                if self.occupant(slot) != Some(word_id.as_str()) {
                    self.place(&word_id, slot);
                }
            }
            Some(Held::Definition(held)) if held == slot => {}
            Some(Held::Definition(_)) => self.held = Some(Held::Definition(slot)),
            None => match self.matches.remove(&slot) {
                Some(freed) => self.held = Some(Held::Word(freed)),
                None => self.held = Some(Held::Definition(slot)),
            },
        }
    }

    /// Move `word_id` into `slot`, evicting whoever was there.
    fn place(&mut self, word_id: &str, slot: DefinitionKey) {
        self.matches.retain(|_, placed| placed != word_id);
        self.matches.insert(slot, word_id.to_string());
    }

    fn check(&mut self) {
        if self.can_check() {
            self.phase = Phase::Feedback;
            self.held = None;
        }
    }
}
