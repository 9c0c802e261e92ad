//! Read-only views of a round, shaped for rendering.
//!
//! Views carry everything a renderer needs (labels, hold and placement
//! markers, feedback, enabled actions) so no game rule leaks into the
//! presentation layer.

use serde::Serialize;

use crate::matching::{Held, MatchRound, Phase};
use crate::question::{OptionFeedback, QuestionRound};
use crate::scoring::{Review, Verdict};
use crate::session::Round;
use crate::types::{DefinitionKey, GameMode, Prompt, Word, WordId};

/// View of whichever round is in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameView {
    Matching(MatchView),
    Question(QuestionView),
}

impl GameView {
    pub fn from_round(round: &Round) -> Self {
        match round {
            Round::Matching(round) => Self::Matching(MatchView::from_round(round)),
            Round::Question(round) => Self::Question(QuestionView::from_round(round)),
        }
    }

    pub fn can_next(&self) -> bool {
        match self {
            Self::Matching(view) => view.can_next,
            Self::Question(view) => view.can_next,
        }
    }
}

/// Everything known about a word, shown as a flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub id: WordId,
    pub text: String,
    pub part_of_speech: String,
    pub translation: String,
    pub explanation: String,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub set_name: String,
}

impl From<&Word> for Flashcard {
    fn from(word: &Word) -> Self {
        Self {
            id: word.id.clone(),
            text: word.text.clone(),
            part_of_speech: word.part_of_speech.clone(),
            translation: word.translation.clone(),
            explanation: word.explanation.clone(),
            definitions: word.definitions.clone(),
            examples: word.examples.clone(),
            set_name: word.set_name.clone(),
        }
    }
}

/// A word reference with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordLabel {
    pub id: WordId,
    pub text: String,
}

/// Feedback marker on a word tile or slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    None,
    Correct,
    Incorrect,
}

/// A word in the word bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTile {
    pub id: WordId,
    pub text: String,
    pub held: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_in: Option<DefinitionKey>,
    pub feedback: Mark,
}

/// Feedback for a slot after checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotFeedback {
    pub result: Mark,
    pub correct_word: WordLabel,
    /// The wrong word the player placed, shown struck through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub struck_word: Option<WordLabel>,
}

/// A definition slot, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: DefinitionKey,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_word: Option<WordLabel>,
    pub held: bool,
    /// A word is held and clicking here would place it.
    pub targeted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<SlotFeedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// Render-ready matching round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub phase: Phase,
    pub words: Vec<WordTile>,
    pub slots: Vec<SlotView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held: Option<Held>,
    pub can_check: bool,
    pub can_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// One card per target word, in target order, once checked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub review_cards: Vec<Flashcard>,
}

impl MatchView {
    pub fn from_round(round: &MatchRound) -> Self {
        let review = round.review();
        let held_word = match round.held() {
            Some(Held::Word(id)) => Some(id.as_str()),
            _ => None,
        };

        let label = |id: &str| WordLabel {
            id: id.to_string(),
            text: round
                .word(id)
                .map(|w| w.text.clone())
                .unwrap_or_default(),
        };

        let words = round
            .practice_words()
            .iter()
            .map(|word| {
                let placed_in = round.slot_of(&word.id);
                WordTile {
                    id: word.id.clone(),
                    text: word.text.clone(),
                    held: round.is_word_held(&word.id),
                    placed_in,
                    feedback: tile_mark(review.as_ref(), placed_in),
                }
            })
            .collect();

        let slots = round
            .display_order()
            .iter()
            .filter_map(|key| round.target(*key))
            .map(|target| {
                let occupant = round.occupant(target.key);
                let feedback = review
                    .as_ref()
                    .and_then(|review| review.slot(target.key))
                    .map(|reviewed| SlotFeedback {
                        result: verdict_mark(&reviewed.verdict),
                        correct_word: label(&reviewed.correct_word),
                        struck_word: match &reviewed.verdict {
                            Verdict::Incorrect { struck: Some(id) } => Some(label(id)),
                            _ => None,
                        },
                    });

                SlotView {
                    slot: target.key,
                    definition: target.definition.clone(),
                    placed_word: occupant.map(&label),
                    held: round.is_slot_held(target.key),
                    targeted: held_word.is_some_and(|held| occupant != Some(held)),
                    feedback,
                }
            })
            .collect();

        let review_cards = if review.is_some() {
            round
                .targets()
                .iter()
                .filter_map(|target| round.word(&target.word_id))
                .map(Flashcard::from)
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase: round.phase(),
            words,
            slots,
            held: round.held().cloned(),
            can_check: round.can_check(),
            can_next: round.is_finished(),
            score: review.map(|review| Score {
                correct: review.correct,
                total: review.total,
            }),
            review_cards,
        }
    }
}

fn verdict_mark(verdict: &Verdict) -> Mark {
    match verdict {
        Verdict::Correct => Mark::Correct,
        Verdict::Incorrect { .. } => Mark::Incorrect,
    }
}

fn tile_mark(review: Option<&Review>, placed_in: Option<DefinitionKey>) -> Mark {
    match (review, placed_in) {
        (Some(review), Some(slot)) => review
            .slot(slot)
            .map_or(Mark::None, |reviewed| verdict_mark(&reviewed.verdict)),
        _ => Mark::None,
    }
}

/// An answer option of a multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: WordId,
    pub text: String,
    pub feedback: OptionFeedback,
}

/// Render-ready multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub mode: GameMode,
    pub prompt: Prompt,
    pub options: Vec<OptionView>,
    pub answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_correct: Option<bool>,
    pub can_next: bool,
    /// The answer's flashcard, once answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_card: Option<Flashcard>,
}

impl QuestionView {
    pub fn from_round(round: &QuestionRound) -> Self {
        let question = round.question();
        Self {
            mode: question.mode,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id.clone(),
                    text: option.text.clone(),
                    feedback: round.feedback_for(option),
                })
                .collect(),
            answered: round.is_finished(),
            was_correct: round.was_correct(),
            can_next: round.is_finished(),
            correct_card: round
                .is_finished()
                .then(|| Flashcard::from(&question.correct_word)),
        }
    }
}
