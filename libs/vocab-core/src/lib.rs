//! Core vocabulary quiz library shared by the server and its tests.
//!
//! Provides:
//! - Manifest and set parsing with record normalization
//! - Set selection and the active word pool
//! - Round generation for matching, reverse-match and fill-in-the-blank
//! - The matching state machine and its scoring
//! - Multiple-choice question state
//! - A session controller and read-only views for rendering

pub mod error;
pub mod loader;
pub mod matching;
pub mod question;
pub mod round;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod session;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{LoadError, Result, RoundError};
pub use loader::{parse_manifest, parse_set, IdRegistry, LoadedSet, SkippedRecord};
pub use matching::{Held, MatchAction, MatchRound, Phase, UserMatches};
pub use question::{OptionFeedback, QuestionRound, QuestionState};
pub use round::{
    build_fill_in_the_blank, build_matching_round, build_reverse_match, mask_word, BLANK,
};
pub use scoring::{evaluate, Review, SlotReview, Verdict};
pub use search::{search, word_of_the_day, WordOfTheDay};
pub use selection::SelectionStore;
pub use session::{GameAction, GameSession, Round};
pub use types::{
    DefinitionKey, GameMode, Library, Prompt, Question, RawWord, TargetDefinition, VocabSet,
    VocabSetInfo, Word, WordId,
};
pub use view::{
    Flashcard, GameView, Mark, MatchView, OptionView, QuestionView, Score, SlotFeedback, SlotView,
    WordLabel, WordTile,
};
