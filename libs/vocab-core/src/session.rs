//! Session controller: one game mode over one word pool.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::RoundError;
use crate::matching::{MatchAction, MatchRound};
use crate::question::QuestionRound;
use crate::round::{build_fill_in_the_blank, build_matching_round, build_reverse_match};
use crate::types::{DefinitionKey, GameMode, Question, Word, WordId};
use crate::view::GameView;

/// The round currently in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    Matching(MatchRound),
    Question(QuestionRound),
}

impl Round {
    /// Build a fresh round for `mode`.
    pub fn generate<R: Rng + ?Sized>(
        mode: GameMode,
        pool: &[Word],
        rng: &mut R,
    ) -> Result<Self, RoundError> {
        match mode {
            GameMode::Matching => build_matching_round(pool, rng).map(Self::Matching),
            GameMode::ReverseMatch => build_reverse_match(pool, rng).map(Self::question),
            GameMode::FillInTheBlank => build_fill_in_the_blank(pool, rng).map(Self::question),
        }
    }

    fn question(question: Question) -> Self {
        Self::Question(QuestionRound::new(question))
    }

    /// Feedback is showing and only "next" remains.
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Matching(round) => round.is_finished(),
            Self::Question(round) => round.is_finished(),
        }
    }
}

/// Any player input during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    ClickWord { word_id: WordId },
    ClickDefinition { slot: DefinitionKey },
    Check,
    SelectOption { word_id: WordId },
    Next,
}

/// Owns the mode, pool, random source and current round.
#[derive(Debug)]
pub struct GameSession<R = ChaCha8Rng> {
    mode: GameMode,
    pool: Vec<Word>,
    rng: R,
    round: Round,
    rounds_started: u32,
}

impl GameSession<ChaCha8Rng> {
    /// Start with an entropy-seeded generator.
    pub fn with_entropy(mode: GameMode, pool: Vec<Word>) -> Result<Self, RoundError> {
        Self::start(mode, pool, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Build the first round. Fails when the pool cannot support `mode`.
    pub fn start(mode: GameMode, pool: Vec<Word>, mut rng: R) -> Result<Self, RoundError> {
        let round = Round::generate(mode, &pool, &mut rng)?;
        Ok(Self {
            mode,
            pool,
            rng,
            round,
            rounds_started: 1,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Route `action` to the current round.
    ///
    /// Actions that do not apply to the round in play are ignored. Only
    /// [`GameAction::Next`] can fail.
    pub fn dispatch(&mut self, action: GameAction) -> Result<(), RoundError> {
        if action == GameAction::Next {
            self.next()?;
            return Ok(());
        }

        match (action, &mut self.round) {
            (GameAction::ClickWord { word_id }, Round::Matching(round)) => {
                round.dispatch(&MatchAction::ClickWord { word_id })
            }
            (GameAction::ClickDefinition { slot }, Round::Matching(round)) => {
                round.dispatch(&MatchAction::ClickDefinition { slot })
            }
            (GameAction::Check, Round::Matching(round)) => round.dispatch(&MatchAction::Check),
            (GameAction::SelectOption { word_id }, Round::Question(round)) => {
                round.select(&word_id)
            }
            _ => {}
        }
        Ok(())
    }

    /// Replace a finished round with a fresh one for the same mode and pool.
    ///
    /// Returns `false` while the current round is still being played.
    pub fn next(&mut self) -> Result<bool, RoundError> {
        if !self.round.is_finished() {
            return Ok(false);
        }
        self.round = Round::generate(self.mode, &self.pool, &mut self.rng)?;
        self.rounds_started += 1;
        Ok(true)
    }

    pub fn view(&self) -> GameView {
        GameView::from_round(&self.round)
    }
}
