//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use vocab_core::{Flashcard, GameAction, GameMode, GameView, SkippedRecord};
use vocab_core::{GameSession, Library, SelectionStore, WordOfTheDay};

// === Library ===

/// One set as listed in the library
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSummary {
    pub id: String,
    pub name: String,
    pub word_count: usize,
}

impl SetSummary {
    pub fn all(library: &Library) -> Vec<Self> {
        library
            .sets()
            .iter()
            .map(|set| Self {
                id: set.id.clone(),
                name: set.name.clone(),
                word_count: set.words.len(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Response for library status
#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub state: LoadState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub word_count: usize,
    pub sets: Vec<SetSummary>,
    pub skipped: Vec<SkippedRecord>,
}

// === Words ===

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub struct WordOfTheDayResponse {
    pub date: NaiveDate,
    pub definition: String,
    pub example: String,
    pub card: Flashcard,
}

impl From<WordOfTheDay> for WordOfTheDayResponse {
    fn from(featured: WordOfTheDay) -> Self {
        Self {
            date: featured.date,
            definition: featured.definition,
            example: featured.example,
            card: Flashcard::from(&featured.word),
        }
    }
}

// === Sessions ===

/// A set with its selection flag
#[derive(Debug, Serialize)]
pub struct SelectableSet {
    pub id: String,
    pub name: String,
    pub word_count: usize,
    pub selected: bool,
}

/// Selection screen state
#[derive(Debug, Serialize)]
pub struct SelectionView {
    pub sets: Vec<SelectableSet>,
    pub selected_ids: Vec<String>,
    pub total_selected_words: usize,
    pub can_prepare: bool,
}

impl SelectionView {
    pub fn new(selection: &SelectionStore, library: &Library) -> Self {
        Self {
            sets: library
                .sets()
                .iter()
                .map(|set| SelectableSet {
                    id: set.id.clone(),
                    name: set.name.clone(),
                    word_count: set.words.len(),
                    selected: selection.is_selected(&set.id),
                })
                .collect(),
            selected_ids: selection.selected_ids(library),
            total_selected_words: selection.total_selected_words(library),
            can_prepare: !selection.is_empty(),
        }
    }
}

/// Request body for changing the selection
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionRequest {
    Toggle { set_id: String },
    SelectAll,
    ClearAll,
}

/// Request body for starting a game
#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub mode: GameMode,
}

/// Current game state
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub mode: GameMode,
    pub rounds_started: u32,
    pub pool_size: usize,
    pub view: GameView,
}

impl From<&GameSession> for GameResponse {
    fn from(game: &GameSession) -> Self {
        Self {
            mode: game.mode(),
            rounds_started: game.rounds_started(),
            pool_size: game.pool().len(),
            view: game.view(),
        }
    }
}

/// Full session state
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub selection: SelectionView,
    pub game: Option<GameResponse>,
}
