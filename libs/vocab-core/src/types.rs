//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a word, unique across every set of one load.
pub type WordId = String;

/// A normalized vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub part_of_speech: String,
    /// Never empty; records without a definition are rejected at load time.
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub translation: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_group_id: Option<String>,
    pub set_name: String,
}

impl Word {
    /// Collision group, ignoring empty values.
    pub fn collision_group(&self) -> Option<&str> {
        self.collision_group_id
            .as_deref()
            .filter(|group| !group.is_empty())
    }

    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}

/// Raw word record as stored in a set file.
///
/// Definitions and examples are accepted either as arrays or as numbered
/// fields (`definition_1`..`definition_4`, `example_1`, `example_2`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWord {
    pub word: String,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub definition_1: Option<String>,
    #[serde(default)]
    pub definition_2: Option<String>,
    #[serde(default)]
    pub definition_3: Option<String>,
    #[serde(default)]
    pub definition_4: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub example_1: Option<String>,
    #[serde(default)]
    pub example_2: Option<String>,
    #[serde(default, alias = "translation")]
    pub translation_meaning: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub collision_group_id: Option<String>,
}

/// Manifest entry describing one set file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabSetInfo {
    pub id: String,
    pub name: String,
    pub path: String,
}

/// A named, ordered collection of words loaded from one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabSet {
    pub id: String,
    pub name: String,
    pub words: Vec<Word>,
}

/// Every set produced by one load, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    sets: Vec<VocabSet>,
}

impl Library {
    pub fn new(sets: Vec<VocabSet>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[VocabSet] {
        &self.sets
    }

    pub fn set(&self, id: &str) -> Option<&VocabSet> {
        self.sets.iter().find(|set| set.id == id)
    }

    pub fn contains_set(&self, id: &str) -> bool {
        self.set(id).is_some()
    }

    /// All words of all sets, in library order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sets.iter().flat_map(|set| set.words.iter())
    }

    pub fn word_count(&self) -> usize {
        self.sets.iter().map(|set| set.words.len()).sum()
    }
}

/// Identity of one target definition within a round.
///
/// Matches are keyed by this instead of the definition text so two targets
/// with identical wording stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionKey(pub usize);

impl fmt::Display for DefinitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A definition chosen for the round, paired with the word it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDefinition {
    pub key: DefinitionKey,
    pub word_id: WordId,
    pub definition: String,
}

/// Game mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Matching,
    ReverseMatch,
    FillInTheBlank,
}

impl GameMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matching => "matching",
            Self::ReverseMatch => "reverse_match",
            Self::FillInTheBlank => "fill_in_the_blank",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "matching" => Some(Self::Matching),
            "reverse_match" => Some(Self::ReverseMatch),
            "fill_in_the_blank" => Some(Self::FillInTheBlank),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the player is shown in a multiple-choice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prompt {
    /// Reverse-match: pick the word for this definition.
    Definition { text: String },
    /// Fill-in-the-blank: pick the word hidden in this sentence.
    Sentence { text: String, blank_word: String },
}

impl Prompt {
    pub fn text(&self) -> &str {
        match self {
            Self::Definition { text } | Self::Sentence { text, .. } => text,
        }
    }
}

/// A multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub mode: GameMode,
    pub correct_word: Word,
    pub options: Vec<Word>,
    pub prompt: Prompt,
}
