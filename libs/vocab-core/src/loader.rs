//! Parsing of the manifest and set files into normalized words.
//!
//! # Manifest
//! ```json
//! [{ "id": "core", "name": "Core Words", "path": "/data/core.json" }]
//! ```
//!
//! # Set file
//! ```json
//! [{
//!   "word": "serene",
//!   "pos": "adjective",
//!   "definitions": ["calm and peaceful"],
//!   "examples": ["The lake was serene at dawn."],
//!   "translation_meaning": "sereno",
//!   "collision_group_id": "cg-serene"
//! }]
//! ```
//!
//! Fetching the bytes is the caller's job; this module only parses.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::{LoadError, Result};
use crate::types::{RawWord, VocabSet, VocabSetInfo, Word, WordId};

/// Maximum number of definitions kept per word.
pub const MAX_DEFINITIONS: usize = 4;

/// Maximum number of example sentences kept per word.
pub const MAX_EXAMPLES: usize = 2;

/// Part of speech used when a record has none.
pub const UNKNOWN_POS: &str = "unspecified";

/// Parse manifest content into set descriptors, preserving order.
pub fn parse_manifest(content: &str) -> Result<Vec<VocabSetInfo>> {
    let entries: Vec<VocabSetInfo> =
        serde_json::from_str(content).map_err(LoadError::Manifest)?;

    if entries.is_empty() {
        return Err(LoadError::EmptyManifest);
    }

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(LoadError::DuplicateSetId(entry.id.clone()));
        }
    }

    Ok(entries)
}

/// A record that could not be turned into a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub set_id: String,
    pub index: usize,
    pub word: String,
    pub reason: &'static str,
}

/// Result of parsing one set file.
#[derive(Debug, Clone)]
pub struct LoadedSet {
    pub set: VocabSet,
    pub skipped: Vec<SkippedRecord>,
}

/// Hands out word ids that are unique across one load.
#[derive(Debug, Default)]
pub struct IdRegistry {
    taken: HashSet<WordId>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `preferred` if it is free, otherwise `fallback`, suffixed until unique.
    pub fn claim(&mut self, preferred: Option<&str>, fallback: String) -> WordId {
        if let Some(id) = preferred.filter(|id| !id.is_empty()) {
            if self.taken.insert(id.to_string()) {
                return id.to_string();
            }
        }

        let mut candidate = fallback.clone();
        let mut suffix = 1;
        while !self.taken.insert(candidate.clone()) {
            suffix += 1;
            candidate = format!("{}-{}", fallback, suffix);
        }
        candidate
    }
}

/// Parse a set file and normalize its records.
pub fn parse_set(info: &VocabSetInfo, content: &str, ids: &mut IdRegistry) -> Result<LoadedSet> {
    let records: Vec<RawWord> =
        serde_json::from_str(content).map_err(|source| LoadError::SetFile {
            path: info.path.clone(),
            source,
        })?;

    let mut words = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, raw) in records.into_iter().enumerate() {
        match normalize(raw, index, &info.name, ids) {
            Ok(word) => words.push(word),
            Err((word, reason)) => skipped.push(SkippedRecord {
                set_id: info.id.clone(),
                index,
                word,
                reason,
            }),
        }
    }

    Ok(LoadedSet {
        set: VocabSet {
            id: info.id.clone(),
            name: info.name.clone(),
            words,
        },
        skipped,
    })
}

/// Convert a raw record into a word.
///
/// On failure returns the record's word text and the reason it was dropped.
fn normalize(
    raw: RawWord,
    index: usize,
    set_name: &str,
    ids: &mut IdRegistry,
) -> std::result::Result<Word, (String, &'static str)> {
    let text = raw.word.trim().to_string();
    if text.is_empty() {
        return Err((raw.word, "missing word"));
    }

    let definitions = collect_fields(
        raw.definitions,
        [raw.definition_1, raw.definition_2, raw.definition_3, raw.definition_4],
        MAX_DEFINITIONS,
    );
    if definitions.is_empty() {
        return Err((text, "no definitions"));
    }

    let examples = collect_fields(raw.examples, [raw.example_1, raw.example_2], MAX_EXAMPLES);

    let collision_group_id = raw
        .collision_group_id
        .map(|group| group.trim().to_string())
        .filter(|group| !group.is_empty());

    let id = ids.claim(
        collision_group_id.as_deref(),
        format!("{}-{}-{}", set_name, text, index),
    );

    Ok(Word {
        id,
        text,
        part_of_speech: raw
            .pos
            .map(|pos| pos.trim().to_string())
            .filter(|pos| !pos.is_empty())
            .unwrap_or_else(|| UNKNOWN_POS.to_string()),
        definitions,
        examples,
        translation: raw.translation_meaning.unwrap_or_default(),
        explanation: raw.explanation.unwrap_or_default(),
        collision_group_id,
        set_name: set_name.to_string(),
    })
}

/// Array values first, then numbered fields; blanks dropped, order kept.
fn collect_fields<const N: usize>(
    listed: Vec<String>,
    numbered: [Option<String>; N],
    limit: usize,
) -> Vec<String> {
    listed
        .into_iter()
        .chain(numbered.into_iter().flatten())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .take(limit)
        .collect()
}
