//! Round generation for every game mode.
//!
//! Randomness is injected through any [`rand::Rng`], so callers decide
//! between an entropy-seeded generator and a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::error::RoundError;
use crate::matching::MatchRound;
use crate::types::{DefinitionKey, GameMode, Prompt, Question, TargetDefinition, Word};

/// Words shown in the word bank of a matching round.
pub const PRACTICE_SIZE: usize = 6;

/// Definitions to match per round.
pub const TARGET_COUNT: usize = 3;

/// Options offered by multiple-choice questions.
pub const OPTION_COUNT: usize = 4;

/// Replacement for the hidden word in fill-in-the-blank sentences.
pub const BLANK: &str = "_______";

/// Build a fresh matching round from `pool`.
pub fn build_matching_round<R: Rng + ?Sized>(
    pool: &[Word],
    rng: &mut R,
) -> Result<MatchRound, RoundError> {
    let eligible: Vec<&Word> = distinct_by_id(pool.iter().filter(|w| !w.definitions.is_empty()));
    let practice = pick_practice_words(eligible, rng);

    if practice.len() < TARGET_COUNT {
        return Err(RoundError::InsufficientData {
            mode: GameMode::Matching,
            required: TARGET_COUNT,
            available: practice.len(),
        });
    }

    let mut target_words: Vec<&Word> = practice.iter().collect();
    target_words.shuffle(rng);

    let targets: Vec<TargetDefinition> = target_words
        .into_iter()
        .take(TARGET_COUNT)
        .filter_map(|word| {
            word.definitions
                .choose(rng)
                .map(|definition| (word.id.clone(), definition.clone()))
        })
        .enumerate()
        .map(|(index, (word_id, definition))| TargetDefinition {
            key: DefinitionKey(index),
            word_id,
            definition,
        })
        .collect();

    let mut display_order: Vec<DefinitionKey> = targets.iter().map(|t| t.key).collect();
    display_order.shuffle(rng);

    Ok(MatchRound::new(practice, targets, display_order))
}

/// Shuffle, then keep up to [`PRACTICE_SIZE`] words with no two sharing a
/// collision group. Words without a group are never excluded.
fn pick_practice_words<R: Rng + ?Sized>(mut candidates: Vec<&Word>, rng: &mut R) -> Vec<Word> {
    candidates.shuffle(rng);

    let mut groups = HashSet::new();
    let mut practice = Vec::with_capacity(PRACTICE_SIZE);

    for word in candidates {
        if practice.len() >= PRACTICE_SIZE {
            break;
        }
        match word.collision_group() {
            Some(group) => {
                if groups.insert(group) {
                    practice.push(word.clone());
                }
            }
            None => practice.push(word.clone()),
        }
    }

    practice
}

/// Definition prompt, four word options.
pub fn build_reverse_match<R: Rng + ?Sized>(
    pool: &[Word],
    rng: &mut R,
) -> Result<Question, RoundError> {
    let mut candidates = distinct_by_id(pool.iter().filter(|w| !w.definitions.is_empty()));
    candidates.shuffle(rng);

    let (correct_word, mut options) = take_options(GameMode::ReverseMatch, &candidates)?;

    let definition = correct_word
        .definitions
        .choose(rng)
        .cloned()
        .unwrap_or_default();
    options.shuffle(rng);

    Ok(Question {
        mode: GameMode::ReverseMatch,
        correct_word,
        options,
        prompt: Prompt::Definition { text: definition },
    })
}

/// Example sentence with the word blanked out, four word options.
pub fn build_fill_in_the_blank<R: Rng + ?Sized>(
    pool: &[Word],
    rng: &mut R,
) -> Result<Question, RoundError> {
    let mut candidates = distinct_by_id(pool.iter().filter(|w| w.has_examples()));
    candidates.shuffle(rng);

    let (correct_word, mut options) = take_options(GameMode::FillInTheBlank, &candidates)?;

    let example = correct_word.examples.choose(rng).cloned().unwrap_or_default();
    let sentence = mask_word(&example, &correct_word.text);
    options.shuffle(rng);

    Ok(Question {
        mode: GameMode::FillInTheBlank,
        prompt: Prompt::Sentence {
            text: sentence,
            blank_word: correct_word.text.clone(),
        },
        correct_word,
        options,
    })
}

/// The first shuffled candidate is the answer; it and the next three form the options.
fn take_options(mode: GameMode, candidates: &[&Word]) -> Result<(Word, Vec<Word>), RoundError> {
    if candidates.len() < OPTION_COUNT {
        return Err(RoundError::InsufficientData {
            mode,
            required: OPTION_COUNT,
            available: candidates.len(),
        });
    }

    let options: Vec<Word> = candidates[..OPTION_COUNT]
        .iter()
        .map(|&word| word.clone())
        .collect();
    Ok((options[0].clone(), options))
}

/// Keep the first word for each id, preserving order.
fn distinct_by_id<'a>(words: impl Iterator<Item = &'a Word>) -> Vec<&'a Word> {
    let mut seen = HashSet::new();
    words.filter(|&word| seen.insert(word.id.as_str())).collect()
}

/// Replace the first whole-word, case-insensitive occurrence of `word` in
/// `sentence` with [`BLANK`].
///
/// Letters, digits and `_` count as word characters on either side.
pub fn mask_word(sentence: &str, word: &str) -> String {
    match find_whole_word(sentence, word) {
        Some((start, end)) => format!("{}{}{}", &sentence[..start], BLANK, &sentence[end..]),
        None => sentence.to_string(),
    }
}

fn find_whole_word(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        let end = match_at(haystack, start, needle)?;
        let clear_before = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let clear_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        (clear_before && clear_after).then_some((start, end))
    })
}

/// Byte offset where `needle` ends if it matches at `start`, ignoring case.
fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut rest = haystack[start..].chars();
    let mut end = start;

    for expected in needle.chars() {
        let actual = rest.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end += actual.len_utf8();
    }

    Some(end)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
