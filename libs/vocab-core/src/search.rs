//! Word lookup across the whole library.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

use crate::types::{Library, Word};

pub const NO_DEFINITION: &str = "No definition available.";
pub const NO_EXAMPLE: &str = "No example sentence available.";

/// Words whose text contains `query`, ignoring case.
///
/// A blank query matches nothing. Entries with the same text in the same set
/// are reported once.
pub fn search<'a>(library: &'a Library, query: &str) -> Vec<&'a Word> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    library
        .words()
        .filter(|word| word.text.to_lowercase().contains(&query))
        .filter(|&word| seen.insert((word.text.as_str(), word.set_name.as_str())))
        .collect()
}

/// The featured word for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOfTheDay {
    pub date: NaiveDate,
    pub word: Word,
    pub definition: String,
    pub example: String,
}

/// Pick the featured word for `date`; the same date always yields the same word.
pub fn word_of_the_day(library: &Library, date: NaiveDate) -> Option<WordOfTheDay> {
    let count = library.word_count();
    if count == 0 {
        return None;
    }

    let index = i64::from(date.num_days_from_ce()).rem_euclid(count as i64) as usize;
    let word = library.words().nth(index)?.clone();

    Some(WordOfTheDay {
        date,
        definition: word
            .definitions
            .first()
            .cloned()
            .unwrap_or_else(|| NO_DEFINITION.to_string()),
        example: word
            .examples
            .first()
            .cloned()
            .unwrap_or_else(|| NO_EXAMPLE.to_string()),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_example, word};
    use crate::types::VocabSet;
    use pretty_assertions::assert_eq;

    fn library() -> Library {
        let mut dup = word("cat-2", "cat");
        dup.set_name = "Animals".to_string();
        let mut animals = vec![word("cat-1", "cat"), word("cap", "capybara")];
        for w in &mut animals {
            w.set_name = "Animals".to_string();
        }
        animals.push(dup);

        Library::new(vec![
            VocabSet {
                id: "animals".to_string(),
                name: "Animals".to_string(),
                words: animals,
            },
            VocabSet {
                id: "misc".to_string(),
                name: "Test".to_string(),
                words: vec![word("cat-3", "Category"), with_example("dog", "dog", "A dog.")],
            },
        ])
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let library = library();
        let ids: Vec<&str> = search(&library, "  CAT ").iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["cat-1", "cat-3"]);
    }

    #[test]
    fn search_dedupes_within_a_set() {
        let library = library();
        let results = search(&library, "ca");
        let texts: Vec<&str> = results.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["cat", "capybara", "Category"]);
    }

    #[test]
    fn blank_query_finds_nothing() {
        assert!(search(&library(), "   ").is_empty());
    }

    #[test]
    fn word_of_the_day_is_stable() {
        let library = library();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let first = word_of_the_day(&library, date).unwrap();
        let again = word_of_the_day(&library, date).unwrap();
        assert_eq!(first, again);

        let next = word_of_the_day(&library, date.succ_opt().unwrap()).unwrap();
        assert_ne!(first.word.id, next.word.id);
    }

    #[test]
    fn word_of_the_day_placeholders() {
        let library = Library::new(vec![VocabSet {
            id: "one".to_string(),
            name: "One".to_string(),
            words: vec![word("solo", "solo")],
        }]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let featured = word_of_the_day(&library, date).unwrap();

        assert_eq!(featured.definition, "definition of solo");
        assert_eq!(featured.example, NO_EXAMPLE);
    }

    #[test]
    fn word_of_the_day_needs_words() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(word_of_the_day(&Library::default(), date).is_none());
    }
}
