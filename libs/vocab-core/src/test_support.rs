//! Word factories shared by unit tests.

use crate::types::Word;

pub fn word(id: &str, text: &str) -> Word {
    Word {
        id: id.to_string(),
        text: text.to_string(),
        part_of_speech: "noun".to_string(),
        definitions: vec![format!("definition of {}", text)],
        examples: Vec::new(),
        translation: String::new(),
        explanation: String::new(),
        collision_group_id: None,
        set_name: "Test".to_string(),
    }
}

pub fn grouped(id: &str, text: &str, group: &str) -> Word {
    Word {
        collision_group_id: Some(group.to_string()),
        ..word(id, text)
    }
}

pub fn with_example(id: &str, text: &str, example: &str) -> Word {
    Word {
        examples: vec![example.to_string()],
        ..word(id, text)
    }
}

/// `count` distinct words with ids `w0`, `w1`, ...
pub fn pool(count: usize) -> Vec<Word> {
    (0..count)
        .map(|i| word(&format!("w{}", i), &format!("word{}", i)))
        .collect()
}
