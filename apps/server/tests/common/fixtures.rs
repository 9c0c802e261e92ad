//! Test fixtures: vocabulary files written into a temporary site root.

use serde_json::{json, Value};

/// Animals: six words, every one with an example sentence.
pub fn animals_set() -> Value {
    json!([
        {
            "word": "cat",
            "pos": "noun",
            "definitions": ["a small domesticated feline"],
            "examples": ["The cat sat on the mat."],
            "translation_meaning": "gato"
        },
        {
            "word": "dog",
            "pos": "noun",
            "definition_1": "a domesticated canine",
            "definition_2": "a loyal companion animal",
            "example_1": "The dog barked all night."
        },
        {
            "word": "horse",
            "pos": "noun",
            "definitions": ["a large animal ridden by people"],
            "examples": ["She rode the horse to town."]
        },
        {
            "word": "owl",
            "pos": "noun",
            "definitions": ["a nocturnal bird of prey"],
            "examples": ["An owl hooted in the dark."]
        },
        {
            "word": "fox",
            "definitions": ["a small wild canine with a bushy tail"],
            "examples": ["The fox slipped into the woods."],
            "explanation": "Often used for cunning people."
        },
        {
            "word": "otter",
            "definitions": ["a playful river mammal"],
            "examples": ["An otter floated on its back."]
        }
    ])
}

/// Fruits: three usable words and one record without definitions.
pub fn fruits_set() -> Value {
    json!([
        { "word": "apple", "definitions": ["a round orchard fruit"] },
        { "word": "pear", "definitions": ["a fruit narrow at the top"] },
        { "word": "plum", "definitions": ["a small purple stone fruit"] },
        { "word": "quince", "definitions": [] }
    ])
}

/// Tiny: two words, too few for any game mode.
pub fn tiny_set() -> Value {
    json!([
        { "word": "ant", "definitions": ["a small insect"], "examples": ["An ant carried a crumb."] },
        { "word": "bee", "definitions": ["an insect that makes honey"] }
    ])
}

/// Manifest entry pointing at `/data/<id>.json`.
pub fn manifest_entry(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "path": format!("/data/{}.json", id) })
}

/// The default manifest: animals, fruits and tiny, in that order.
pub fn default_manifest() -> Value {
    json!([
        manifest_entry("animals", "Animals"),
        manifest_entry("fruits", "Fruits"),
        manifest_entry("tiny", "Tiny"),
    ])
}

/// Matching action bodies.
pub fn click_word(word_id: &str) -> Value {
    json!({ "type": "click_word", "word_id": word_id })
}

pub fn click_definition(slot: u64) -> Value {
    json!({ "type": "click_definition", "slot": slot })
}

pub fn check() -> Value {
    json!({ "type": "check" })
}

pub fn select_option(word_id: &str) -> Value {
    json!({ "type": "select_option", "word_id": word_id })
}

pub fn next() -> Value {
    json!({ "type": "next" })
}
