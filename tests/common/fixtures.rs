//! Static database fixtures shared by the harnesses.

use seek::Record;

/// The two-animal database used throughout the examples.
pub const ANIMALS_JSON: &str = r#"[
  {"title": "Red Panda", "description": "cute mammal", "url": "https://x.test"},
  {"title": "Owl", "content": "bird of prey"}
]"#;

/// Entries with missing, falsy and oddly-typed fields.
pub const UNTIDY_JSON: &str = r#"[
  {"title": "Heron", "description": "", "content": "wading bird", "url": null},
  {"title": 0, "description": "nameless", "url": false},
  {"title": 42, "description": true},
  {"title": ["a", "b"], "description": {"nested": "x"}, "url": "https://n.test"},
  "just a string",
  null,
  {}
]"#;

/// Normalised form of [`ANIMALS_JSON`].
pub fn animals() -> Vec<Record> {
    vec![
        Record::new("Red Panda", "cute mammal", "https://x.test"),
        Record::new("Owl", "bird of prey", ""),
    ]
}

/// A larger corpus for ordering checks.
pub fn zoo() -> Vec<Record> {
    [
        ("Aardvark", "burrowing mammal", "https://zoo.test/aardvark"),
        ("Barn Owl", "nocturnal bird", "https://zoo.test/barn-owl"),
        ("Capybara", "largest rodent", ""),
        ("Dolphin", "marine mammal", "https://zoo.test/dolphin"),
        ("Eagle Owl", "large owl", ""),
        ("Flamingo", "pink wading bird", "https://zoo.test/flamingo"),
    ]
    .into_iter()
    .map(|(title, description, url)| Record::new(title, description, url))
    .collect()
}
