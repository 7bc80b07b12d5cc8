//! Test data builders.

use serde_json::{json, Value};

/// Small vocabulary: 5 Basics, 3 People, 1 Verbs, plus an ignored category.
pub fn vocabulary() -> Value {
    json!({
        "Basics": [
            {"spanish": "Y", "english": "and", "phonetic": "ee"},
            {"spanish": "O", "english": "or", "phonetic": "oh"},
            {"spanish": "Pero", "english": "but", "phonetic": "PEH-roh"},
            {"spanish": "Porque", "english": "because", "phonetic": "POR-keh"},
            {"spanish": "También", "english": "also, too", "phonetic": "tahm-BYEN"}
        ],
        "people": [
            {"es": "Tía", "en": "Dudette"},
            {"es": "Tío", "en": "Dude, Guy (Spain)"},
            {"es": "Amigo", "en": "Friend (masculine)"}
        ],
        "Verbs (present)": [
            {"word": "yo muevo", "english": "I move", "ipa": "MWEH-boh"}
        ],
        "Animals": [
            {"spanish": "el gato", "english": "the cat"}
        ]
    })
}

/// Join command lines into a stdin script.
pub fn script(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
