use serde::Deserialize;

/// One dictionary entry for a looked-up word. The service may return several
/// entries per word; fields it sends that are not modeled here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A pronunciation record, optionally carrying an audio clip URL. The service
/// sometimes sends `audio` as an empty string rather than omitting it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meaning {
    // kept as a string, the service's part-of-speech vocabulary is open-ended
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_entry_and_ignores_unknown_fields() {
        let payload = serde_json::json!({
            "word": "hello",
            "phonetic": "/həˈləʊ/",
            "phonetics": [
                { "text": "/həˈləʊ/", "audio": "" },
                { "audio": "https://example.com/hello.mp3", "sourceUrl": "https://example.com" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {
                            "definition": "\"Hello!\" or an equivalent greeting.",
                            "synonyms": ["greeting"],
                            "antonyms": []
                        }
                    ],
                    "synonyms": ["greeting"]
                }
            ],
            "license": { "name": "CC BY-SA 3.0" }
        });
        let entry: Entry = serde_json::from_value(payload).unwrap();
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetics.len(), 2);
        assert_eq!(entry.phonetics[0].audio.as_deref(), Some(""));
        assert_eq!(
            entry.phonetics[1].audio.as_deref(),
            Some("https://example.com/hello.mp3")
        );
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(
            entry.meanings[0].definitions[0].definition,
            "\"Hello!\" or an equivalent greeting."
        );
        assert_eq!(entry.meanings[0].definitions[0].example, None);
    }

    #[test]
    fn missing_phonetics_and_meanings_default_to_empty() {
        let entry: Entry = serde_json::from_value(serde_json::json!({ "word": "hi" })).unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.meanings.is_empty());
    }
}
