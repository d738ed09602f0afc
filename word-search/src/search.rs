use dictionary::{Dictionary, Entry, Meaning};

pub const EMPTY_INPUT_MESSAGE: &str = "Input field empty";
pub const NOT_FOUND_MESSAGE: &str = "Word not found";

/// What a successful lookup leaves behind for rendering: the first entry's
/// meanings verbatim, and at most one pronunciation clip URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub meanings: Vec<Meaning>,
    pub audio_url: Option<String>,
}

impl LookupResult {
    fn from_entry(entry: Entry) -> Self {
        let audio_url = entry
            .phonetics
            .into_iter()
            .filter_map(|phonetic| phonetic.audio)
            .find(|audio| !audio.is_empty());
        Self {
            meanings: entry.meanings,
            audio_url,
        }
    }
}

/// The controller's single display state. Exactly one variant is active at a
/// time; a new error discards a shown result and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Error(String),
    Ready(LookupResult),
}

/// Mediates between raw user input and a displayable result. Owns the query
/// string and the display state, which change only through the three
/// operations below.
pub struct SearchController {
    dictionary: Dictionary,
    query: String,
    state: UiState,
}

impl SearchController {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            query: String::new(),
            state: UiState::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Replaces the query verbatim; trimming happens at submit time only.
    /// Resuming input dismisses a shown error, but a shown result stays
    /// until the next submit or clear.
    pub fn update_query(&mut self, new_value: impl Into<String>) {
        self.query = new_value.into();
        if matches!(self.state, UiState::Error(_)) {
            self.state = UiState::Idle;
        }
    }

    /// Submits the current query. An empty (or whitespace-only) query is a
    /// local validation failure and performs no request. Every way a lookup
    /// can fail collapses into the one "Word not found" message.
    ///
    /// The lookup runs to completion before this returns and the controller
    /// is borrowed mutably throughout, so submissions are serialized and a
    /// stale response can never overwrite a newer one.
    pub async fn submit(&mut self) {
        let word = self.query.trim();
        if word.is_empty() {
            self.state = UiState::Error(EMPTY_INPUT_MESSAGE.to_owned());
            return;
        }
        let outcome = lookup(&self.dictionary, word).await;
        self.state = match outcome {
            Some(result) => UiState::Ready(result),
            None => UiState::Error(NOT_FOUND_MESSAGE.to_owned()),
        };
    }

    /// Back to the initial state: no result, no error, empty query.
    /// Idempotent from any state.
    pub fn clear(&mut self) {
        self.query.clear();
        self.state = UiState::Idle;
    }
}

async fn lookup(dictionary: &Dictionary, word: &str) -> Option<LookupResult> {
    let entries = match dictionary.get_entries(word).await {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(word, %error, "lookup failed");
            return None;
        }
    };
    // only the first entry is rendered; an empty array counts as not found
    let entry = entries.into_iter().next()?;
    Some(LookupResult::from_entry(entry))
}
