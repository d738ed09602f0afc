use thiserror::Error;

mod api;
mod entry;

pub use entry::{Definition, Entry, Meaning, Phonetic};

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service")]
    Fetch(#[source] reqwest::Error),
    #[error("the dictionary service responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to deserialize the dictionary response")]
    Deserialize(#[source] reqwest::Error),
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Points the client at a different service prefix, used by tests to
    /// target a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches all entries the service knows for `word`. An unknown word is a
    /// status error (the service answers 404), not an empty list.
    pub async fn get_entries(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        api::get_entries(&self.client, &self.base_url, word).await
    }
}
