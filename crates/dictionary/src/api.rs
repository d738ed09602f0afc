use crate::{DictionaryError, Entry};

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Entry>, DictionaryError> {
    // The word goes into the path as-is; a word that makes the URL unparsable
    // surfaces as a fetch error.
    let url = format!("{base_url}/{word}");
    tracing::debug!(%url, "looking up word");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        tracing::warn!(%status, word, "lookup rejected");
        return Err(DictionaryError::Status(status));
    }
    res.json::<Vec<Entry>>()
        .await
        .map_err(DictionaryError::Deserialize)
}
