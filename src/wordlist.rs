use crate::error::{IndexerError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Lower-cased common words that never make it into the index.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// One word per line; blank lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IndexerError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Downloads a whitespace-separated word list.
    pub async fn fetch(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sans-indexer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IndexerError::Network(format!("Failed to create HTTP client: {}", e)))?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| IndexerError::Network(format!("Failed to fetch word list: {}", e)))?;
        if !response.status().is_success() {
            return Err(IndexerError::Network(format!(
                "Word list fetch failed with status {}",
                response.status()
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| IndexerError::Network(format!("Failed to read word list: {}", e)))?;

        let list = Self::from_words(body.split_whitespace());
        if list.is_empty() {
            return Err(IndexerError::Network(format!(
                "Word list at {} is empty",
                url
            )));
        }
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Uses the local list when a path is given, otherwise downloads `default_url`.
pub async fn load_common_words(path: Option<&Path>, default_url: &str) -> Result<WordList> {
    let list = match path {
        Some(path) => {
            info!("Loading custom word list from: {}", path.display());
            WordList::from_file(path)?
        }
        None => {
            info!("Downloading default English word list from: {}", default_url);
            WordList::fetch(default_url).await?
        }
    };
    info!("Loaded {} common words", list.len());
    Ok(list)
}
