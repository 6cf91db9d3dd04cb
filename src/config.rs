use crate::error::{IndexerError, Result};
use crate::text::StripPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_wordlist_url")]
    pub wordlist_url: String,
    /// Words referenced on this many pages or more are left out of the index.
    #[serde(default = "default_max_references")]
    pub max_references: usize,
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
    #[serde(default = "default_url_prefixes")]
    pub url_prefixes: Vec<String>,
    #[serde(default)]
    pub strip: StripPolicy,
}

fn default_wordlist_url() -> String {
    DEFAULT_WORDLIST_URL.to_string()
}

fn default_max_references() -> usize {
    15
}

fn default_min_word_length() -> usize {
    3
}

fn default_url_prefixes() -> Vec<String> {
    vec!["http://".to_string(), "https://".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wordlist_url: default_wordlist_url(),
            max_references: default_max_references(),
            min_word_length: default_min_word_length(),
            url_prefixes: default_url_prefixes(),
            strip: StripPolicy::default(),
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("sans-indexer");
    path.push("config.json");
    Some(path)
}

/// Loads the config from `explicit` if given, else from the user config
/// directory when a file exists there, else falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(IndexerError::NotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    tracing::debug!("Loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(content)
        .map_err(|e| IndexerError::Config(format!("Failed to parse config: {}", e)))?;

    if config.max_references == 0 {
        return Err(IndexerError::Config(
            "max_references must be at least 1".to_string(),
        ));
    }
    if config.min_word_length == 0 {
        return Err(IndexerError::Config(
            "min_word_length must be at least 1".to_string(),
        ));
    }

    Ok(config)
}
