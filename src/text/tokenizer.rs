use crate::config::Config;
use crate::wordlist::WordList;
use serde::{Deserialize, Serialize};

/// Literal patterns removed from every raw token, in the order they apply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StripPolicy {
    /// `(from, to)` substitutions applied before anything else.
    pub replacements: Vec<(String, String)>,
    /// Each suffix is checked once, in table order.
    pub suffixes: Vec<String>,
    /// Characters trimmed from both ends.
    pub trim_chars: String,
    /// Characters trimmed from the end only, after `trim_chars`.
    pub trailing: String,
}

impl Default for StripPolicy {
    fn default() -> Self {
        let mut suffixes: Vec<String> = ["'s", "'re", "'ve", "'t"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        suffixes.extend((0..=6).map(|n| format!("[{}]", n)));

        Self {
            replacements: vec![("\u{2019}".to_string(), "'".to_string())],
            suffixes,
            trim_chars: "()'\":,\u{201d}\u{201c}\u{2018}?;-\u{2022}\u{2019}\u{2014}\u{2026}[]!"
                .to_string(),
            trailing: ".".to_string(),
        }
    }
}

impl StripPolicy {
    fn apply_once(&self, token: &str) -> String {
        let mut word = token.to_string();
        for (from, to) in &self.replacements {
            if !from.is_empty() {
                word = word.replace(from.as_str(), to);
            }
        }

        for suffix in &self.suffixes {
            if !suffix.is_empty() && word.ends_with(suffix.as_str()) {
                word.truncate(word.len() - suffix.len());
            }
        }

        word.trim_matches(|c: char| self.trim_chars.contains(c))
            .trim_end_matches(|c: char| self.trailing.contains(c))
            .to_lowercase()
    }
}

/// Normalizes a raw token until it no longer changes.
///
/// A single stripping pass can expose another strippable suffix
/// (`"nmap's."` becomes `"nmap's"`), so the pass repeats to a fixed point.
pub fn normalize_token(token: &str, policy: &StripPolicy) -> String {
    let mut current = policy.apply_once(token);
    loop {
        let next = policy.apply_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Everything eligibility depends on besides the token itself.
pub struct TokenFilter<'a> {
    pub common_words: &'a WordList,
    pub min_length: usize,
    pub url_prefixes: &'a [String],
}

impl<'a> TokenFilter<'a> {
    pub fn from_config(config: &'a Config, common_words: &'a WordList) -> Self {
        Self {
            common_words,
            min_length: config.min_word_length,
            url_prefixes: &config.url_prefixes,
        }
    }
}

pub fn is_eligible(word: &str, filter: &TokenFilter<'_>) -> bool {
    if word.is_empty() || word.chars().count() < filter.min_length {
        return false;
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }

    let lower = word.to_lowercase();
    if filter.common_words.contains(&lower)
        || filter.common_words.contains(&format!("{}s", lower))
    {
        return false;
    }

    !filter
        .url_prefixes
        .iter()
        .any(|prefix| word.starts_with(prefix.as_str()))
}

/// Splits sanitized page text into normalized tokens and keeps the eligible ones.
pub fn tokenize_page(text: &str, policy: &StripPolicy, filter: &TokenFilter<'_>) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| normalize_token(raw, policy))
        .filter(|word| is_eligible(word, filter))
        .collect()
}
