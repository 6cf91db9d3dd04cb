use serde::{Deserialize, Serialize};

/// One output row: a word and its formatted location string,
/// e.g. `1(2, 7) | 3(14)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub word: String,
    pub page_refs: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

impl OutputFormat {
    /// Extension appended to the input stem when no output path is given.
    pub fn default_extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => ".index.txt",
            OutputFormat::Csv => ".csv",
        }
    }
}
