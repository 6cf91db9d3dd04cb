use crate::config::{load_config, Config};
use crate::error::Result;
use crate::index::{build_entries, build_page_index, IndexSummary};
use crate::models::{BookLayout, OutputFormat};
use crate::parsers::{extract_book_pages, PageSource, PdfParser};
use crate::text::TokenFilter;
use crate::wordlist::load_common_words;
use crate::writer::write_index;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one indexing run needs, independent of how it was invoked.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub layout: BookLayout,
    pub wordlist: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub max_references: Option<usize>,
    pub min_word_length: Option<usize>,
}

impl IndexOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file, self.format))
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = load_config(self.config_file.as_deref())?;
        if let Some(max) = self.max_references {
            config.max_references = max;
        }
        if let Some(min) = self.min_word_length {
            config.min_word_length = min;
        }
        Ok(config)
    }
}

/// `book.pdf` becomes `book.index.txt` (or `book.csv`).
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let raw = input.to_string_lossy();
    let stem = match raw.len().checked_sub(4) {
        Some(cut) if raw.is_char_boundary(cut) && raw[cut..].eq_ignore_ascii_case(".pdf") => {
            &raw[..cut]
        }
        _ => &raw[..],
    };
    PathBuf::from(format!("{}{}", stem, format.default_extension()))
}

/// Runs the whole pipeline: word list, page extraction, indexing, output.
///
/// Any stage failure aborts the run; the output file is only created once
/// the index has been built.
pub async fn run_index(options: &IndexOptions) -> Result<IndexSummary> {
    let output_path = options.output_path();
    options.layout.check_shape()?;
    let config = options.resolve_config()?;

    let common_words = load_common_words(options.wordlist.as_deref(), &config.wordlist_url).await?;

    info!("Extracting valid book pages from: {}", options.input_file.display());
    let parser = PdfParser::new(&options.input_file)?;
    info!("{} has {} pages", parser.file_path(), parser.page_count());
    let pages = extract_book_pages(&parser, &options.layout)?;

    let filter = TokenFilter::from_config(&config, &common_words);
    let page_index = build_page_index(&pages, &config.strip, &filter);
    let (entries, summary) = build_entries(&page_index, config.max_references);
    info!(
        "Found {} unique words across {} indexed pages",
        summary.unique_words, summary.pages
    );
    info!(
        "{} words dropped for appearing on {} or more pages",
        summary.too_frequent, config.max_references
    );

    info!("Writing {} index entries to: {}", summary.entries, output_path.display());
    write_index(&output_path, options.format, &entries)?;

    Ok(summary)
}
