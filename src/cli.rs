use crate::commands::{run_index, IndexOptions};
use crate::models::{BookLayout, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line surface; clap types stop here and the pipeline only sees
/// [`IndexOptions`].
#[derive(Parser, Debug)]
#[command(
    name = "sans-indexer",
    version,
    about = "Generate a keyword index from a multi-book course PDF."
)]
pub struct Cli {
    /// Input PDF file
    #[arg(short = 'i', long)]
    pub input_file: PathBuf,

    /// Output file; defaults to the input name with .index.txt or .csv
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Write the index as CSV instead of plain text
    #[arg(long)]
    pub csv: bool,

    /// 1-based PDF page where each book starts
    #[arg(long, num_args = 1.., required = true)]
    pub book_starts: Vec<u32>,

    /// Pages to skip at the start of each book (blank or unnumbered pages)
    #[arg(long, num_args = 1.., required = true)]
    pub skip_first: Vec<u32>,

    /// Pages to skip at the end of each book
    #[arg(long, num_args = 1.., required = true)]
    pub skip_last: Vec<u32>,

    /// Common-word list, one word per line; downloaded when omitted
    #[arg(long)]
    pub wordlist: Option<PathBuf>,

    /// JSON config file with indexing policy
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Drop words found on this many pages or more
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_refs: Option<u64>,

    /// Minimum word length in characters
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub min_length: Option<u64>,

    /// Log per-page progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for IndexOptions {
    fn from(cli: Cli) -> Self {
        IndexOptions {
            input_file: cli.input_file,
            output_file: cli.output_file,
            format: if cli.csv {
                OutputFormat::Csv
            } else {
                OutputFormat::Text
            },
            layout: BookLayout::new(cli.book_starts, cli.skip_first, cli.skip_last),
            wordlist: cli.wordlist,
            config_file: cli.config,
            max_references: cli.max_refs.map(|n| n as usize),
            min_word_length: cli.min_length.map(|n| n as usize),
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let options = IndexOptions::from(self);
        let output = options.output_path();
        let summary = run_index(&options).await?;

        println!(
            "Indexed {} words from {} pages into {}",
            summary.entries,
            summary.pages,
            output.display()
        );
        Ok(())
    }
}
