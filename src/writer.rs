use crate::error::Result;
use crate::models::{IndexEntry, OutputFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const CSV_HEADER: [&str; 2] = ["word", "page_refs"];

/// One `word: page_refs` line per entry.
pub fn write_text<W: Write>(writer: &mut W, entries: &[IndexEntry]) -> Result<()> {
    for entry in entries {
        writeln!(writer, "{}: {}", entry.word, entry.page_refs)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, entries: &[IndexEntry]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for entry in entries {
        csv.write_record([entry.word.as_str(), entry.page_refs.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_index(path: &Path, format: OutputFormat, entries: &[IndexEntry]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Text => write_text(&mut out, entries)?,
        OutputFormat::Csv => write_csv(&mut out, entries)?,
    }
    out.flush()?;

    let label = match format {
        OutputFormat::Text => "TXT",
        OutputFormat::Csv => "CSV",
    };
    info!("Written {} index to {}", label, path.display());
    Ok(())
}
