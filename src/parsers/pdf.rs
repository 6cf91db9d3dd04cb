use crate::error::{IndexerError, Result};
use crate::parsers::PageSource;
use ::pdf::content::{Op, TextDrawAdjusted};
use ::pdf::file::{CachedFile, FileOptions};
use ::pdf::font::ToUnicodeMap;
use ::pdf::object::{Resolve, Resources};
use ::pdf::primitive::{Name, PdfString};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

pub struct PdfParser {
    file_path: String,
    file: CachedFile<Vec<u8>>,
}

impl PdfParser {
    pub fn new(path: &Path) -> Result<Self> {
        let file_path = path.display().to_string();
        if !path.exists() {
            return Err(IndexerError::NotFound(file_path));
        }
        let file = FileOptions::cached()
            .open(path)
            .map_err(|e| IndexerError::PdfParse(format!("Failed to open {}: {}", file_path, e)))?;

        Ok(Self { file_path, file })
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl PageSource for PdfParser {
    fn page_count(&self) -> u32 {
        self.file.num_pages()
    }

    fn page_text(&self, index: u32) -> Result<String> {
        let pdf_err = |e: ::pdf::error::PdfError| {
            IndexerError::PdfParse(format!("{} page {}: {}", self.file_path, index + 1, e))
        };

        let resolver = self.file.resolver();
        let page = self.file.get_page(index).map_err(pdf_err)?;
        let Some(content) = &page.contents else {
            return Ok(String::new());
        };
        let resources = page.resources().map_err(pdf_err)?;
        let ops = content.operations(&resolver).map_err(pdf_err)?;

        Ok(ops_to_text(&ops, &resolver, resources))
    }
}

/// Concatenates the text-showing operators of a content stream, starting a
/// new line whenever the text position moves down.
fn ops_to_text(ops: &[Op], resolver: &impl Resolve, resources: &Resources) -> String {
    let fonts = FontMaps::new(resolver, resources);
    let mut current_font: Option<Name> = None;
    let mut out = String::new();

    for op in ops {
        match op {
            Op::TextFont { name, .. } => current_font = Some(name.clone()),
            Op::TextDraw { text } => {
                push_run(&mut out, &fonts.decode(text, current_font.as_ref()));
            }
            Op::TextDrawAdjusted { array } => {
                let mut run = String::new();
                for item in array {
                    match item {
                        TextDrawAdjusted::Text(text) => {
                            let decoded = fonts.decode(text, current_font.as_ref());
                            run.push_str(decoded.trim_matches('\0'));
                        }
                        TextDrawAdjusted::Spacing(gap) if is_word_gap(*gap) && !run.is_empty() => {
                            run.push(' ');
                        }
                        _ => {}
                    }
                }
                push_run(&mut out, &run);
            }
            Op::TextNewline => out.push('\n'),
            Op::MoveTextPosition { translation } if translation.y < 0.0 => out.push('\n'),
            _ => {}
        }
    }

    out
}

/// Kerning inside a TJ array is a small adjustment; a word space shows up as
/// a large negative one (thousandths of an em).
const WORD_GAP: f32 = -200.0;

fn is_word_gap(adjustment: f32) -> bool {
    adjustment <= WORD_GAP
}

fn push_run(out: &mut String, run: &str) {
    let run = run.trim_matches('\0');
    if run.is_empty() {
        return;
    }
    if !out.is_empty() && !out.ends_with(char::is_whitespace) && !run.starts_with(char::is_whitespace)
    {
        out.push(' ');
    }
    out.push_str(run);
}

/// Lazily loaded ToUnicode maps keyed by font resource name.
struct FontMaps<'a, R: Resolve> {
    resolver: &'a R,
    resources: &'a Resources,
    cache: RefCell<HashMap<Name, Option<ToUnicodeMap>>>,
}

impl<'a, R: Resolve> FontMaps<'a, R> {
    fn new(resolver: &'a R, resources: &'a Resources) -> Self {
        Self {
            resolver,
            resources,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn decode(&self, text: &PdfString, font: Option<&Name>) -> String {
        let Some(font) = font else {
            return text.to_string_lossy();
        };

        let mut cache = self.cache.borrow_mut();
        let map = cache.entry(font.clone()).or_insert_with(|| {
            self.resources
                .fonts
                .get(font)
                .and_then(|lazy| lazy.load(self.resolver).ok())
                .and_then(|font| font.to_unicode(self.resolver))
                .and_then(|map| map.ok())
        });

        match map {
            Some(map) => decode_with_map(text.as_bytes(), map)
                .unwrap_or_else(|| text.to_string_lossy()),
            None => text.to_string_lossy(),
        }
    }
}

/// Tries one- and two-byte codes and keeps whichever maps more glyphs.
fn decode_with_map(bytes: &[u8], map: &ToUnicodeMap) -> Option<String> {
    let narrow = decode_codes(bytes.iter().map(|&b| b as u16), map);
    let best = if bytes.len() % 2 == 0 {
        let wide = decode_codes(
            bytes.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]])),
            map,
        );
        if wide.1 > narrow.1 {
            wide
        } else {
            narrow
        }
    } else {
        narrow
    };

    let (text, matched) = best;
    if matched == 0 {
        None
    } else {
        Some(text)
    }
}

fn decode_codes(codes: impl Iterator<Item = u16>, map: &ToUnicodeMap) -> (String, usize) {
    let mut out = String::new();
    let mut matched = 0;
    for code in codes {
        if let Some(s) = map.get(code) {
            out.push_str(s);
            matched += 1;
        }
    }
    (out, matched)
}
