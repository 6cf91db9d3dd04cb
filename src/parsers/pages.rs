use crate::error::Result;
use crate::models::{BookLayout, PageRecord};
use crate::text::sanitize;
use tracing::{debug, info, warn};

/// Random access to the raw text of a paginated document.
pub trait PageSource {
    fn page_count(&self) -> u32;

    /// Raw text of the 0-based physical page `index`.
    fn page_text(&self, index: u32) -> Result<String>;
}

/// Splits the document into books and returns the sanitized text of every
/// retained page in document order.
pub fn extract_book_pages<S: PageSource + ?Sized>(
    source: &S,
    layout: &BookLayout,
) -> Result<Vec<PageRecord>> {
    let total_pages = source.page_count();
    let plan = layout.plan(total_pages)?;

    let mut records = Vec::with_capacity(plan.len());
    let mut per_book = vec![0usize; layout.book_count()];

    for entry in plan {
        let raw = source.page_text(entry.index)?;
        let text = sanitize(&raw);
        if text.trim().is_empty() {
            warn!(
                "Book {} page {} (PDF page {}) has no extractable text",
                entry.book,
                entry.page,
                entry.index + 1
            );
        }
        debug!(
            "Book {} page {} <- PDF page {} ({} chars)",
            entry.book,
            entry.page,
            entry.index + 1,
            text.len()
        );

        per_book[(entry.book - 1) as usize] += 1;
        records.push(PageRecord::new(entry.book, entry.page, text));
    }

    for (book, count) in per_book.iter().enumerate() {
        info!("Book {}: {} pages retained", book + 1, count);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexerError;
    use std::cell::RefCell;

    struct FakeDocument {
        pages: Vec<String>,
        requested: RefCell<Vec<u32>>,
    }

    impl FakeDocument {
        fn new(count: u32) -> Self {
            Self {
                pages: (0..count).map(|i| format!("physical{}", i + 1)).collect(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageSource for FakeDocument {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_text(&self, index: u32) -> Result<String> {
            self.requested.borrow_mut().push(index);
            Ok(self.pages[index as usize].clone())
        }
    }

    #[test]
    fn test_records_tagged_with_book_and_page() {
        let doc = FakeDocument::new(12);
        let layout = BookLayout::new(vec![1, 10], vec![0, 0], vec![0, 0]);
        let records = extract_book_pages(&doc, &layout).unwrap();

        assert_eq!(records.len(), 12);
        assert_eq!(records[1], PageRecord::new(1, 2, "physical2".to_string()));
        assert_eq!(records[9], PageRecord::new(2, 1, "physical10".to_string()));
    }

    #[test]
    fn test_skipped_pages_never_read() {
        let doc = FakeDocument::new(10);
        let layout = BookLayout::new(vec![1, 6], vec![1, 2], vec![1, 0]);
        let records = extract_book_pages(&doc, &layout).unwrap();

        assert_eq!(*doc.requested.borrow(), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(records[0].page, 1);
        assert_eq!(records[3], PageRecord::new(2, 1, "physical8".to_string()));
    }

    #[test]
    fn test_text_is_sanitized() {
        let mut doc = FakeDocument::new(1);
        doc.pages[0] = "Kerberos\u{2122} ticket\u{0}".to_string();
        let layout = BookLayout::new(vec![1], vec![0], vec![0]);
        let records = extract_book_pages(&doc, &layout).unwrap();
        assert_eq!(records[0].text, "Kerberos ticket");
    }

    #[test]
    fn test_invalid_layout_reads_nothing() {
        let doc = FakeDocument::new(5);
        let layout = BookLayout::new(vec![1, 3], vec![0], vec![0, 0]);
        let result = extract_book_pages(&doc, &layout);

        assert!(matches!(result, Err(IndexerError::Validation(_))));
        assert!(doc.requested.borrow().is_empty());
    }
}
