use crate::error::{IndexerError, Result};

/// How a compiled PDF splits into books.
///
/// `starts` holds the 1-based physical start page of each book; the skip
/// counts drop unnumbered pages at the front and back of each book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    pub starts: Vec<u32>,
    pub skip_first: Vec<u32>,
    pub skip_last: Vec<u32>,
}

/// A physical page (0-based) that survives the skips, with its book and
/// 1-based in-book number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub index: u32,
    pub book: u32,
    pub page: u32,
}

impl BookLayout {
    pub fn new(starts: Vec<u32>, skip_first: Vec<u32>, skip_last: Vec<u32>) -> Self {
        Self {
            starts,
            skip_first,
            skip_last,
        }
    }

    pub fn book_count(&self) -> usize {
        self.starts.len()
    }

    /// Checks the parts of the layout that do not depend on the document.
    pub fn check_shape(&self) -> Result<()> {
        let count = self.starts.len();
        if count == 0 {
            return Err(IndexerError::Validation(
                "at least one book start is required".to_string(),
            ));
        }
        if self.skip_first.len() != count || self.skip_last.len() != count {
            return Err(IndexerError::Validation(format!(
                "--book-starts ({}), --skip-first ({}) and --skip-last ({}) must have the same length",
                count,
                self.skip_first.len(),
                self.skip_last.len()
            )));
        }
        if let Some(pair) = self.starts.windows(2).find(|w| w[0] >= w[1]) {
            return Err(IndexerError::Validation(format!(
                "book starts must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
        Ok(())
    }

    /// Checks the layout against a document of `total_pages` pages.
    pub fn validate(&self, total_pages: u32) -> Result<()> {
        self.check_shape()?;

        for book in 0..self.book_count() {
            let (start, end) = self.bounds(book, total_pages);
            if self.starts[book] == 0 || start >= total_pages || end > total_pages {
                return Err(IndexerError::OutOfBounds(format!(
                    "Book {}: start page {} or end page {} outside document of {} pages",
                    book + 1,
                    self.starts[book],
                    end,
                    total_pages
                )));
            }
        }
        Ok(())
    }

    /// Lists every retained page in document order.
    pub fn plan(&self, total_pages: u32) -> Result<Vec<PagePlan>> {
        self.validate(total_pages)?;

        let mut pages = Vec::new();
        for book in 0..self.book_count() {
            let (start, end) = self.bounds(book, total_pages);
            let first = start.saturating_add(self.skip_first[book]);
            let last = end.saturating_sub(self.skip_last[book]);

            for index in first..last {
                pages.push(PagePlan {
                    index,
                    book: book as u32 + 1,
                    page: index - first + 1,
                });
            }
        }
        Ok(pages)
    }

    /// 0-based half-open physical range of a book.
    fn bounds(&self, book: usize, total_pages: u32) -> (u32, u32) {
        let start = self.starts[book].saturating_sub(1);
        let end = self
            .starts
            .get(book + 1)
            .map(|next| next.saturating_sub(1))
            .unwrap_or(total_pages);
        (start, end)
    }
}
