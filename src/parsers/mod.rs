mod pages;
mod pdf;

pub use self::pages::{extract_book_pages, PageSource};
pub use self::pdf::PdfParser;
