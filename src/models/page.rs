/// Sanitized text of one retained page, tagged with its book and in-book number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub book: u32,
    pub page: u32,
    pub text: String,
}

impl PageRecord {
    pub fn new(book: u32, page: u32, text: String) -> Self {
        PageRecord { book, page, text }
    }
}
