mod sanitize;
mod tokenizer;

pub use sanitize::{sanitize, sanitize_bytes};
pub use tokenizer::{is_eligible, normalize_token, tokenize_page, StripPolicy, TokenFilter};
