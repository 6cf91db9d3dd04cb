/// Cleans raw page text before tokenisation.
///
/// Anything that is not printable ASCII or whitespace is dropped, which also
/// removes the U+FFFD markers left behind by lossy UTF-8 decoding.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| keep_char(c)).collect()
}

/// Same as [`sanitize`] for byte input that may not be valid UTF-8.
pub fn sanitize_bytes(bytes: &[u8]) -> String {
    sanitize(&String::from_utf8_lossy(bytes))
}

fn keep_char(c: char) -> bool {
    c.is_ascii_graphic() || c.is_whitespace()
}
