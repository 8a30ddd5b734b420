//! Sentence segmentation for translation.
//!
//! Translation backends work best on bounded inputs, so the router feeds them
//! one sentence at a time. A sentence ends at a `.`, `!`, or `?` that is
//! followed by whitespace; the punctuation stays attached and the whitespace
//! run is consumed as the delimiter.

/// Split text into an ordered list of non-empty sentences.
///
/// Text with no terminal punctuation yields a single element containing the
/// whole trimmed input. Empty or whitespace-only text yields an empty vec.
pub fn split_sentences(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);

        if matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|next| next.is_whitespace())
        {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}
