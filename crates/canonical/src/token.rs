/// Splits normalized text on Unicode whitespace, discarding empty tokens.
///
/// Tokens borrow from `text`; callers that need owned values can map them.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Whitespace tokens that are at least `min_chars` Unicode scalar values long.
pub fn tokens_at_least(text: &str, min_chars: usize) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(move |token| token.chars().count() >= min_chars)
}
