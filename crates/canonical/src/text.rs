use unicode_normalization::UnicodeNormalization;

/// Range of the "Combining Diacritical Marks" block.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Main normalization entry point for catalog text.
///
/// Lowercases, applies canonical decomposition (NFD), drops combining
/// diacritical marks and trims the result. Empty input yields an empty string.
///
/// ```rust
/// use canonical::normalize_text;
///
/// assert_eq!(normalize_text("  Pantalón "), "pantalon");
/// assert_eq!(normalize_text("CAFÉ"), normalize_text("cafe\u{0301}"));
/// ```
pub fn normalize_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    // Lowercasing can expand a single character into multiple (e.g. 'İ' -> "i̇"),
    // so decomposition has to run on the lowercased text.
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    out.extend(lowered.nfd().filter(|ch| !is_diacritic(*ch)));

    // Trimming last keeps the function idempotent when whitespace is followed
    // by a stripped mark.
    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}

#[inline]
fn is_diacritic(ch: char) -> bool {
    COMBINING_DIACRITICS.contains(&ch)
}
