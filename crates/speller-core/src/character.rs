// Character classification for the word-list alphabet.

/// Returns `true` if `c` may start a dictionary word.
///
/// Only ASCII letters can appear in the first position; the bucket hash
/// is derived from the leading letters, so the format requires them.
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` may appear anywhere after the first position.
///
/// The word-list alphabet is ASCII letters plus the apostrophe, which
/// covers contractions and possessives such as `o'clock` or `cat's`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Case-insensitive ordinal of an ASCII letter, in `[0, 26)`.
///
/// Returns `None` for any character outside `A..=Z` / `a..=z`.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
