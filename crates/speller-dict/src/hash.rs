// Bucket selection: one bucket per ordered pair of leading letters.

use speller_core::character::letter_index;

/// Number of letters in the hashing alphabet.
const ALPHABET: usize = 26;

/// Number of buckets in the table: 26 squared, one per ordered pair of
/// leading letters, case-insensitive.
pub const BUCKET_COUNT: usize = ALPHABET * ALPHABET;

/// Map a word to its bucket index.
///
/// The index is a pure function of the word's first one or two
/// characters, case-normalized:
///
/// - two leading letters: `26 * first + second` (letter ordinals)
/// - a single letter (one-character words, or a non-letter in the second
///   position such as `o'clock`): the first letter's ordinal alone
///
/// The result is always within `[0, BUCKET_COUNT)`. Words that violate
/// the word-list format by not starting with a letter map to bucket 0;
/// the choice is arbitrary but consistent between insertion and lookup.
pub fn bucket_index(word: &str) -> usize {
    let mut chars = word.chars();
    let first = chars.next().and_then(letter_index).unwrap_or(0);
    match chars.next().and_then(letter_index) {
        Some(second) => ALPHABET * first + second,
        None => first,
    }
}
