// Word-list format contract: length bound and alphabet validation.

use crate::character::{is_word_char, is_word_start};

/// Maximum number of characters in a dictionary word.
///
/// The word-list format bounds every token at 45 characters, long enough
/// for the longest word in a standard English list
/// (pneumonoultramicroscopicsilicovolcanoconiosis).
pub const MAX_WORD_LEN: usize = 45;

/// Error type for tokens that violate the word-list format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("empty word")]
    Empty,
    #[error("word is {0} characters, limit is {MAX_WORD_LEN}")]
    TooLong(usize),
    #[error("word must start with a letter, found {0:?}")]
    InvalidStart(char),
    #[error("invalid character {0:?} in word")]
    InvalidChar(char),
}

/// Validate a token against the word-list format.
///
/// A well-formed word is non-empty, starts with an ASCII letter, contains
/// only letters and apostrophes, and is at most [`MAX_WORD_LEN`]
/// characters long. The dictionary applies this to every token it loads,
/// so malformed sources are rejected instead of hashing to nonsense.
pub fn validate_word(word: &str) -> Result<(), WordError> {
    let mut chars = word.chars();
    let first = chars.next().ok_or(WordError::Empty)?;
    if !is_word_start(first) {
        return Err(WordError::InvalidStart(first));
    }
    // The alphabet is ASCII, so the byte length is the character count.
    if word.len() > MAX_WORD_LEN {
        return Err(WordError::TooLong(word.len()));
    }
    for c in chars {
        if !is_word_char(c) {
            return Err(WordError::InvalidChar(c));
        }
    }
    Ok(())
}
