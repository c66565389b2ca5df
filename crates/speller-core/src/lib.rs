//! Shared word-list format primitives for the speller dictionary.
//!
//! This crate defines the alphabet and format contract of the word-list
//! files the dictionary loads:
//!
//! - [`character`] -- Classification of the characters a word may contain
//! - [`word`] -- The word-format contract (length bound, validation)

pub mod character;
pub mod word;

pub use word::{MAX_WORD_LEN, WordError, validate_word};
