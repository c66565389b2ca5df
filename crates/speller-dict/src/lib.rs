//! Hash-table word dictionary with case-insensitive membership lookup.
//!
//! The dictionary owns a fixed-size table of bucket chains and moves
//! through an explicit lifecycle: an unloaded instance is populated by a
//! bulk [`load`](dictionary::Dictionary::load_from_reader) from a word
//! list, answers [`check`](dictionary::Dictionary::check) and
//! [`size`](dictionary::Dictionary::size) queries while loaded, and
//! returns to the unloaded state via
//! [`unload`](dictionary::Dictionary::unload).
//!
//! - [`hash`] -- Bucket selection from a word's leading letters
//! - [`dictionary`] -- The bucket table and the `Dictionary` lifecycle type
//!
//! Tokenizing free text into words is the caller's job; the dictionary
//! only answers per-word membership questions.

pub mod dictionary;
pub mod hash;

pub use dictionary::{Dictionary, LoadError};
pub use hash::{BUCKET_COUNT, bucket_index};
