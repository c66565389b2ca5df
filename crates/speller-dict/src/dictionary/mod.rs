// Word dictionary: bulk load, case-insensitive lookup, explicit lifecycle.

mod table;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use speller_core::word::{WordError, validate_word};

use table::BucketTable;

/// Error type for dictionary load failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The word-list source could not be opened or read.
    #[error("failed to read word list: {0}")]
    Source(#[from] std::io::Error),

    /// A token in the source violates the word-list format.
    #[error("invalid word {word:?} in word list: {reason}")]
    InvalidWord { word: String, reason: WordError },
}

/// A spell-checking dictionary backed by a fixed-size bucket table.
///
/// The dictionary moves through three phases:
///
/// 1. *Unloaded* (initial): empty table, `size()` is 0, every `check`
///    reports absent.
/// 2. *Loaded*: a completed [`load_from_reader`](Self::load_from_reader)
///    has populated the table; `size()` reports the number of words read.
/// 3. *Unloaded* again: [`unload`](Self::unload) releases every entry and
///    restores the initial phase, so a later load starts from a clean
///    table.
///
/// `load`/`unload` take `&mut self` and the queries take `&self`, so the
/// borrow checker enforces the intended discipline: shared readers only
/// while no load or unload is in progress.
pub struct Dictionary {
    table: BucketTable,
    word_count: usize,
    loaded: bool,
}

impl Dictionary {
    /// Create an empty, unloaded dictionary.
    pub fn new() -> Self {
        Self {
            table: BucketTable::new(),
            word_count: 0,
            loaded: false,
        }
    }

    /// Load a word list from the file at `path`.
    ///
    /// An unopenable file surfaces as [`LoadError::Source`]; otherwise
    /// this behaves like [`load_from_reader`](Self::load_from_reader).
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Populate the dictionary from a stream of whitespace-separated
    /// words.
    ///
    /// Any previous contents are discarded first. Every token is
    /// validated against the word-list format, inserted into its bucket
    /// chain with its case preserved, and counted; duplicate tokens are
    /// inserted and counted individually. A source with no tokens loads
    /// successfully with a size of 0.
    ///
    /// On error the words read so far stay in the table (observable via
    /// [`check`](Self::check)) but the dictionary does not enter the
    /// loaded phase, so [`size`](Self::size) keeps reporting 0 until a
    /// later load completes.
    pub fn load_from_reader(&mut self, reader: impl BufRead) -> Result<(), LoadError> {
        self.table.clear();
        self.word_count = 0;
        self.loaded = false;

        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                validate_word(token).map_err(|reason| LoadError::InvalidWord {
                    word: token.to_string(),
                    reason,
                })?;
                self.table.insert(token.into());
                self.word_count += 1;
            }
        }

        self.loaded = true;
        Ok(())
    }

    /// Case-insensitive membership test.
    ///
    /// Scans the chain of the word's bucket and short-circuits on the
    /// first match. No side effects; callable in any phase (before a
    /// completed load the table is empty, so everything reports absent).
    pub fn check(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// Number of words inserted by the last completed load, or 0 if no
    /// load has completed.
    ///
    /// A completed load of an empty source also reports 0; the two cases
    /// are indistinguishable to the caller.
    pub fn size(&self) -> usize {
        if self.loaded { self.word_count } else { 0 }
    }

    /// Whether a load has completed and not yet been unloaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Release every entry and return to the unloaded phase.
    ///
    /// Returns `false` if no load had completed; otherwise clears the
    /// table, resets the word counter and the loaded flag, and returns
    /// `true`.
    pub fn unload(&mut self) -> bool {
        if !self.loaded {
            return false;
        }
        self.table.clear();
        self.word_count = 0;
        self.loaded = false;
        true
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
