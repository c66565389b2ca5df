// Fixed-size bucket table with per-bucket chains.

use crate::hash::{BUCKET_COUNT, bucket_index};

/// A fixed array of [`BUCKET_COUNT`] chains of case-preserved words.
///
/// Invariant: every inserted word lives in exactly the chain that
/// [`bucket_index`] names for it. Chains are scanned newest entry first;
/// beyond that the order carries no meaning.
pub(crate) struct BucketTable {
    buckets: Vec<Vec<Box<str>>>,
}

impl BucketTable {
    pub(crate) fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    /// Insert a word into its chain, preserving its case as given.
    /// Duplicates are stored again, not collapsed.
    pub(crate) fn insert(&mut self, word: Box<str>) {
        self.buckets[bucket_index(&word)].push(word);
    }

    /// Case-insensitive membership scan of the word's chain, newest
    /// entries first, short-circuiting on the first match.
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.buckets[bucket_index(word)]
            .iter()
            .rev()
            .any(|entry| entry.eq_ignore_ascii_case(word))
    }

    /// Drop every entry in every chain, leaving all buckets empty.
    pub(crate) fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    #[cfg(test)]
    pub(crate) fn chain_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    #[cfg(test)]
    pub(crate) fn entry_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
