//! Pair counting for BPE merge rounds.
//!
//! A [`PairCounter`] is built from scratch for every round and dropped once
//! the round's pair has been selected. Counting can run per word on the rayon
//! pool; the reduction into one table is the round's barrier.

use ahash::AHashMap;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;
use subtok_core::{TokenPair, Word};

/// A merge candidate with its corpus-wide count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The adjacent pair
    pub pair: TokenPair,
    /// The number of occurrences across the corpus
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: TokenPair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Higher count is greater; on equal counts the lexicographically smaller pair
// is greater, so the maximum is the pair a merge round selects.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Corpus-wide adjacent pair frequencies for one merge round.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    pair_counts: AHashMap<TokenPair, u64>,
}

impl PairCounter {
    /// Count all pairs sequentially.
    pub fn count_sequential(corpus: &[Word]) -> Self {
        let mut pair_counts: AHashMap<TokenPair, u64> = AHashMap::new();

        for word in corpus {
            for window in word.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *pair_counts.entry(pair).or_insert(0) += 1;
            }
        }

        Self { pair_counts }
    }

    /// Count all pairs in parallel, one word per task.
    pub fn count_parallel(corpus: &[Word]) -> Self {
        use rayon::prelude::*;

        let pair_counts = corpus
            .par_iter()
            .map(|word| {
                let mut pair_counts: AHashMap<TokenPair, u64> = AHashMap::new();

                for window in word.windows(2) {
                    let pair = (window[0].clone(), window[1].clone());
                    *pair_counts.entry(pair).or_insert(0) += 1;
                }

                pair_counts
            })
            .reduce(AHashMap::new, |mut acc, pair_counts| {
                for (pair, count) in pair_counts {
                    *acc.entry(pair).or_insert(0) += count;
                }
                acc
            });

        Self { pair_counts }
    }

    /// Get the count for a pair (zero if it never occurs).
    pub fn get(&self, pair: &TokenPair) -> u64 {
        self.pair_counts.get(pair).copied().unwrap_or(0)
    }

    /// The pair a merge round selects: highest count, then lexicographically
    /// smallest. `None` when no pairs occur.
    pub fn best(&self) -> Option<MergeCandidate> {
        self.pair_counts
            .iter()
            .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count))
            .max()
    }

    /// The `k` highest candidates, in selection order.
    pub fn top_k(&self, k: usize) -> Vec<MergeCandidate> {
        let mut heap: OctonaryHeap<MergeCandidate> = self
            .pair_counts
            .iter()
            .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count))
            .collect();

        let mut top = Vec::with_capacity(k.min(heap.len()));
        while top.len() < k {
            match heap.pop() {
                Some(candidate) => top.push(candidate),
                None => break,
            }
        }
        top
    }

    /// Get the number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pair_counts.len()
    }

    /// Check whether no pairs occur.
    pub fn is_empty(&self) -> bool {
        self.pair_counts.is_empty()
    }

    /// Sum of all pair occurrences.
    pub fn total(&self) -> u64 {
        self.pair_counts.values().sum()
    }
}
