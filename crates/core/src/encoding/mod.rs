//! Segmentation strategies.
//!
//! Each strategy turns one word into an ordered sequence of tokens:
//! - BPE: apply ranked merge rules to a character split
//! - WordPiece: greedy longest match against a membership vocabulary
//! - Unigram: per-position choice guided by token log-probabilities

pub mod bpe;
pub mod unigram;
pub mod wordpiece;

pub use bpe::BpeEncoder;
pub use unigram::{ProbabilisticSegmenter, UnigramStrategy};
pub use wordpiece::LongestMatchSegmenter;

use crate::core::{Corpus, Word};
use rayon::prelude::*;

/// A per-word segmentation strategy.
///
/// Words are independent of each other, so a corpus can be processed in
/// parallel without changing the result.
pub trait Segmenter: Send + Sync {
    /// Segment one word.
    fn segment(&self, word: &str) -> Word;

    /// Segment every word of a corpus, in order.
    fn segment_corpus<S: AsRef<str>>(&self, words: &[S]) -> Corpus
    where
        Self: Sized,
    {
        words.iter().map(|w| self.segment(w.as_ref())).collect()
    }

    /// Segment every word of a corpus on the rayon pool, in order.
    fn segment_corpus_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> Corpus
    where
        Self: Sized,
    {
        words.par_iter().map(|w| self.segment(w.as_ref())).collect()
    }
}
