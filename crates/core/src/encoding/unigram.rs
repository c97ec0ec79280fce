//! Probability-guided (Unigram-style) segmentation.
//!
//! Two strategies are available:
//!
//! - [`UnigramStrategy::Greedy`] (default): a local, per-position choice. At
//!   each cursor, candidate substrings are tried longest first; for each one
//!   the vocabulary is scanned in order and the first entry that beats the
//!   best log-probability seen at this cursor is recorded, ending the scan for
//!   that length. The recorded best is emitted after all lengths are tried.
//!   The result depends on vocabulary order and is not a whole-word optimum.
//! - [`UnigramStrategy::Viterbi`]: the maximum-likelihood segmentation,
//!   maximizing the summed log-probability over a position-indexed table with
//!   backpointers.
//!
//! Both emit the unknown-token sentinel when a position cannot be covered and
//! stop there.

use super::Segmenter;
use crate::core::word::char_bounds;
use crate::core::{SpecialTokens, Token, UnigramVocab, Word};

/// Segmentation search used by [`ProbabilisticSegmenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnigramStrategy {
    /// Per-position greedy choice, sensitive to vocabulary order
    #[default]
    Greedy,
    /// Whole-word maximum-likelihood search
    Viterbi,
}

/// Unigram-style segmenter over an ordered, scored vocabulary.
#[derive(Debug, Clone)]
pub struct ProbabilisticSegmenter {
    vocab: UnigramVocab,
    unk_token: Token,
    strategy: UnigramStrategy,
}

impl ProbabilisticSegmenter {
    /// Create a greedy segmenter with the default `[UNK]` sentinel.
    pub fn new(vocab: UnigramVocab) -> Self {
        Self {
            vocab,
            unk_token: SpecialTokens::default().unk_token,
            strategy: UnigramStrategy::default(),
        }
    }

    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: UnigramStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the unknown-token sentinel.
    pub fn with_unk_token(mut self, unk_token: impl Into<Token>) -> Self {
        self.unk_token = unk_token.into();
        self
    }

    #[inline]
    pub fn vocab(&self) -> &UnigramVocab {
        &self.vocab
    }

    #[inline]
    pub fn strategy(&self) -> UnigramStrategy {
        self.strategy
    }

    #[inline]
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Sum of the log-probabilities of a segmentation, using each token's
    /// best entry. Returns `None` if any token is not in the vocabulary.
    pub fn score(&self, tokens: &[Token]) -> Option<f64> {
        tokens
            .iter()
            .map(|t| self.vocab.best_log_prob(t))
            .sum::<Option<f64>>()
    }

    fn segment_greedy(&self, word: &str) -> Word {
        let bounds = char_bounds(word);
        let n_chars = bounds.len() - 1;
        let max_len = self.vocab.max_token_chars();

        let mut tokens = Word::new();
        let mut start = 0;

        while start < n_chars {
            // (log_prob, length in chars)
            let mut best: Option<(f64, usize)> = None;

            for end in (start + 1..=n_chars).rev() {
                if end - start > max_len {
                    continue;
                }
                let part = &word[bounds[start]..bounds[end]];
                let improvement = self
                    .vocab
                    .matching(part)
                    .find(|entry| best.map_or(true, |(p, _)| entry.log_prob > p));
                if let Some(entry) = improvement {
                    best = Some((entry.log_prob, end - start));
                }
            }

            match best {
                Some((_, len)) => {
                    tokens.push(Token::new(&word[bounds[start]..bounds[start + len]]));
                    start += len;
                }
                None => {
                    log::warn!(
                        "no vocabulary entry covers '{}' in '{}'; dropping suffix",
                        &word[bounds[start]..],
                        word
                    );
                    tokens.push(self.unk_token.clone());
                    break;
                }
            }
        }

        tokens
    }

    fn segment_viterbi(&self, word: &str) -> Word {
        let bounds = char_bounds(word);
        let n_chars = bounds.len() - 1;
        let max_len = self.vocab.max_token_chars();

        // best[i] = (score, start of last token) of the best path covering 0..i
        let mut best: Vec<Option<(f64, usize)>> = vec![None; n_chars + 1];
        best[0] = Some((0.0, 0));

        for end in 1..=n_chars {
            for start in end.saturating_sub(max_len)..end {
                let Some((prefix_score, _)) = best[start] else {
                    continue;
                };
                let Some(log_prob) = self.vocab.best_log_prob(&word[bounds[start]..bounds[end]])
                else {
                    continue;
                };
                let score = prefix_score + log_prob;
                if best[end].map_or(true, |(s, _)| score > s) {
                    best[end] = Some((score, start));
                }
            }
        }

        // Furthest covered position; the whole word when it is reachable.
        let reached = (0..=n_chars).rev().find(|&i| best[i].is_some()).unwrap_or(0);

        let mut tokens = Word::new();
        let mut pos = reached;
        while pos > 0 {
            let Some((_, start)) = best[pos] else { break };
            tokens.push(Token::new(&word[bounds[start]..bounds[pos]]));
            pos = start;
        }
        tokens.reverse();

        if reached < n_chars {
            log::warn!(
                "no vocabulary entry covers '{}' in '{}'; dropping suffix",
                &word[bounds[reached]..],
                word
            );
            tokens.push(self.unk_token.clone());
        }

        tokens
    }
}

impl Segmenter for ProbabilisticSegmenter {
    fn segment(&self, word: &str) -> Word {
        match self.strategy {
            UnigramStrategy::Greedy => self.segment_greedy(word),
            UnigramStrategy::Viterbi => self.segment_viterbi(word),
        }
    }
}
