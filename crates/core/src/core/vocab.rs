//! Vocabulary storage and lookup.
//!
//! Vocabularies are built elsewhere and handed to the segmenters as data.
//! WordPiece needs only set membership; Unigram keeps its entries in the order
//! supplied because that order decides which duplicate wins during a greedy
//! scan.

use crate::core::word::Token;
use crate::error::{Result, TokenizerError};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Default unknown-token sentinel.
pub const DEFAULT_UNK_TOKEN: &str = "[UNK]";

/// Default continuation marker prepended to non-initial WordPiece pieces.
pub const DEFAULT_CONTINUATION_PREFIX: &str = "##";

/// Special strings used while segmenting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Sentinel emitted when no vocabulary entry covers the cursor
    pub unk_token: Token,
    /// Marker prepended to pieces that continue a word
    pub continuation_prefix: Token,
}

impl SpecialTokens {
    /// Check whether a token is the unknown-token sentinel.
    #[inline]
    pub fn is_unk(&self, token: &str) -> bool {
        self.unk_token == token
    }

    /// Strip the continuation marker from a piece, if present.
    #[inline]
    pub fn strip_continuation<'a>(&self, piece: &'a str) -> &'a str {
        piece
            .strip_prefix(self.continuation_prefix.as_str())
            .unwrap_or(piece)
    }
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk_token: Token::new(DEFAULT_UNK_TOKEN),
            continuation_prefix: Token::new(DEFAULT_CONTINUATION_PREFIX),
        }
    }
}

/// Membership-only vocabulary for longest-match segmentation.
///
/// Continuation entries are stored already marked (e.g. `##est`).
#[derive(Debug, Clone, Default)]
pub struct WordPieceVocab {
    pieces: AHashSet<Token>,
}

impl WordPieceVocab {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pieces: AHashSet::with_capacity(capacity),
        }
    }

    /// Build a vocabulary from pieces, rejecting empty strings.
    pub fn from_pieces<I, S>(pieces: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for piece in pieces {
            vocab.insert(piece.as_ref())?;
        }
        Ok(vocab)
    }

    /// Add a piece. Returns `false` if it was already present.
    pub fn insert(&mut self, piece: &str) -> Result<bool> {
        if piece.is_empty() {
            return Err(TokenizerError::EmptyToken);
        }
        Ok(self.pieces.insert(Token::new(piece)))
    }

    #[inline]
    pub fn contains(&self, piece: &str) -> bool {
        self.pieces.contains(piece)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// All pieces in sorted order.
    pub fn sorted_pieces(&self) -> Vec<&str> {
        let mut pieces: Vec<&str> = self.pieces.iter().map(Token::as_str).collect();
        pieces.sort_unstable();
        pieces
    }
}

/// One scored Unigram vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnigramEntry {
    pub token: Token,
    pub log_prob: f64,
}

/// Ordered, scored vocabulary for probabilistic segmentation.
///
/// Duplicate tokens are allowed. Positions of each token's entries are
/// indexed so that a scan over "entries equal to this substring, in order"
/// does not walk the whole list.
#[derive(Debug, Clone, Default)]
pub struct UnigramVocab {
    entries: Vec<UnigramEntry>,
    /// token -> indices into `entries`, ascending
    positions: AHashMap<Token, Vec<usize>>,
    /// Longest token in characters
    max_token_chars: usize,
}

impl UnigramVocab {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from `(token, log_prob)` pairs, preserving order.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for (token, log_prob) in entries {
            vocab.push(token.as_ref(), log_prob)?;
        }
        Ok(vocab)
    }

    /// Append an entry at the end of the scan order.
    pub fn push(&mut self, token: &str, log_prob: f64) -> Result<()> {
        if token.is_empty() {
            return Err(TokenizerError::EmptyToken);
        }
        if !log_prob.is_finite() {
            return Err(TokenizerError::InvalidLogProb {
                token: token.to_string(),
                log_prob,
            });
        }

        let token = Token::new(token);
        self.max_token_chars = self.max_token_chars.max(token.chars().count());
        self.positions
            .entry(token.clone())
            .or_default()
            .push(self.entries.len());
        self.entries.push(UnigramEntry { token, log_prob });
        Ok(())
    }

    /// Entries matching `token`, in vocabulary order.
    pub fn matching(&self, token: &str) -> impl Iterator<Item = &UnigramEntry> + '_ {
        self.positions
            .get(token)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.entries[idx])
    }

    /// Highest log-probability among the entries for `token`.
    pub fn best_log_prob(&self, token: &str) -> Option<f64> {
        self.matching(token).map(|e| e.log_prob).reduce(f64::max)
    }

    #[inline]
    pub fn entries(&self) -> &[UnigramEntry] {
        &self.entries
    }

    #[inline]
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordpiece_membership() {
        let vocab = WordPieceVocab::from_pieces(["low", "##er"]).unwrap();
        assert!(vocab.contains("low"));
        assert!(vocab.contains("##er"));
        assert!(!vocab.contains("er"));
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.sorted_pieces(), vec!["##er", "low"]);
    }

    #[test]
    fn test_wordpiece_rejects_empty() {
        let mut vocab = WordPieceVocab::new();
        assert!(matches!(vocab.insert(""), Err(TokenizerError::EmptyToken)));
        assert!(vocab.insert("a").unwrap());
        assert!(!vocab.insert("a").unwrap());
    }

    #[test]
    fn test_unigram_preserves_order_and_duplicates() {
        let vocab = UnigramVocab::from_entries([("ab", -3.0), ("a", -1.0), ("ab", -2.0)]).unwrap();
        assert_eq!(vocab.len(), 3);

        let probs: Vec<f64> = vocab.matching("ab").map(|e| e.log_prob).collect();
        assert_eq!(probs, vec![-3.0, -2.0]);
        assert_eq!(vocab.best_log_prob("ab"), Some(-2.0));
        assert_eq!(vocab.best_log_prob("zz"), None);
        assert_eq!(vocab.max_token_chars(), 2);
    }

    #[test]
    fn test_unigram_rejects_non_finite() {
        let err = UnigramVocab::from_entries([("a", f64::NAN)]).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidLogProb { .. }));

        let err = UnigramVocab::from_entries([("a", f64::NEG_INFINITY)]).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidLogProb { .. }));
    }

    #[test]
    fn test_special_tokens() {
        let special = SpecialTokens::default();
        assert!(special.is_unk("[UNK]"));
        assert!(!special.is_unk("low"));
        assert_eq!(special.strip_continuation("##est"), "est");
        assert_eq!(special.strip_continuation("wid"), "wid");
    }
}
