//! Greedy longest-match (WordPiece) segmentation.
//!
//! At each cursor position the longest remaining substring found in the
//! vocabulary is taken. Pieces after the first are looked up with the
//! continuation marker prepended. When nothing matches, the unknown-token
//! sentinel is emitted and the rest of the word is dropped.

use super::Segmenter;
use crate::core::word::char_bounds;
use crate::core::{SpecialTokens, Token, Word, WordPieceVocab};

/// WordPiece segmenter over a static vocabulary.
#[derive(Debug, Clone)]
pub struct LongestMatchSegmenter {
    vocab: WordPieceVocab,
    special: SpecialTokens,
}

impl LongestMatchSegmenter {
    /// Create a segmenter with the default `##` marker and `[UNK]` sentinel.
    pub fn new(vocab: WordPieceVocab) -> Self {
        Self::with_special_tokens(vocab, SpecialTokens::default())
    }

    /// Create a segmenter with custom marker and sentinel.
    pub fn with_special_tokens(vocab: WordPieceVocab, special: SpecialTokens) -> Self {
        Self { vocab, special }
    }

    #[inline]
    pub fn vocab(&self) -> &WordPieceVocab {
        &self.vocab
    }

    #[inline]
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special
    }

    /// Segment a word, reporting whether it was fully covered.
    ///
    /// Returns `Ok(pieces)` on full coverage. On failure returns `Err` with
    /// the pieces accepted before the uncovered position (without the
    /// sentinel).
    pub fn segment_checked(&self, word: &str) -> Result<Word, Word> {
        let bounds = char_bounds(word);
        let n_chars = bounds.len() - 1;

        let mut pieces = Word::new();
        let mut candidate =
            String::with_capacity(self.special.continuation_prefix.len() + word.len());
        let mut start = 0;

        while start < n_chars {
            let mut matched = None;

            for end in (start + 1..=n_chars).rev() {
                candidate.clear();
                if start > 0 {
                    candidate.push_str(&self.special.continuation_prefix);
                }
                candidate.push_str(&word[bounds[start]..bounds[end]]);

                if self.vocab.contains(&candidate) {
                    matched = Some(end);
                    break;
                }
            }

            match matched {
                Some(end) => {
                    pieces.push(Token::new(&candidate));
                    start = end;
                }
                None => {
                    log::warn!(
                        "no vocabulary piece covers '{}' in '{}'; dropping suffix",
                        &word[bounds[start]..],
                        word
                    );
                    return Err(pieces);
                }
            }
        }

        Ok(pieces)
    }

    /// Join pieces back into text, stripping continuation markers.
    ///
    /// The unknown-token sentinel is kept verbatim.
    pub fn decode(&self, pieces: &[Token]) -> String {
        let mut out = String::new();
        for piece in pieces {
            if self.special.is_unk(piece) {
                out.push_str(piece);
            } else {
                out.push_str(self.special.strip_continuation(piece));
            }
        }
        out
    }
}

impl Segmenter for LongestMatchSegmenter {
    fn segment(&self, word: &str) -> Word {
        match self.segment_checked(word) {
            Ok(pieces) => pieces,
            Err(mut pieces) => {
                pieces.push(self.special.unk_token.clone());
                pieces
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_segmenter() -> LongestMatchSegmenter {
        let vocab =
            WordPieceVocab::from_pieces(["low", "##er", "new", "##est", "wid", "##i", "##d"])
                .unwrap();
        LongestMatchSegmenter::new(vocab)
    }

    #[test]
    fn test_widest() {
        let seg = demo_segmenter();
        assert_eq!(seg.segment("widest"), vec!["wid", "##est"]);
    }

    #[test]
    fn test_demo_corpus() {
        let seg = demo_segmenter();
        let corpus = seg.segment_corpus(&["low", "lower", "newest", "widest"]);
        assert_eq!(
            corpus,
            vec![
                vec!["low"],
                vec!["low", "##er"],
                vec!["new", "##est"],
                vec!["wid", "##est"],
            ]
        );
    }

    #[test]
    fn test_unknown_word() {
        let seg = demo_segmenter();
        assert_eq!(seg.segment("zzz"), vec!["[UNK]"]);
        assert_eq!(seg.segment_checked("zzz"), Err(Word::new()));
    }

    #[test]
    fn test_unknown_suffix_is_dropped() {
        let seg = demo_segmenter();
        // "low" matches, then nothing covers "##x".
        assert_eq!(seg.segment("lowxer"), vec!["low", "[UNK]"]);
        assert_eq!(seg.segment_checked("lowxer"), Err(vec![Token::new("low")]));
    }

    #[test]
    fn test_empty_word() {
        let seg = demo_segmenter();
        assert!(seg.segment("").is_empty());
        assert_eq!(seg.segment_checked(""), Ok(Word::new()));
    }

    #[test]
    fn test_initial_piece_is_unmarked() {
        // "##low" alone must not match at the word start.
        let vocab = WordPieceVocab::from_pieces(["##low"]).unwrap();
        let seg = LongestMatchSegmenter::new(vocab);
        assert_eq!(seg.segment("low"), vec!["[UNK]"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let vocab =
            WordPieceVocab::from_pieces(["w", "wi", "wid", "##est", "##e", "##st"]).unwrap();
        let seg = LongestMatchSegmenter::new(vocab);
        assert_eq!(seg.segment("widest"), vec!["wid", "##est"]);
    }

    #[test]
    fn test_round_trip_on_full_coverage() {
        let seg = demo_segmenter();
        for word in ["low", "lower", "newest", "widest", "widid"] {
            let pieces = seg.segment_checked(word).unwrap();
            assert_eq!(seg.decode(&pieces), word);
        }
    }

    #[test]
    fn test_idempotent() {
        let seg = demo_segmenter();
        for word in ["lower", "newest", "widest"] {
            let first = seg.segment(word);
            let again = seg.segment(&seg.decode(&first));
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_multibyte_characters() {
        let vocab = WordPieceVocab::from_pieces(["caf", "##é"]).unwrap();
        let seg = LongestMatchSegmenter::new(vocab);
        assert_eq!(seg.segment("café"), vec!["caf", "##é"]);
    }

    #[test]
    fn test_custom_special_tokens() {
        let vocab = WordPieceVocab::from_pieces(["new", "@@est"]).unwrap();
        let special = SpecialTokens {
            unk_token: Token::new("<unk>"),
            continuation_prefix: Token::new("@@"),
        };
        let seg = LongestMatchSegmenter::with_special_tokens(vocab, special);
        assert_eq!(seg.segment("newest"), vec!["new", "@@est"]);
        assert_eq!(seg.segment("zz"), vec!["<unk>"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seg = demo_segmenter();
        let words = ["low", "lower", "newest", "widest", "zzz"];
        assert_eq!(seg.segment_corpus(&words), seg.segment_corpus_parallel(&words));
    }
}
