//! Built-in demonstration data.
//!
//! A small corpus and hand-prepared vocabularies covering it. They stand in
//! for the output of a vocabulary-preparation step and are passed to the
//! segmenters like any other vocabulary.

use subtok_core::{LongestMatchSegmenter, ProbabilisticSegmenter, UnigramVocab, WordPieceVocab};

/// Demonstration corpus.
pub const DEMO_CORPUS: [&str; 4] = ["low", "lower", "newest", "widest"];

/// Default number of BPE merge rounds.
pub const DEFAULT_MERGES: usize = 10;

/// WordPiece pieces for the demo corpus, continuation entries marked.
pub const WORDPIECE_PIECES: [&str; 7] = ["low", "##er", "new", "##est", "wid", "##i", "##d"];

/// Unigram entries for the demo corpus, in scan order.
pub const UNIGRAM_ENTRIES: [(&str, f64); 8] = [
    ("low", -1.0),
    ("er", -2.0),
    ("new", -1.5),
    ("est", -1.5),
    ("wid", -1.8),
    ("e", -2.5),
    ("t", -2.5),
    ("i", -2.5),
];

/// The demo WordPiece vocabulary.
pub fn wordpiece_vocab() -> WordPieceVocab {
    let mut vocab = WordPieceVocab::with_capacity(WORDPIECE_PIECES.len());
    for piece in WORDPIECE_PIECES {
        vocab
            .insert(piece)
            .expect("built-in WordPiece pieces are non-empty");
    }
    vocab
}

/// The demo Unigram vocabulary.
pub fn unigram_vocab() -> UnigramVocab {
    UnigramVocab::from_entries(UNIGRAM_ENTRIES)
        .expect("built-in Unigram entries are non-empty with finite log-probabilities")
}

/// A WordPiece segmenter over the demo vocabulary.
pub fn wordpiece_segmenter() -> LongestMatchSegmenter {
    LongestMatchSegmenter::new(wordpiece_vocab())
}

/// A greedy Unigram segmenter over the demo vocabulary.
pub fn unigram_segmenter() -> ProbabilisticSegmenter {
    ProbabilisticSegmenter::new(unigram_vocab())
}
