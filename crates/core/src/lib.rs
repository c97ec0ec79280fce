//! Subtok-core - Core data model and segmenters for subword tokenization
//!
//! This crate provides the data structures shared by three subword
//! tokenization strategies, and the per-word segmenters themselves.
//!
//! # Features
//!
//! - Compact token storage using `CompactString`
//! - Membership (WordPiece) and ordered, scored (Unigram) vocabularies
//! - Greedy longest-match and probability-guided segmentation
//! - Replay of ranked BPE merge rules on unseen words
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{LongestMatchSegmenter, Segmenter, WordPieceVocab};
//!
//! let vocab = WordPieceVocab::from_pieces(["wid", "##est"])?;
//! let segmenter = LongestMatchSegmenter::new(vocab);
//! assert_eq!(segmenter.segment("widest"), vec!["wid", "##est"]);
//! # Ok::<(), subtok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Data model
pub mod core;
pub use self::core::vocab::{DEFAULT_CONTINUATION_PREFIX, DEFAULT_UNK_TOKEN};
pub use self::core::word::{join_tokens, merge_pair, split_chars, split_corpus, token_count};
pub use self::core::{
    Corpus, MergeMap, MergeRules, SpecialTokens, Token, TokenPair, UnigramEntry, UnigramVocab,
    Word, WordPieceVocab,
};

// Segmentation strategies
pub mod encoding;
pub use encoding::{
    BpeEncoder, LongestMatchSegmenter, ProbabilisticSegmenter, Segmenter, UnigramStrategy,
};
