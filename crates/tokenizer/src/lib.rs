//! Subtok-tokenizer - High-level subword tokenizer API
//!
//! This crate ties the pieces together: raw text is normalized, split into
//! words, and each word is segmented by a BPE, WordPiece or Unigram model.
//!
//! # Features
//!
//! - Simple builder pattern for tokenizer configuration
//! - Pre-tokenization pipeline (Unicode normalization, lowercasing, splitting)
//! - BPE merge learning straight from text
//! - Loading and saving vocabularies and merge rules as JSON
//! - Built-in demonstration corpus and vocabularies
//!
//! # Example
//!
//! ```rust
//! use subtok_tokenizer::{presets, Tokenizer};
//!
//! let tokenizer = Tokenizer::builder()
//!     .model(presets::wordpiece_segmenter())
//!     .build()?;
//!
//! let corpus = tokenizer.tokenize("newest widest");
//! assert_eq!(corpus[1], vec!["wid", "##est"]);
//! # Ok::<(), subtok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subtok_core::{
    BpeEncoder, Corpus, LongestMatchSegmenter, ProbabilisticSegmenter, Result, Segmenter,
    SpecialTokens, Token, TokenizerError, UnigramStrategy, UnigramVocab, Word, WordPieceVocab,
};
pub use subtok_training::{MergeConfig, MergeEngine, MergeOutcome, MergeStep};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Model, Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{VocabLoader, VocabSaver};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{NormalizationForm, Normalizer, SplitPattern, Splitter};

// Demonstration data
pub mod presets;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
