//! Subtok-training - BPE merge learning
//!
//! This crate learns byte-pair-encoding merges from a corpus by repeatedly
//! merging the most frequent adjacent token pair.
//!
//! # Features
//!
//! - Per-round pair counting with optional parallel processing
//! - Deterministic pair selection (count, then lexicographic order)
//! - Early termination once no pairs remain
//!
//! # Example
//!
//! ```rust
//! use subtok_training::MergeEngine;
//!
//! let outcome = MergeEngine::with_merges(1).run(&["newest", "widest"]);
//! assert_eq!(outcome.corpus[0], vec!["n", "e", "w", "es", "t"]);
//! ```

pub use subtok_core::{Result, TokenizerError};

pub mod training;
pub use training::{
    MergeCandidate, MergeConfig, MergeEngine, MergeOutcome, MergeStep, PairCounter,
};
