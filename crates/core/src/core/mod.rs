//! Core data model shared by every tokenization strategy.
//!
//! This module contains the token/word representation, the vocabularies the
//! segmenters consume, and ranked BPE merge rules.

pub mod merges;
pub mod vocab;
pub mod word;

pub use merges::{MergeMap, MergeRules};
pub use vocab::{SpecialTokens, UnigramEntry, UnigramVocab, WordPieceVocab};
pub use word::{Corpus, Token, TokenPair, Word};
