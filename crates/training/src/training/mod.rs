//! BPE merge learning.
//!
//! This module provides per-round pair counting and the merge engine that
//! drives the rounds.

pub mod counter;
pub mod engine;

pub use counter::{MergeCandidate, PairCounter};
pub use engine::{MergeConfig, MergeEngine, MergeOutcome, MergeStep};
