//! Pre-tokenization pipeline.
//!
//! Raw text is normalized and then split into the words that the
//! segmenters and the merge engine consume.

pub mod normalize;
pub mod split;

pub use normalize::{NormalizationForm, Normalizer};
pub use split::{SplitPattern, Splitter};
