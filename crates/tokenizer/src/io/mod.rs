//! Vocabulary and merge-rule files.
//!
//! Vocabularies are prepared outside this crate and handed in as JSON files;
//! learned merge rules can be written out and read back the same way.

pub mod format;
pub mod load;
pub mod save;

pub use format::{MergesFile, UnigramVocabFile, WordPieceVocabFile};
pub use load::VocabLoader;
pub use save::VocabSaver;
