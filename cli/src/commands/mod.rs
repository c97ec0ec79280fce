//! CLI commands for the subtok tokenizers.

pub mod apply;
pub mod bpe;
pub mod demo;
pub mod input;
pub mod output;
pub mod unigram;
pub mod wordpiece;

pub use apply::ApplyCommand;
pub use bpe::BpeCommand;
pub use demo::DemoCommand;
pub use unigram::UnigramCommand;
pub use wordpiece::WordPieceCommand;
