//! WordPiece command implementation.

use clap::Parser;

use super::input::InputArgs;

/// WordPiece command arguments.
#[derive(Parser)]
pub struct WordPieceCommand {
    /// JSON vocabulary file (the built-in vocabulary if not specified)
    #[arg(long)]
    pub vocab: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Lowercase words before segmenting
    #[arg(short, long, default_value_t = false)]
    pub lowercase: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::output::print_corpus;
use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::{presets, Tokenizer, VocabLoader};

pub fn run(cmd: WordPieceCommand) -> AnyhowResult<()> {
    let segmenter = match &cmd.vocab {
        Some(path) => VocabLoader::load_wordpiece(Path::new(path))?,
        None => presets::wordpiece_segmenter(),
    };
    log::debug!("WordPiece vocabulary: {} pieces", segmenter.vocab().len());

    let tokenizer = Tokenizer::builder()
        .model(segmenter)
        .lowercase(cmd.lowercase)
        .build()?;

    let words = cmd.input.words()?;
    let corpus = tokenizer.tokenize_words(&words);

    print_corpus(&words, &corpus, cmd.json)
}
