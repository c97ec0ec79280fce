//! Apply command implementation.

use clap::Parser;

use super::input::InputArgs;

/// Apply command arguments.
#[derive(Parser)]
pub struct ApplyCommand {
    /// Path to a merges file written by `subtok bpe --save-merges`
    #[arg(short, long)]
    pub merges: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::output::print_corpus;
use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::{Tokenizer, VocabLoader};

pub fn run(cmd: ApplyCommand) -> AnyhowResult<()> {
    let encoder = VocabLoader::load_merges(Path::new(&cmd.merges))?;
    log::info!("Loaded {} merges from {}", encoder.rules().len(), cmd.merges);

    let tokenizer = Tokenizer::builder().model(encoder).build()?;
    let words = cmd.input.words()?;
    let corpus = tokenizer.tokenize_words(&words);

    print_corpus(&words, &corpus, cmd.json)
}
