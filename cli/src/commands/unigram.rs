//! Unigram command implementation.

use clap::{Parser, ValueEnum};

use super::input::InputArgs;

/// Search used to pick a segmentation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Scan vocabulary entries left to right
    Greedy,
    /// Maximize the total log-probability
    Viterbi,
}

impl From<Strategy> for UnigramStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Greedy => UnigramStrategy::Greedy,
            Strategy::Viterbi => UnigramStrategy::Viterbi,
        }
    }
}

/// Unigram command arguments.
#[derive(Parser)]
pub struct UnigramCommand {
    /// JSON vocabulary file (the built-in vocabulary if not specified)
    #[arg(long)]
    pub vocab: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Segmentation search
    #[arg(short, long, value_enum, default_value_t = Strategy::Greedy)]
    pub strategy: Strategy,

    /// Keep the input's case instead of lowercasing
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Print the total log-probability of each segmentation
    #[arg(long, default_value_t = false)]
    pub scores: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::output::{format_tokens, print_corpus};
use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_tokenizer::{presets, Model, Tokenizer, UnigramStrategy, VocabLoader};

pub fn run(cmd: UnigramCommand) -> AnyhowResult<()> {
    let segmenter = match &cmd.vocab {
        Some(path) => VocabLoader::load_unigram(Path::new(path))?,
        None => presets::unigram_segmenter(),
    }
    .with_strategy(cmd.strategy.into());
    log::debug!(
        "Unigram vocabulary: {} entries, strategy {:?}",
        segmenter.vocab().len(),
        segmenter.strategy()
    );

    let tokenizer = Tokenizer::builder()
        .model(segmenter)
        .lowercase(!cmd.no_lowercase)
        .build()?;

    let words = cmd.input.words()?;
    let corpus = tokenizer.tokenize_words(&words);

    if cmd.scores && !cmd.json {
        if let Model::Unigram(segmenter) = tokenizer.model() {
            for (word, tokens) in words.iter().zip(&corpus) {
                match segmenter.score(tokens) {
                    Some(score) => println!("{}\t{}\t{:.3}", word, format_tokens(tokens), score),
                    None => println!("{}\t{}\t-", word, format_tokens(tokens)),
                }
            }
            return Ok(());
        }
    }

    print_corpus(&words, &corpus, cmd.json)
}
