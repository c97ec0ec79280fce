//! BPE command implementation.

use clap::Parser;

use super::input::InputArgs;

/// BPE command arguments.
#[derive(Parser)]
pub struct BpeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of merge rounds
    #[arg(short, long, default_value_t = presets::DEFAULT_MERGES)]
    pub merges: usize,

    /// Count pairs and apply merges in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Print the corpus after every merge round
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Print the top N pair counts before every round
    #[arg(long, default_value_t = 0)]
    pub show_pairs: usize,

    /// Write the learned merges to a JSON file
    #[arg(short, long)]
    pub save_merges: Option<String>,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::output::{format_tokens, print_corpus};
use anyhow::Result as AnyhowResult;
use std::path::Path;
use subtok_core::split_corpus;
use subtok_tokenizer::{presets, Corpus, MergeConfig, MergeEngine, MergeOutcome, VocabSaver};

pub fn run(cmd: BpeCommand) -> AnyhowResult<()> {
    let words = cmd.input.words()?;
    let engine = MergeEngine::new(MergeConfig {
        num_merges: cmd.merges,
        parallel: cmd.parallel,
    });

    let outcome = if cmd.trace || cmd.show_pairs > 0 {
        run_traced(&engine, &words, &cmd)
    } else {
        engine.run(&words)
    };

    if !cmd.json {
        println!("Applied {} of {} merges", outcome.rounds(), cmd.merges);
        for (rank, step) in outcome.merges.iter().enumerate() {
            println!("  {:>3}: {} + {} (count {})", rank, step.pair.0, step.pair.1, step.count);
        }
        println!();
    }
    print_corpus(&words, &outcome.corpus, cmd.json)?;

    if let Some(path) = &cmd.save_merges {
        VocabSaver::save_merges(&outcome.rules(), Path::new(path))?;
        log::info!("Saved {} merges to {}", outcome.rounds(), path);
    }

    Ok(())
}

/// Step through the rounds one at a time, reporting between them.
fn run_traced(engine: &MergeEngine, words: &[String], cmd: &BpeCommand) -> MergeOutcome {
    let mut corpus = split_corpus(words);
    let mut merges = Vec::new();

    if cmd.trace {
        println!("Initial corpus: {}", format_corpus(&corpus));
    }

    for round in 1..=cmd.merges {
        if cmd.show_pairs > 0 {
            let top = engine.count_pairs(&corpus).top_k(cmd.show_pairs);
            println!("Round {} candidates:", round);
            for candidate in top {
                println!("  ({}, {}) = {}", candidate.pair.0, candidate.pair.1, candidate.count);
            }
        }

        match engine.step(&mut corpus) {
            Some(step) => {
                if cmd.trace {
                    println!("After merge {}: {}", round, format_corpus(&corpus));
                }
                merges.push(step);
            }
            None => break,
        }
    }

    MergeOutcome { corpus, merges }
}

fn format_corpus(corpus: &Corpus) -> String {
    let words: Vec<String> = corpus.iter().map(|w| format_tokens(w)).collect();
    format!("[{}]", words.join(" "))
}
