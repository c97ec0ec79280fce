//! Demo command implementation.

use clap::Parser;

/// Demo command arguments.
#[derive(Parser)]
pub struct DemoCommand {
    /// Number of BPE merge rounds
    #[arg(short, long, default_value_t = presets::DEFAULT_MERGES)]
    pub merges: usize,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::output::format_tokens;
use anyhow::Result as AnyhowResult;
use serde::Serialize;
use subtok_tokenizer::{presets, Corpus, MergeEngine, Segmenter};

#[derive(Serialize)]
struct DemoReport {
    corpus: Vec<&'static str>,
    bpe: Vec<Vec<String>>,
    bpe_merges: Vec<[String; 2]>,
    wordpiece: Vec<Vec<String>>,
    unigram: Vec<Vec<String>>,
}

fn to_strings(corpus: &Corpus) -> Vec<Vec<String>> {
    corpus
        .iter()
        .map(|word| word.iter().map(|t| t.to_string()).collect())
        .collect()
}

pub fn run(cmd: DemoCommand) -> AnyhowResult<()> {
    let words = presets::DEMO_CORPUS;

    let outcome = MergeEngine::with_merges(cmd.merges).run(&words);
    let wordpiece = presets::wordpiece_segmenter().segment_corpus(&words);
    let unigram = presets::unigram_segmenter().segment_corpus(&words);

    if cmd.json {
        let report = DemoReport {
            corpus: words.to_vec(),
            bpe: to_strings(&outcome.corpus),
            bpe_merges: outcome
                .merges
                .iter()
                .map(|step| [step.pair.0.to_string(), step.pair.1.to_string()])
                .collect(),
            wordpiece: to_strings(&wordpiece),
            unigram: to_strings(&unigram),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Corpus: {}", format_tokens(&words));
    println!();

    println!("BPE ({} merges):", outcome.rounds());
    for step in &outcome.merges {
        println!("  {} + {} (count {})", step.pair.0, step.pair.1, step.count);
    }
    print_section(&words, &outcome.corpus);

    println!("WordPiece:");
    print_section(&words, &wordpiece);

    println!("Unigram:");
    print_section(&words, &unigram);

    Ok(())
}

fn print_section(words: &[&str], corpus: &Corpus) {
    for (word, tokens) in words.iter().zip(corpus) {
        println!("  {:<8} {}", word, format_tokens(tokens));
    }
    println!();
}
