//! Corpus input shared by the commands.

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use std::io::Read;
use subtok_tokenizer::{presets, Splitter};

/// Where the words to tokenize come from.
#[derive(Args)]
pub struct InputArgs {
    /// Words to tokenize (defaults to the built-in corpus)
    pub words: Vec<String>,

    /// Read whitespace-separated words from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "words")]
    pub input: Option<String>,
}

impl InputArgs {
    /// Collect the corpus words.
    pub fn words(&self) -> AnyhowResult<Vec<String>> {
        if let Some(path) = &self.input {
            let text = if path == "-" {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?
            };
            return Ok(Splitter::whitespace()
                .split(&text)
                .into_iter()
                .map(str::to_string)
                .collect());
        }

        if self.words.is_empty() {
            log::info!("No input given, using the built-in corpus");
            return Ok(presets::DEMO_CORPUS.iter().map(|w| w.to_string()).collect());
        }

        Ok(self.words.clone())
    }
}
