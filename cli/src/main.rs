//! Subtok CLI - Command-line interface for the subword tokenizers.
//!
//! This is the main entry point for the `subtok` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{ApplyCommand, BpeCommand, DemoCommand, UnigramCommand, WordPieceCommand};
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "subtok")]
#[command(about = "Subword tokenization with BPE, WordPiece and Unigram", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn BPE merges from a corpus
    Bpe(BpeCommand),
    /// Apply saved BPE merges to words
    Apply(ApplyCommand),
    /// Segment words by longest match against a WordPiece vocabulary
    Wordpiece(WordPieceCommand),
    /// Segment words with a scored Unigram vocabulary
    Unigram(UnigramCommand),
    /// Run all three tokenizers on the built-in corpus
    Demo(DemoCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Bpe(cmd) => commands::bpe::run(cmd)?,
        Commands::Apply(cmd) => commands::apply::run(cmd)?,
        Commands::Wordpiece(cmd) => commands::wordpiece::run(cmd)?,
        Commands::Unigram(cmd) => commands::unigram::run(cmd)?,
        Commands::Demo(cmd) => commands::demo::run(cmd)?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(log_level(verbose, quiet));
    builder.init();
}

fn log_level(verbose: u8, quiet: u8) -> LevelFilter {
    match (quiet, verbose) {
        (0, 0) => LevelFilter::Info,
        (0, 1) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Warn,
        _ => LevelFilter::Error,
    }
}
