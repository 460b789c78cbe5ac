//! wordgen - generate pronounceable words from a list of seed words.
//!
//! Reads one seed word per line, learns an order-N character Markov chain
//! and prints freshly sampled words.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use rs_wordgen_core::SeedEncoding;
use rs_wordgen_core::model::chain_table::ChainTable;
use rs_wordgen_core::model::order::ChainOrder;
use rs_wordgen_core::model::sampler::WordSampler;
use rs_wordgen_core::model::sampler_config::SamplerConfig;

/// Generate pronounceable words with a character Markov chain.
#[derive(Parser, Debug)]
#[command(name = "wordgen", version, long_about = None)]
struct Cli {
    /// Seed file, one word per line
    seed_file: PathBuf,

    /// Chain order: how many previous characters are used as context (1-10)
    #[arg(short, long, default_value_t = 3)]
    order: usize,

    /// Number of words to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    count: usize,

    /// Maximum length of a generated word, in characters
    #[arg(long, default_value_t = SamplerConfig::DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Seed file encoding: utf-8, utf-16, utf-16le or utf-16be
    #[arg(short, long, default_value = "utf-8")]
    encoding: SeedEncoding,

    /// Random seed; the same seed, file and options give the same words
    #[arg(long, env = "WORDGEN_SEED")]
    seed: Option<u64>,

    /// Retries when a generated word already exists in the seed file
    #[arg(long, default_value_t = 0)]
    avoid_existing: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One word per line
    Text,
    /// A single JSON document
    Json,
}

/// JSON output document.
#[derive(Serialize, Debug)]
struct Report<'a> {
    order: ChainOrder,
    seed: u64,
    config: &'a SamplerConfig,
    words: &'a [String],
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = SamplerConfig::new(cli.max_length, cli.avoid_existing)?;

    let table = ChainTable::from_file(&cli.seed_file, cli.order, cli.encoding)
        .with_context(|| format!("failed to build chain table from {}", cli.seed_file.display()))?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("random seed: {seed} (pass --seed {seed} to reproduce)");

    let mut sampler = WordSampler::with_config(&table, ChaCha8Rng::seed_from_u64(seed), config);
    let words = sampler
        .generate(cli.count)
        .collect::<Result<Vec<_>, _>>()
        .context("word generation failed")?;

    match cli.format {
        OutputFormat::Text => {
            for word in &words {
                println!("{word}");
            }
        }
        OutputFormat::Json => {
            let report = Report { order: table.order(), seed, config: sampler.config(), words: &words };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    run(&cli)
}
