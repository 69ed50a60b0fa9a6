/*
cargo run --bin add_sentence_column -- \
    --input  data/sampled_1000_data.csv \
    --output data/sampled_1000_data_with_sentence.csv \
    --seed   42
*/

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use mimiccxr_prep::augment::{add_sentence_column, SENTENCE_COLUMN};
use mimiccxr_prep::table::Table;

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Add a random caption sentence column to the sampled report data.")]
struct Cli {
    // Path to the input CSV file
    #[arg(long)]
    input: PathBuf,

    // Path to write the updated CSV with the new column
    #[arg(long)]
    output: PathBuf,

    // Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("add_sentence_column_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting caption extraction");
    info!("Input file: {:?}", cli.input);

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Seeding RNG with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut table = Table::load(&cli.input)?;
    info!("Loaded {} rows", table.len());

    let stats = add_sentence_column(&mut table, &mut rng)?;
    table.write(&cli.output)?;
    info!(
        "Wrote {} rows with `{SENTENCE_COLUMN}` column -> {:?}",
        stats.rows, cli.output
    );

    println!("Wrote updated data with `{SENTENCE_COLUMN}` column to {}", cli.output.display());
    println!("\n=== Augment summary ===");
    println!("Rows processed     : {}", stats.rows);
    println!("Sentences picked   : {}", stats.with_sentence);
    println!("Empty sentences    : {}", stats.rows - stats.with_sentence);
    println!("Log file           : {:?}", log_path);

    Ok(())
}
