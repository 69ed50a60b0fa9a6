/*
cargo run --bin split_sentences_to_txt -- \
    --input      data/sampled_1000_data_with_sentence.csv \
    --output-dir data/chunks \
    --prefix     sentence_chunk
*/

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use mimiccxr_prep::chunks::{chunk_sentences, write_chunk, CHUNK_SIZE, WINDOW_ROWS};
use mimiccxr_prep::table::Table;

// CLI parameters
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Chunk the first 100 sentences into four TXT files with 25 lines each."
)]
struct Cli {
    // Source CSV path (must carry a `sentence` column)
    #[arg(long)]
    input: PathBuf,

    // Directory to write the TXT files into (created if absent)
    #[arg(long)]
    output_dir: PathBuf,

    // Filename prefix (suffixes 1-4.txt are appended)
    #[arg(long, default_value = "sentence_chunk")]
    prefix: String,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("split_sentences_to_txt_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting sentence chunking");
    info!("Input file: {:?}", cli.input);
    info!("Window: first {WINDOW_ROWS} rows, {CHUNK_SIZE} lines per file");

    let table = Table::load(&cli.input)?;
    info!("Loaded {} rows", table.len());

    // Precondition checks happen here, before any file is written.
    let chunks = chunk_sentences(&table)?;

    create_dir_all(&cli.output_dir)?;
    for chunk in &chunks {
        let path = cli.output_dir.join(format!("{}_{}.txt", cli.prefix, chunk.index));
        write_chunk(chunk, &path)?;
        info!("Chunk {}: rows {}-{} -> {:?}", chunk.index, chunk.start_row, chunk.end_row, path);
        println!("Wrote lines {}-{} to {}", chunk.start_row, chunk.end_row, path.display());
    }

    println!("\n=== Chunk summary ===");
    println!("Chunks written     : {}", chunks.len());
    println!("Output dir         : {}", cli.output_dir.display());
    println!("Log file           : {:?}", log_path);

    Ok(())
}
