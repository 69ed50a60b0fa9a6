//! Chunk Splitter core: the first 100 `sentence` values, partitioned into
//! four contiguous 25-line text files in original row order.

use std::fs;
use std::io;
use std::path::Path;

use crate::augment::SENTENCE_COLUMN;
use crate::errors::PrepError;
use crate::table::Table;

pub const CHUNK_SIZE: usize = 25;
pub const CHUNK_COUNT: usize = 4;
pub const WINDOW_ROWS: usize = CHUNK_SIZE * CHUNK_COUNT;

/// One 25-line window. `start_row`/`end_row` are 1-indexed and inclusive.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub index: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub lines: Vec<String>,
}

/// Slice the first [`WINDOW_ROWS`] `sentence` values into [`CHUNK_COUNT`]
/// contiguous chunks. Both precondition checks run before anything is
/// sliced, so a failing table produces no partial output downstream.
pub fn chunk_sentences(table: &Table) -> Result<Vec<Chunk>, PrepError> {
    let column = table.column_index(SENTENCE_COLUMN)?;
    if table.len() < WINDOW_ROWS {
        return Err(PrepError::InsufficientRows {
            needed: WINDOW_ROWS,
            found: table.len(),
        });
    }

    let window: Vec<String> = table
        .column(column)
        .take(WINDOW_ROWS)
        .map(str::to_owned)
        .collect();

    Ok(window
        .chunks(CHUNK_SIZE)
        .enumerate()
        .map(|(i, lines)| Chunk {
            index: i + 1,
            start_row: i * CHUNK_SIZE + 1,
            end_row: (i + 1) * CHUNK_SIZE,
            lines: lines.to_vec(),
        })
        .collect())
}

/// Write one chunk as newline-joined text (no trailing newline), replacing
/// any existing file at `path`.
pub fn write_chunk(chunk: &Chunk, path: &Path) -> io::Result<()> {
    fs::write(path, chunk.lines.join("\n"))
}
