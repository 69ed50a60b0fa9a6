use std::io;

use thiserror::Error;

/// Error type for table preconditions and file I/O failures.
///
/// Row-level data problems (malformed JSON payloads) never surface here;
/// they degrade to an empty `sentence` value inside [`crate::payload`].
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("input table does not contain a `{0}` column")]
    MissingColumn(String),
    #[error("input table has {found} rows, need at least {needed}")]
    InsufficientRows { needed: usize, found: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
