//! Preparation utilities for the sampled MIMIC-CXR report dataset.
//!
//! Two independent batch steps, exposed as binaries:
//! `add_sentence_column` picks one random caption per row out of the
//! `umls_json_info` JSON blob and appends it as a `sentence` column;
//! `split_sentences_to_txt` slices the first 100 sentences into four
//! 25-line text files.

pub mod augment;
pub mod chunks;
pub mod errors;
pub mod payload;
pub mod table;

pub use errors::PrepError;
