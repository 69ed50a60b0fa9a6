//! Caption Extractor pipeline: one seeded pass over the table, appending
//! a `sentence` column with one randomly chosen caption per row.

use rand::Rng;

use crate::errors::PrepError;
use crate::payload::pick_sentence;
use crate::table::Table;

pub const SOURCE_COLUMN: &str = "umls_json_info";
pub const SENTENCE_COLUMN: &str = "sentence";

#[derive(Debug, Clone, Copy)]
pub struct AugmentStats {
    pub rows: usize,
    pub with_sentence: usize,
}

/// Compute and set the `sentence` column.
///
/// Fails up front if `umls_json_info` is absent; after that nothing
/// aborts the pass — rows with an unusable payload get an empty string.
/// The generator is advanced once per usable row, in row order.
pub fn add_sentence_column<R: Rng>(
    table: &mut Table,
    rng: &mut R,
) -> Result<AugmentStats, PrepError> {
    let source = table.column_index(SOURCE_COLUMN)?;

    let mut with_sentence = 0usize;
    let sentences: Vec<String> = table
        .column(source)
        .map(|raw| match pick_sentence(raw, rng) {
            Some(sentence) => {
                with_sentence += 1;
                sentence
            }
            None => String::new(),
        })
        .collect();

    let stats = AugmentStats {
        rows: sentences.len(),
        with_sentence,
    };
    table.set_column(SENTENCE_COLUMN, sentences);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn write_input(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("input.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_source_column_fails_before_processing() {
        let dir = tempdir().unwrap();
        let path = write_input(dir.path(), "id,notes\n0,hello\n");
        let mut table = Table::load(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = add_sentence_column(&mut table, &mut rng).unwrap_err();
        assert!(matches!(err, PrepError::MissingColumn(_)));
        // Nothing got appended.
        assert_eq!(table.headers().len(), 2);
    }

    #[test]
    fn usable_rows_get_a_caption_and_others_get_empty() {
        let dir = tempdir().unwrap();
        let body = concat!(
            "id,umls_json_info\n",
            "0,\"{\"\"caption\"\": [\"\"Clear lungs.\"\"]}\"\n",
            "1,\n",
            "2,not json\n",
        );
        let path = write_input(dir.path(), body);
        let mut table = Table::load(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let stats = add_sentence_column(&mut table, &mut rng).unwrap();

        assert_eq!(stats.rows, 3);
        assert_eq!(stats.with_sentence, 1);
        let col = table.column_index(SENTENCE_COLUMN).unwrap();
        let values: Vec<_> = table.column(col).collect();
        assert_eq!(values, ["Clear lungs.", "", ""]);
    }

    #[test]
    fn reaugmenting_overwrites_the_sentence_column() {
        let dir = tempdir().unwrap();
        let body = concat!(
            "id,umls_json_info\n",
            "0,\"{\"\"caption\"\": [\"\"Clear lungs.\"\"]}\"\n",
        );
        let path = write_input(dir.path(), body);
        let mut table = Table::load(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        add_sentence_column(&mut table, &mut rng).unwrap();
        add_sentence_column(&mut table, &mut rng).unwrap();
        // Exactly one sentence header after the second pass.
        let count = table.headers().iter().filter(|h| *h == SENTENCE_COLUMN).count();
        assert_eq!(count, 1);
    }
}
