//! Minimal in-memory CSV table: the whole dataset is at most 1000 rows,
//! so both pipelines load it wholesale, transform, and write back out.

use std::path::Path;

use csv::StringRecord;

use crate::errors::PrepError;

#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn load(path: &Path) -> Result<Self, PrepError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// Row count, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Result<usize, PrepError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))
    }

    /// Values of one column in row order. Short rows yield `""`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row.get(index).unwrap_or(""))
    }

    /// Overwrite the column `name`, or append it as a new last column.
    ///
    /// `values` must hold one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.headers.iter().position(|h| h == name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(&values) {
                    let mut rebuilt = StringRecord::new();
                    for (i, field) in row.iter().enumerate() {
                        rebuilt.push_field(if i == index { value } else { field });
                    }
                    *row = rebuilt;
                }
            }
            None => {
                self.headers.push_field(name);
                for (row, value) in self.rows.iter_mut().zip(&values) {
                    row.push_field(value);
                }
            }
        }
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), PrepError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
