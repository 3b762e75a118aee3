// src/io/table.rs

use crate::error::{SimError, SimResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// A loaded CSV dataset: header row plus string records, untyped.
///
/// The preparers decide which columns they need and how to parse them.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn from_path(name: &str, path: &Path) -> SimResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(name, file)
    }

    pub fn from_csv_str(name: &str, data: &str) -> SimResult<Self> {
        Self::from_reader(name, data.as_bytes())
    }

    fn from_reader<R: Read>(name: &str, reader: R) -> SimResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            // Blank lines carry no observation
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(record);
        }

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &StringRecord> {
        self.rows.iter()
    }

    pub fn ensure_not_empty(&self) -> SimResult<()> {
        if self.is_empty() {
            return Err(SimError::EmptyDataset {
                dataset: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Column positions for `required`, in the same order.
    ///
    /// Fails listing every missing column at once.
    pub fn require_columns(&self, required: &[&str]) -> SimResult<Vec<usize>> {
        let mut positions = Vec::with_capacity(required.len());
        let mut missing = Vec::new();

        for column in required {
            match self.headers.iter().position(|h| h == column) {
                Some(idx) => positions.push(idx),
                None => missing.push(column.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(SimError::MissingColumns {
                dataset: self.name.clone(),
                columns: missing,
            });
        }
        Ok(positions)
    }

    /// Cell text, empty for short rows.
    pub fn cell(record: &StringRecord, idx: usize) -> &str {
        record.get(idx).unwrap_or("")
    }
}
