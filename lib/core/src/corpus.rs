use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::Founder;

/// Candidate dataset locations, tried in order at startup.
pub const DEFAULT_DATASET_PATHS: [&str; 3] = [
    "data/founders_dataset.csv",
    "./data/founders_dataset.csv",
    "../data/founders_dataset.csv",
];

/// The full, immutable set of founder records.
///
/// Records are addressed two ways: by zero-based row index (the order they
/// appeared in the dataset, stable only within one loaded instance) and by
/// their opaque `id`.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<Founder>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from already-materialized records.
    ///
    /// Duplicate ids keep the first occurrence; later rows are still stored
    /// and reachable by row index.
    pub fn from_records(records: Vec<Founder>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (row, founder) in records.iter().enumerate() {
            match by_id.entry(founder.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
                Entry::Occupied(_) => {
                    warn!(id = %founder.id, row, "duplicate founder id, keeping first occurrence");
                }
            }
        }
        Self { records, by_id }
    }

    /// Try each candidate path in order and load the first dataset that
    /// exists and parses. Underlying I/O and CSV failures are mapped to the
    /// domain error and logged per candidate.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                debug!(path = %path.display(), "dataset candidate does not exist");
                continue;
            }
            match Self::load_from(path) {
                Ok(corpus) => {
                    info!(
                        records = corpus.len(),
                        path = %path.display(),
                        "loaded founder dataset"
                    );
                    return Ok(corpus);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to parse dataset candidate");
                }
            }
        }
        Err(Error::DatasetNotFound)
    }

    /// Load a dataset from one concrete CSV file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| Error::DatasetParse(e.to_string()))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<Founder>() {
            records.push(row.map_err(|e| Error::DatasetParse(e.to_string()))?);
        }
        Ok(Self::from_records(records))
    }

    /// Look up a record by its opaque id.
    pub fn get(&self, id: &str) -> Option<&Founder> {
        self.by_id.get(id).map(|&row| &self.records[row])
    }

    /// Look up a record by row index.
    pub fn get_row(&self, row: usize) -> Option<&Founder> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records with their row indices. Finite and restartable.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Founder)> {
        self.records.iter().enumerate()
    }
}
