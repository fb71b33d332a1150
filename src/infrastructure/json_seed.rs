use crate::domain::{RawSalaryRecord, SalaryEntry};
use crate::infrastructure::SeedSource;
use crate::infrastructure::seed::records_to_entries;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Seed data read from a JSON array of `{ "date": "DD/MM/YYYY", "amount": N }`.
///
/// The file is only read, never written back.
pub struct JsonSeedFile {
    path: PathBuf,
}

impl JsonSeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for JsonSeedFile {
    fn load(&self) -> Result<Vec<SalaryEntry>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read seed file {}", self.path.display()))?;

        let records: Vec<RawSalaryRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", self.path.display()))?;

        records_to_entries(records, &self.describe())
    }

    fn describe(&self) -> String {
        format!("seed file {}", self.path.display())
    }
}
