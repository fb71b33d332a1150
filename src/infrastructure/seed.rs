use crate::domain::{LedgerError, RawSalaryRecord, SalaryEntry};
use anyhow::{Context, Result};
use log::error;

/// The payments the dashboard starts with when no other seed is configured.
pub const BUILTIN_SEED: [(&str, u64); 5] = [
    ("25/11/2024", 10_500_000),
    ("25/12/2024", 10_500_000),
    ("25/01/2025", 6_100_000),
    ("25/02/2025", 6_100_000),
    ("25/03/2025", 18_600_000),
];

/// Where the initial ledger contents come from.
pub trait SeedSource {
    /// Load the seed entries in their original order.
    fn load(&self) -> Result<Vec<SalaryEntry>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

pub struct BuiltinSeed;

impl SeedSource for BuiltinSeed {
    fn load(&self) -> Result<Vec<SalaryEntry>> {
        let records = BUILTIN_SEED
            .iter()
            .map(|(date, amount)| RawSalaryRecord::new(*date, *amount));
        records_to_entries(records, &self.describe())
    }

    fn describe(&self) -> String {
        "built-in seed".to_string()
    }
}

pub struct EmptySeed;

impl SeedSource for EmptySeed {
    fn load(&self) -> Result<Vec<SalaryEntry>> {
        Ok(Vec::new())
    }

    fn describe(&self) -> String {
        "empty seed".to_string()
    }
}

/// Convert wire records into entries, failing on the first bad one.
///
/// A malformed stored date means the data was written by something other
/// than the validated pipeline, so it is logged as an error before failing.
pub(crate) fn records_to_entries(
    records: impl IntoIterator<Item = RawSalaryRecord>,
    origin: &str,
) -> Result<Vec<SalaryEntry>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            SalaryEntry::try_from(record)
                .inspect_err(|e| {
                    if let LedgerError::MalformedDate { raw } = e {
                        error!("{origin}: record {index} has malformed date '{raw}'");
                    }
                })
                .with_context(|| format!("Invalid record {index} in {origin}"))
        })
        .collect()
}
