use crate::domain::SalaryEntry;
use chrono::NaiveDate;
use std::sync::Arc;

/// An immutable, chronologically ordered snapshot of salary entries.
///
/// Entries are sorted ascending by date; entries sharing a date keep the
/// order in which they were inserted. Cloning a ledger is cheap and every
/// clone stays valid after later insertions, because insertion builds a new
/// snapshot instead of touching this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Arc<[SalaryEntry]>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger by inserting `entries` one after another.
    pub fn from_entries(entries: impl IntoIterator<Item = SalaryEntry>) -> Self {
        let mut entries: Vec<SalaryEntry> = entries.into_iter().collect();
        entries.sort_by_key(SalaryEntry::date);
        Self {
            entries: entries.into(),
        }
    }

    /// Return a new snapshot with `entry` placed at the end of its date group.
    pub fn insert(&self, entry: SalaryEntry) -> Ledger {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(entry);
        // stable: equal dates keep insertion order
        entries.sort_by_key(SalaryEntry::date);
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[SalaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First and last payment dates, if any.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some((first.date(), last.date()))
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a SalaryEntry;
    type IntoIter = std::slice::Iter<'a, SalaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
