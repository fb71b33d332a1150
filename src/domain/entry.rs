use crate::domain::LedgerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual date form used at every boundary: two-digit day, two-digit month,
/// four-digit year. Always day-first.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Largest amount accepted. Anything above loses integer precision in the
/// clients that feed us form input.
pub const MAX_AMOUNT: u64 = 9_007_199_254_740_991;

/// Parse a `DD/MM/YYYY` string into a calendar date.
///
/// The shape is checked before handing off to chrono so that `5/1/2025` or
/// `2025-01-05` are rejected instead of being guessed at.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let bytes = raw.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });

    if !well_shaped {
        return Err(LedgerError::malformed_date(raw));
    }

    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT).map_err(|_| LedgerError::malformed_date(raw))
}

pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// One validated salary payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSalaryRecord", into = "RawSalaryRecord")]
pub struct SalaryEntry {
    date: NaiveDate,
    amount: u64,
}

impl SalaryEntry {
    pub fn new(date: NaiveDate, amount: u64) -> Result<Self, LedgerError> {
        if amount == 0 || amount > MAX_AMOUNT {
            return Err(LedgerError::invalid_amount(amount.to_string()));
        }
        Ok(Self { date, amount })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn wire_date(&self) -> String {
        format_wire_date(self.date)
    }
}

impl fmt::Display for SalaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.wire_date(), self.amount)
    }
}

/// The shape a salary record takes in seed data and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSalaryRecord {
    pub date: String,
    pub amount: u64,
}

impl RawSalaryRecord {
    pub fn new(date: impl Into<String>, amount: u64) -> Self {
        Self {
            date: date.into(),
            amount,
        }
    }
}

impl TryFrom<RawSalaryRecord> for SalaryEntry {
    type Error = LedgerError;

    fn try_from(record: RawSalaryRecord) -> Result<Self, Self::Error> {
        let date = parse_wire_date(&record.date)?;
        SalaryEntry::new(date, record.amount)
    }
}

impl From<SalaryEntry> for RawSalaryRecord {
    fn from(entry: SalaryEntry) -> Self {
        Self {
            date: entry.wire_date(),
            amount: entry.amount,
        }
    }
}

/// Serde adapter for a bare `NaiveDate` field in the wire format.
pub mod wire_date {
    use super::{format_wire_date, parse_wire_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wire_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).map_err(de::Error::custom)
    }
}
