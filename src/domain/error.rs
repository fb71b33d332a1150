use thiserror::Error;

/// Everything that can go wrong inside the ledger core.
///
/// Each variant is returned as a value to the immediate caller. The display
/// text doubles as the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Please select a date")]
    MissingDate,

    #[error("Please enter a valid amount")]
    InvalidAmount { raw: String },

    #[error("No salary data to compute the {operation}")]
    EmptyLedgerAggregation { operation: &'static str },

    #[error("Malformed date '{raw}', expected DD/MM/YYYY")]
    MalformedDate { raw: String },
}

impl LedgerError {
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::InvalidAmount { raw: raw.into() }
    }

    pub fn malformed_date(raw: impl Into<String>) -> Self {
        Self::MalformedDate { raw: raw.into() }
    }
}
