use crate::domain::{LedgerError, MAX_AMOUNT, SalaryEntry, parse_wire_date};

/// Drop every character that is not an ASCII digit, so `10.500.000` or
/// `Rp 10,500,000` both become `10500000`.
pub fn sanitize_amount(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Turn raw form input into a well-formed entry.
///
/// The date check runs first, so a submission missing both fields reports
/// `MissingDate`.
pub fn validate(raw_date: Option<&str>, raw_amount: &str) -> Result<SalaryEntry, LedgerError> {
    let raw_date = raw_date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(LedgerError::MissingDate)?;
    let date = parse_wire_date(raw_date)?;

    let digits = sanitize_amount(raw_amount);
    let amount = digits
        .parse::<u64>()
        .ok()
        .filter(|amount| *amount > 0 && *amount <= MAX_AMOUNT)
        .ok_or_else(|| LedgerError::invalid_amount(raw_amount))?;

    SalaryEntry::new(date, amount)
}
