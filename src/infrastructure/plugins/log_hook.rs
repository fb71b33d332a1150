use crate::domain::total;
use crate::infrastructure::{LedgerChange, LedgerHook};
use anyhow::Result;
use log::info;

/// Logs every accepted salary entry through the `log` facade.
pub struct LogHook;

impl LedgerHook for LogHook {
    fn on_entry_added(&self, change: &LedgerChange<'_>) -> Result<()> {
        let entry = change.entry();
        let ledger = change.ledger();
        info!(
            "Salary entry added for {} - Amount: {} - Ledger now holds {} entries totalling {}",
            entry.wire_date(),
            entry.amount(),
            ledger.len(),
            total(ledger)
        );
        if change.is_backdated() {
            info!(
                "Entry for {} was backdated to position {} of {}",
                entry.wire_date(),
                change.position() + 1,
                ledger.len()
            );
        }
        if change.is_new_highest() {
            info!("New highest payment: {} on {}", entry.amount(), entry.wire_date());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Log"
    }
}
