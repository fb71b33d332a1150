use crate::domain::{Ledger, SalaryEntry};
use crate::infrastructure::LogHook;
use anyhow::Result;
use log::{debug, warn};

/// One accepted salary entry and the ledger it now lives in.
#[derive(Debug, Clone, Copy)]
pub struct LedgerChange<'a> {
    entry: &'a SalaryEntry,
    ledger: &'a Ledger,
    position: usize,
}

impl<'a> LedgerChange<'a> {
    /// `ledger` must already contain `entry`. Equal dates keep insertion
    /// order, so the new entry is the last one on its date.
    pub fn new(entry: &'a SalaryEntry, ledger: &'a Ledger) -> Self {
        let position = ledger
            .entries()
            .partition_point(|e| e.date() <= entry.date())
            .saturating_sub(1);
        Self {
            entry,
            ledger,
            position,
        }
    }

    pub fn entry(&self) -> &SalaryEntry {
        self.entry
    }

    pub fn ledger(&self) -> &Ledger {
        self.ledger
    }

    /// Index of the entry in the ledger's date order.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The payment landed before at least one later-dated payment.
    pub fn is_backdated(&self) -> bool {
        self.position + 1 < self.ledger.len()
    }

    /// No other payment is as large.
    pub fn is_new_highest(&self) -> bool {
        self.ledger
            .iter()
            .enumerate()
            .all(|(i, e)| i == self.position || e.amount() < self.entry.amount())
    }
}

/// Trait for plugins that respond to ledger insertions
pub trait LedgerHook: Send + Sync {
    /// Called after the grown ledger has been installed as current
    fn on_entry_added(&self, change: &LedgerChange<'_>) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;

    /// Whether this hook should be enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}

/// Registry for managing ledger hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn LedgerHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registry holding the built-in plugins that are on by default.
    pub fn with_default_plugins() -> Self {
        let mut registry = Self::new();
        if LogHook.enabled_by_default() {
            registry.register(LogHook);
        }
        registry
    }

    /// Register a new ledger hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: LedgerHook + 'static,
    {
        debug!("Registering ledger hook '{}'", hook.name());
        self.hooks.push(Box::new(hook));
    }

    /// Run every hook. A failing hook is logged and the rest still run.
    pub fn notify(&self, entry: &SalaryEntry, ledger: &Ledger) {
        let change = LedgerChange::new(entry, ledger);
        for hook in &self.hooks {
            if let Err(e) = hook.on_entry_added(&change) {
                warn!("Hook '{}' failed: {:#}", hook.name(), e);
            }
        }
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
