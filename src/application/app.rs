use crate::application::{ChartPoint, Config, Presenter, SummaryCards, TableRow};
use crate::domain::{self, Average, Ledger, LedgerError, SalaryEntry, Summary};
use crate::infrastructure::{HookRegistry, SeedSource};
use anyhow::{Context, Result};
use log::{debug, info};

/// The one place holding the current ledger.
///
/// Every mutation goes through [`SalaryBook::add_entry`], which validates,
/// builds the next snapshot with [`Ledger::insert`] and swaps it into the
/// slot in a single assignment. Snapshots handed out earlier are unaffected.
pub struct SalaryBook {
    current: Ledger,
    presenter: Presenter,
    hook_registry: HookRegistry,
}

impl SalaryBook {
    /// Start from `initial` with no hooks.
    pub fn new(initial: Ledger, presenter: Presenter) -> Self {
        Self {
            current: initial,
            presenter,
            hook_registry: HookRegistry::new(),
        }
    }

    pub fn with_hooks(initial: Ledger, presenter: Presenter, hook_registry: HookRegistry) -> Self {
        Self {
            current: initial,
            presenter,
            hook_registry,
        }
    }

    /// Build from configuration: resolve locales, load the seed, register
    /// the default plugins.
    pub fn from_config(config: &Config) -> Result<Self> {
        let presenter = Presenter::new(config.presenter_settings()?);
        let initial = Self::load_seed(config.seed.source().as_ref())?;

        Ok(Self::with_hooks(
            initial,
            presenter,
            HookRegistry::with_default_plugins(),
        ))
    }

    pub fn load_seed(source: &dyn SeedSource) -> Result<Ledger> {
        let entries = source
            .load()
            .with_context(|| format!("Failed to load {}", source.describe()))?;
        info!("Loaded {} salary entries from {}", entries.len(), source.describe());
        Ok(Ledger::from_entries(entries))
    }

    /// Validate raw form input and, on success, install the grown ledger.
    ///
    /// On error the current ledger is left exactly as it was.
    pub fn add_entry(
        &mut self,
        raw_date: Option<&str>,
        raw_amount: &str,
    ) -> Result<SalaryEntry, LedgerError> {
        let entry = domain::validate(raw_date, raw_amount).inspect_err(|e| {
            debug!("Rejected salary entry ({raw_date:?}, {raw_amount:?}): {e}");
        })?;

        self.current = self.current.insert(entry);
        self.hook_registry.notify(&entry, &self.current);
        Ok(entry)
    }

    /// Read-only snapshot of the current ledger.
    pub fn get_ledger(&self) -> Ledger {
        self.current.clone()
    }

    pub fn get_total(&self) -> u128 {
        domain::total(&self.current)
    }

    pub fn get_average(&self) -> Result<Average, LedgerError> {
        domain::average(&self.current)
    }

    pub fn get_maximum(&self) -> Result<SalaryEntry, LedgerError> {
        domain::maximum(&self.current)
    }

    pub fn get_summary(&self) -> Summary {
        Summary::of(&self.current)
    }

    pub fn get_chart_projection(&self) -> Vec<ChartPoint> {
        self.presenter.project_for_chart(&self.current)
    }

    pub fn get_table_projection(&self) -> Vec<TableRow> {
        self.presenter.project_for_table(&self.current)
    }

    pub fn get_summary_cards(&self) -> SummaryCards {
        self.presenter.summary_cards(&self.get_summary())
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hook_registry
    }
}

impl Default for SalaryBook {
    /// An empty ledger rendered with the default settings.
    fn default() -> Self {
        Self::new(Ledger::new(), Presenter::default())
    }
}
