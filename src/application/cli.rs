use crate::application::{Config, ReportRenderer, SalaryBook, SeedChoice};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "salary")]
#[command(about = "Record salary payments and view income statistics")]
#[command(version)]
pub struct Cli {
    /// Number locale for amounts (e.g. id, en)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// ISO 4217 currency code (e.g. IDR, USD)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Locale for month names (e.g. en_US, id_ID)
    #[arg(long, global = true)]
    pub display_locale: Option<String>,

    /// Initial data: builtin, empty, or a JSON file path
    #[arg(long, global = true)]
    pub seed: Option<String>,

    /// Extra entry applied before the command runs, repeatable
    #[arg(long = "add", value_name = "DD/MM/YYYY=AMOUNT", global = true)]
    pub extra_entries: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show total, average and highest income (default)
    Summary,
    /// List every payment in date order
    Table,
    /// Plot payments over time
    Chart {
        /// Emit the chart projection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and add one payment, then list the ledger
    Add {
        /// Payment date (DD/MM/YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// Amount; separators such as '.' or ',' are ignored
        #[arg(short, long, default_value = "")]
        amount: String,
    },
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        let output = cli.execute(Config::from_env())?;
        print!("{output}");
        Ok(())
    }

    /// Run against `config` (with flag overrides applied) and return what
    /// would be printed.
    pub fn execute(self, mut config: Config) -> Result<String> {
        if let Some(locale) = self.locale {
            config.number_locale = locale;
        }
        if let Some(currency) = self.currency {
            config.currency = currency;
        }
        if let Some(display_locale) = self.display_locale {
            config.display_locale = display_locale;
        }
        if let Some(seed) = self.seed {
            config.seed = SeedChoice::parse(&seed);
        }

        let mut book = SalaryBook::from_config(&config)?;

        for raw in &self.extra_entries {
            let (date, amount) = raw
                .split_once('=')
                .ok_or_else(|| anyhow!("Expected DD/MM/YYYY=AMOUNT, got '{raw}'"))?;
            book.add_entry(Some(date), amount)
                .with_context(|| format!("Rejected --add {raw}"))?;
        }

        let renderer = ReportRenderer::new();

        let output = match self.command.unwrap_or(Commands::Summary) {
            Commands::Summary => renderer.render_summary(&book.get_summary_cards()),
            Commands::Table => renderer.render_table(&book.get_table_projection()),
            Commands::Chart { json: true } => {
                let mut json = serde_json::to_string_pretty(&book.get_chart_projection())
                    .context("Failed to serialize chart projection")?;
                json.push('\n');
                json
            }
            Commands::Chart { json: false } => renderer
                .render_chart(&book.get_chart_projection(), book.presenter().currency()),
            Commands::Add { date, amount } => {
                let entry = book.add_entry(date.as_deref(), &amount)?;
                let added = book.presenter().format_currency(entry.amount());
                let typed = book.presenter().currency().format_amount_input(&amount);
                format!(
                    "Added {} on {} (entered as {})\n\n{}",
                    added,
                    entry.wire_date(),
                    typed,
                    renderer.render_table(&book.get_table_projection())
                )
            }
        };

        Ok(output)
    }
}
