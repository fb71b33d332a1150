//! Read-side transforms that turn ledger snapshots into display strings.
//!
//! Nothing here mutates or reorders a ledger. Locale and currency are
//! inputs via [`PresenterSettings`], never literals.
pub mod currency;
pub mod dates;
pub mod projection;

pub use currency::*;
pub use dates::*;
pub use projection::*;

use crate::domain::{Ledger, Summary};
use iso_currency::Currency;

/// Locale and currency choices for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterSettings {
    /// Grouping and decimal marks for amounts.
    pub number_locale: num_format::Locale,
    pub currency: Currency,
    /// Month names for dates. Independent of how dates are parsed.
    pub display_locale: chrono::Locale,
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            number_locale: num_format::Locale::id,
            currency: Currency::IDR,
            display_locale: chrono::Locale::en_US,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    settings: PresenterSettings,
    currency: CurrencyFormatter,
}

impl Presenter {
    pub fn new(settings: PresenterSettings) -> Self {
        Self {
            settings,
            currency: CurrencyFormatter::new(settings.number_locale, settings.currency),
        }
    }

    pub fn currency(&self) -> &CurrencyFormatter {
        &self.currency
    }

    pub fn format_currency(&self, amount: impl Into<u128>) -> String {
        self.currency.format(amount)
    }

    pub fn format_currency_compact(&self, amount: impl Into<u128>) -> String {
        self.currency.format_compact(amount)
    }

    /// One point per entry, in ledger order.
    pub fn project_for_chart(&self, ledger: &Ledger) -> Vec<ChartPoint> {
        ledger
            .iter()
            .map(|entry| ChartPoint {
                label: format_date_short_month_year(entry.date(), self.settings.display_locale),
                value: entry.amount(),
                raw_date: entry.date(),
                formatted_value: self.currency.format(entry.amount()),
            })
            .collect()
    }

    /// One row per entry, in ledger order.
    pub fn project_for_table(&self, ledger: &Ledger) -> Vec<TableRow> {
        ledger
            .iter()
            .map(|entry| TableRow {
                date: format_date_long(entry.date(), self.settings.display_locale),
                amount: self.currency.format(entry.amount()),
            })
            .collect()
    }

    pub fn summary_cards(&self, summary: &Summary) -> SummaryCards {
        let locale = self.settings.display_locale;

        let total_caption = match summary.period {
            Some((first, last)) => format!("For the period {}", format_period(first, last, locale)),
            None => "No salary data yet".to_string(),
        };

        let highest_caption = summary
            .maximum
            .map(|max| {
                format!(
                    "Recorded in {}",
                    format_date_short_month_year(max.date(), locale)
                )
            })
            .unwrap_or_default();

        SummaryCards {
            total: self.currency.format(summary.total),
            total_caption,
            average: summary.average.map(|avg| self.currency.format_average(avg)),
            average_caption: format!("Based on {} months of data", summary.count),
            highest: summary.maximum.map(|max| self.currency.format(max.amount())),
            highest_caption,
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(PresenterSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, entry, sample_ledger};

    #[test]
    fn chart_projection_follows_ledger_order() {
        let ledger = sample_ledger().insert(entry(2024, 12, 25, 1_000));
        let points = Presenter::default().project_for_chart(&ledger);

        assert_eq!(points.len(), ledger.len());
        for (point, entry) in points.iter().zip(ledger.iter()) {
            assert_eq!(point.raw_date, entry.date());
            assert_eq!(point.value, entry.amount());
        }

        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Nov 2024", "Dec 2024", "Dec 2024", "Jan 2025", "Feb 2025", "Mar 2025"]
        );
        assert_eq!(points[2].formatted_value, "Rp\u{a0}1.000");
    }

    #[test]
    fn chart_point_serializes_wire_date() {
        let points = Presenter::default().project_for_chart(&sample_ledger());
        let json = serde_json::to_value(&points[0]).unwrap();

        assert_eq!(json["label"], "Nov 2024");
        assert_eq!(json["value"], 10_500_000);
        assert_eq!(json["rawDate"], "25/11/2024");
        assert_eq!(json["formattedValue"], "Rp\u{a0}10.500.000");
        assert_eq!(points[0].tooltip_caption(), "Received on: 25/11/2024");
    }

    #[test]
    fn table_rows_use_long_dates() {
        let rows = Presenter::default().project_for_table(&sample_ledger());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].date, "November 25, 2024");
        assert_eq!(rows[4].amount, "Rp\u{a0}18.600.000");
    }

    #[test]
    fn summary_cards_for_sample() {
        let cards = Presenter::default().summary_cards(&Summary::of(&sample_ledger()));

        assert_eq!(cards.total, "Rp\u{a0}51.800.000");
        assert_eq!(cards.total_caption, "For the period Nov 2024 - Mar 2025");
        assert_eq!(cards.average.as_deref(), Some("Rp\u{a0}10.360.000"));
        assert_eq!(cards.average_caption, "Based on 5 months of data");
        assert_eq!(cards.highest.as_deref(), Some("Rp\u{a0}18.600.000"));
        assert_eq!(cards.highest_caption, "Recorded in Mar 2025");
    }

    #[test]
    fn summary_card_average_keeps_the_fraction() {
        let ledger = Ledger::new()
            .insert(entry(2025, 1, 25, 1))
            .insert(entry(2025, 2, 25, 2));
        let cards = Presenter::default().summary_cards(&Summary::of(&ledger));

        assert_eq!(cards.average.as_deref(), Some("Rp\u{a0}1,5"));
        assert_eq!(cards.total, "Rp\u{a0}3");
    }

    #[test]
    fn summary_cards_for_empty_ledger() {
        let cards = Presenter::default().summary_cards(&Summary::of(&Ledger::new()));

        assert_eq!(cards.total, "Rp\u{a0}0");
        assert_eq!(cards.total_caption, "No salary data yet");
        assert_eq!(cards.average, None);
        assert_eq!(cards.highest, None);
        assert!(cards.highest_caption.is_empty());
    }

    #[test]
    fn settings_drive_output() {
        let presenter = Presenter::new(PresenterSettings {
            number_locale: num_format::Locale::en,
            currency: Currency::USD,
            display_locale: chrono::Locale::en_US,
        });
        let ledger = Ledger::new().insert(entry(2025, 7, 4, 2_500));

        assert_eq!(presenter.project_for_chart(&ledger)[0].formatted_value, "$2,500");
        assert_eq!(presenter.format_currency_compact(2_500u64), "$2.5K");
        assert_eq!(ledger.entries()[0].date(), date(2025, 7, 4));
    }
}
