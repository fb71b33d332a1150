use crate::application::{ChartPoint, CurrencyFormatter, SummaryCards, TableRow};
use std::fmt::Write;

const BAR_WIDTH: u64 = 40;
const NO_DATA: &str = "No data";

/// Plain-text rendering of the dashboard views.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_summary(&self, cards: &SummaryCards) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total Income");
        let _ = writeln!(out, "  {}", cards.total);
        let _ = writeln!(out, "  {}", cards.total_caption);
        let _ = writeln!(out);
        let _ = writeln!(out, "Average Monthly Income");
        let _ = writeln!(out, "  {}", cards.average.as_deref().unwrap_or(NO_DATA));
        let _ = writeln!(out, "  {}", cards.average_caption);
        let _ = writeln!(out);
        let _ = writeln!(out, "Highest Monthly Income");
        let _ = writeln!(out, "  {}", cards.highest.as_deref().unwrap_or(NO_DATA));
        if !cards.highest_caption.is_empty() {
            let _ = writeln!(out, "  {}", cards.highest_caption);
        }
        out
    }

    pub fn render_table(&self, rows: &[TableRow]) -> String {
        if rows.is_empty() {
            return format!("{NO_DATA}\n");
        }

        let date_width = rows
            .iter()
            .map(|r| r.date.chars().count())
            .max()
            .unwrap_or(0)
            .max("Date".len());
        let amount_width = rows
            .iter()
            .map(|r| r.amount.chars().count())
            .max()
            .unwrap_or(0)
            .max("Amount".len());

        let mut out = String::new();
        let _ = writeln!(out, "{:<date_width$}  {:>amount_width$}", "Date", "Amount");
        let _ = writeln!(out, "{}  {}", "-".repeat(date_width), "-".repeat(amount_width));
        for row in rows {
            let _ = writeln!(
                out,
                "{:<date_width$}  {:>amount_width$}",
                row.date, row.amount
            );
        }
        out
    }

    /// Horizontal bars scaled to the largest point, labelled in compact form.
    pub fn render_chart(&self, points: &[ChartPoint], currency: &CurrencyFormatter) -> String {
        let Some(peak) = points.iter().map(|p| p.value).max() else {
            return format!("{NO_DATA}\n");
        };

        let label_width = points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for point in points {
            let len = (u128::from(point.value) * u128::from(BAR_WIDTH) / u128::from(peak)).max(1);
            let _ = writeln!(
                out,
                "{:<label_width$} | {} {}",
                point.label,
                "#".repeat(len as usize),
                currency.format_compact(point.value)
            );
        }
        out
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
