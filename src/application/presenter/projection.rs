use crate::domain::wire_date;
use chrono::NaiveDate;
use serde::Serialize;

/// One plotted point. `value` is the raw amount for the y axis; the other
/// fields are pre-rendered labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
    #[serde(serialize_with = "wire_date::serialize")]
    pub raw_date: NaiveDate,
    pub formatted_value: String,
}

impl ChartPoint {
    pub fn tooltip_caption(&self) -> String {
        format!("Received on: {}", crate::domain::format_wire_date(self.raw_date))
    }
}

/// One row of the records table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub amount: String,
}

/// Display strings for the three summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub total: String,
    pub total_caption: String,
    pub average: Option<String>,
    pub average_caption: String,
    pub highest: Option<String>,
    pub highest_caption: String,
}
