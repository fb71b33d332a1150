use chrono::{Locale, NaiveDate, NaiveTime};

pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
pub const SHORT_MONTH_YEAR_FORMAT: &str = "%b %Y";

fn localized(date: NaiveDate, format: &str, locale: Locale) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(format, locale)
        .to_string()
}

/// "November 25, 2024"
pub fn format_date_long(date: NaiveDate, locale: Locale) -> String {
    localized(date, LONG_DATE_FORMAT, locale)
}

/// "Nov 2024"
pub fn format_date_short_month_year(date: NaiveDate, locale: Locale) -> String {
    localized(date, SHORT_MONTH_YEAR_FORMAT, locale)
}

/// "Nov 2024 - Mar 2025"
pub fn format_period(first: NaiveDate, last: NaiveDate, locale: Locale) -> String {
    format!(
        "{} - {}",
        format_date_short_month_year(first, locale),
        format_date_short_month_year(last, locale)
    )
}
