use crate::domain::{Average, sanitize_amount};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString};

const NBSP: char = '\u{a0}';

/// How a language places the currency symbol and abbreviates large
/// amounts. Languages without an entry use the English style.
struct LocaleStyle {
    language: &'static str,
    units: [&'static str; 4],
    spaced_units: bool,
    symbol_after: bool,
}

static LOCALE_STYLES: [LocaleStyle; 4] = [
    LocaleStyle {
        language: "id",
        units: ["rb", "jt", "M", "T"],
        spaced_units: true,
        symbol_after: false,
    },
    LocaleStyle {
        language: "en",
        units: ["K", "M", "B", "T"],
        spaced_units: false,
        symbol_after: false,
    },
    LocaleStyle {
        language: "de",
        units: ["Tsd.", "Mio.", "Mrd.", "Bio."],
        spaced_units: true,
        symbol_after: true,
    },
    LocaleStyle {
        language: "fr",
        units: ["k", "M", "Md", "Bn"],
        spaced_units: true,
        symbol_after: true,
    },
];

const SCALES: [u128; 4] = [1_000, 1_000_000, 1_000_000_000, 1_000_000_000_000];

impl LocaleStyle {
    fn for_locale(locale: &Locale) -> &'static LocaleStyle {
        let language = locale.name().split('-').next().unwrap_or_default();
        LOCALE_STYLES
            .iter()
            .find(|style| style.language == language)
            .unwrap_or(&LOCALE_STYLES[1])
    }
}

/// Renders amounts as currency strings for one locale/currency pair. Holds
/// no mutable state, so the same input always yields the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Full form with thousands separators and no fraction digits,
    /// e.g. `Rp 10.500.000` or `10.500.000 €`.
    pub fn format(&self, amount: impl Into<u128>) -> String {
        self.with_symbol(amount.into().to_formatted_string(&self.locale))
    }

    /// An exact mean, with up to the currency's minor-unit digits and no
    /// trailing zeros: `Rp 1,5`, `Rp 10.360.000`.
    pub fn format_average(&self, average: Average) -> String {
        let digits = u32::from(self.currency.exponent().unwrap_or(0));
        let factor = 10u128.pow(digits);
        let scaled = average.scaled(digits);

        let whole = (scaled / factor).to_formatted_string(&self.locale);
        let number = match scaled % factor {
            0 => whole,
            fraction => {
                let fraction = format!("{fraction:0width$}", width = digits as usize);
                format!(
                    "{whole}{}{}",
                    self.locale.decimal(),
                    fraction.trim_end_matches('0')
                )
            }
        };
        self.with_symbol(number)
    }

    /// Abbreviated form for axis labels, at most one fraction digit,
    /// e.g. `Rp 10,5 jt` or `$10.5M`.
    pub fn format_compact(&self, amount: impl Into<u128>) -> String {
        self.with_symbol(self.compact_number(amount.into()))
    }

    fn with_symbol(&self, number: String) -> String {
        let symbol = self.currency.symbol().to_string();
        if LocaleStyle::for_locale(&self.locale).symbol_after {
            return format!("{number}{NBSP}{symbol}");
        }
        match symbol.chars().last() {
            Some(c) if c.is_alphabetic() => format!("{symbol}{NBSP}{number}"),
            _ => format!("{symbol}{number}"),
        }
    }

    fn compact_number(&self, amount: u128) -> String {
        let style = LocaleStyle::for_locale(&self.locale);

        let Some(mut scale_index) = SCALES.iter().rposition(|scale| amount >= *scale) else {
            return amount.to_formatted_string(&self.locale);
        };

        let mut tenths = round_to_tenths(amount, SCALES[scale_index]);
        // 999_960 rounds to 1000.0 thousand, which reads better as 1 million
        if tenths >= 10_000 && scale_index + 1 < SCALES.len() {
            scale_index += 1;
            tenths = round_to_tenths(amount, SCALES[scale_index]);
        }

        let whole = (tenths / 10).to_formatted_string(&self.locale);
        let number = match tenths % 10 {
            0 => whole,
            fraction => format!("{whole}{}{fraction}", self.locale.decimal()),
        };

        let unit = style.units[scale_index];
        if style.spaced_units {
            format!("{number}{NBSP}{unit}")
        } else {
            format!("{number}{unit}")
        }
    }

    /// Echo what the user typed into the amount field: strip everything but
    /// digits and regroup with this locale's separator.
    pub fn format_amount_input(&self, raw: &str) -> String {
        format_amount_input(raw, &self.locale)
    }
}

fn round_to_tenths(amount: u128, scale: u128) -> u128 {
    (amount * 10 + scale / 2) / scale
}

pub fn format_currency(amount: impl Into<u128>, locale: &Locale, currency: Currency) -> String {
    CurrencyFormatter::new(*locale, currency).format(amount)
}

pub fn format_currency_compact(
    amount: impl Into<u128>,
    locale: &Locale,
    currency: Currency,
) -> String {
    CurrencyFormatter::new(*locale, currency).format_compact(amount)
}

pub fn format_amount_input(raw: &str, locale: &Locale) -> String {
    let digits = sanitize_amount(raw);
    if digits.is_empty() {
        return digits;
    }
    match digits.parse::<u128>() {
        Ok(value) => value.to_formatted_string(locale),
        Err(_) => digits,
    }
}
