use crate::domain::{Ledger, LedgerError, SalaryEntry};
use chrono::NaiveDate;

/// Sum of every amount. Zero for an empty ledger.
pub fn total(ledger: &Ledger) -> u128 {
    ledger.iter().map(|e| u128::from(e.amount())).sum()
}

/// Exact mean of a non-empty ledger, kept as `total / count`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Average {
    total: u128,
    count: u128,
}

impl Average {
    fn new(total: u128, count: usize) -> Self {
        debug_assert!(count > 0);
        Self {
            total,
            count: count as u128,
        }
    }

    /// The mean when it is a whole number of units.
    pub fn as_whole(&self) -> Option<u128> {
        (self.total % self.count == 0).then(|| self.total / self.count)
    }

    /// The mean multiplied by `10^digits`, rounded half up.
    pub fn scaled(&self, digits: u32) -> u128 {
        let factor = 10u128.pow(digits);
        (self.total * factor + self.count / 2) / self.count
    }
}

impl PartialEq for Average {
    fn eq(&self, other: &Self) -> bool {
        self.total * other.count == other.total * self.count
    }
}

/// `total / count`, without rounding.
pub fn average(ledger: &Ledger) -> Result<Average, LedgerError> {
    if ledger.is_empty() {
        return Err(LedgerError::EmptyLedgerAggregation {
            operation: "average",
        });
    }
    Ok(Average::new(total(ledger), ledger.len()))
}

// Strictly greater replaces, so ties keep the earlier entry.
fn larger(best: SalaryEntry, candidate: SalaryEntry) -> SalaryEntry {
    if candidate.amount() > best.amount() {
        candidate
    } else {
        best
    }
}

/// The entry with the largest amount. Ties go to the earliest entry in
/// ledger order.
pub fn maximum(ledger: &Ledger) -> Result<SalaryEntry, LedgerError> {
    ledger
        .iter()
        .copied()
        .reduce(larger)
        .ok_or(LedgerError::EmptyLedgerAggregation {
            operation: "maximum",
        })
}

/// Everything the summary cards need, computed in one pass over a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: u128,
    pub average: Option<Average>,
    pub maximum: Option<SalaryEntry>,
    pub count: usize,
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl Summary {
    pub fn of(ledger: &Ledger) -> Self {
        let (total, maximum) = ledger.iter().fold(
            (0u128, None::<SalaryEntry>),
            |(sum, best), entry| {
                let best = match best {
                    Some(best) => larger(best, *entry),
                    None => *entry,
                };
                (sum + u128::from(entry.amount()), Some(best))
            },
        );
        let count = ledger.len();

        Self {
            total,
            average: (count > 0).then(|| Average::new(total, count)),
            maximum,
            count,
            period: ledger.period(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, entry, sample_ledger};

    #[test]
    fn aggregates_over_sample_data() {
        let ledger = sample_ledger();
        assert_eq!(total(&ledger), 51_800_000);
        assert_eq!(average(&ledger).unwrap().as_whole(), Some(10_360_000));

        let max = maximum(&ledger).unwrap();
        assert_eq!(max.amount(), 18_600_000);
        assert_eq!(max.date(), date(2025, 3, 25));
    }

    #[test]
    fn empty_ledger_has_no_average_or_maximum() {
        let ledger = Ledger::new();
        assert_eq!(total(&ledger), 0);
        assert_eq!(
            average(&ledger),
            Err(LedgerError::EmptyLedgerAggregation {
                operation: "average"
            })
        );
        assert_eq!(
            maximum(&ledger),
            Err(LedgerError::EmptyLedgerAggregation {
                operation: "maximum"
            })
        );
    }

    #[test]
    fn maximum_tie_goes_to_first_in_ledger_order() {
        let ledger = Ledger::new()
            .insert(entry(2025, 2, 1, 500))
            .insert(entry(2025, 1, 1, 500))
            .insert(entry(2025, 1, 1, 500))
            .insert(entry(2025, 3, 1, 100));

        // the February entry was inserted first but sorts later
        assert_eq!(maximum(&ledger).unwrap().date(), date(2025, 1, 1));
    }

    #[test]
    fn average_keeps_the_fraction() {
        let ledger = Ledger::new()
            .insert(entry(2025, 1, 1, 1))
            .insert(entry(2025, 1, 2, 2));
        let avg = average(&ledger).unwrap();

        assert_eq!(avg.as_whole(), None);
        assert_eq!(avg.scaled(1), 15);
        assert_eq!(avg.scaled(2), 150);

        let avg = average(&ledger.insert(entry(2025, 1, 3, 1))).unwrap();
        assert_eq!(avg.scaled(2), 133);
        assert_eq!(avg.scaled(0), 1);
    }

    #[test]
    fn averages_compare_by_value() {
        let two = average(&Ledger::from_entries([entry(2025, 1, 1, 3), entry(2025, 1, 2, 1)]));
        let one = average(&Ledger::from_entries([entry(2025, 1, 1, 2)]));
        assert_eq!(two.unwrap(), one.unwrap());
    }

    #[test]
    fn total_does_not_overflow_on_huge_amounts() {
        let huge = crate::domain::MAX_AMOUNT;
        let ledger = (1..=3000u32).fold(Ledger::new(), |l, i| {
            l.insert(entry(2000 + (i / 365) as i32, 1, 1, huge))
        });
        assert_eq!(total(&ledger), u128::from(huge) * 3000);
        assert_eq!(average(&ledger).unwrap().as_whole(), Some(u128::from(huge)));
    }

    #[test]
    fn summary_of_empty_ledger() {
        let summary = Summary::of(&Ledger::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.maximum, None);
        assert_eq!(summary.period, None);
    }

    #[test]
    fn summary_of_sample() {
        let summary = Summary::of(&sample_ledger());
        assert_eq!(summary.count, 5);
        assert_eq!(summary.average.and_then(|a| a.as_whole()), Some(10_360_000));
        assert_eq!(
            summary.period,
            Some((date(2024, 11, 25), date(2025, 3, 25)))
        );
    }

    #[test]
    fn summary_agrees_with_standalone_aggregates() {
        let ledger = Ledger::new()
            .insert(entry(2025, 2, 1, 700))
            .insert(entry(2025, 1, 1, 700))
            .insert(entry(2025, 3, 1, 5));
        let summary = Summary::of(&ledger);

        assert_eq!(summary.total, total(&ledger));
        assert_eq!(summary.average, average(&ledger).ok());
        assert_eq!(summary.maximum, maximum(&ledger).ok());
        assert_eq!(summary.maximum.map(|m| m.date()), Some(date(2025, 1, 1)));
    }
}
