//! Per-run, per-column statistics for the table footer and the counts dump

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use crate::models::{Category, Column, Row};

/// Number of outcomes per category within one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub correct_safe: usize,
    pub correct_unsafe: usize,
    pub wrong_safe: usize,
    pub wrong_unsafe: usize,
}

impl CategoryCounts {
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        let mut counts = Self::default();
        for category in categories {
            counts.total += 1;
            match category {
                Category::CorrectSafe => counts.correct_safe += 1,
                Category::CorrectUnsafe => counts.correct_unsafe += 1,
                Category::WrongSafe => counts.wrong_safe += 1,
                Category::WrongUnsafe => counts.wrong_unsafe += 1,
                Category::Unknown | Category::Error => {}
            }
        }
        counts
    }

    pub fn correct(&self) -> usize {
        self.correct_safe + self.correct_unsafe
    }

    pub fn wrong(&self) -> usize {
        self.wrong_safe + self.wrong_unsafe
    }

    /// Unknown results and errors
    pub fn unknown(&self) -> usize {
        self.total - self.correct() - self.wrong()
    }

    pub fn score(&self) -> i64 {
        [
            (Category::CorrectSafe, self.correct_safe),
            (Category::CorrectUnsafe, self.correct_unsafe),
            (Category::WrongSafe, self.wrong_safe),
            (Category::WrongUnsafe, self.wrong_unsafe),
        ]
        .into_iter()
        .map(|(category, count)| category.score() * count as i64)
        .sum()
    }
}

/// Sums of a numeric column, overall and per correctness bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericTotals {
    pub sum: Decimal,
    pub correct: Decimal,
    pub wrong_safe: Decimal,
    pub wrong_unsafe: Decimal,
    /// Set when a value could not be parsed; all sums are zero then
    pub degraded: bool,
}

/// Statistics of one column of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStats {
    /// Category counts of the run, see [`RunStats::counts`]
    Status,
    Numeric(NumericTotals),
}

/// Statistics of all columns of one run, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub counts: CategoryCounts,
    pub columns: Vec<ColumnStats>,
}

/// Compact per-run summary used by `--dump`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCounts {
    pub correct: usize,
    pub wrong: usize,
    pub unknown: usize,
}

impl std::fmt::Display for RunCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.correct, self.wrong, self.unknown)
    }
}

/// Parse a column value as exact decimal.
///
/// One trailing unit letter is dropped, `-` and blank count as zero.
pub fn parse_decimal(value: &str) -> Result<Decimal, rust_decimal::Error> {
    let mut value = value.trim();
    if value.ends_with(|c: char| c.is_ascii_alphabetic()) {
        value = value[..value.len() - 1].trim_end();
    }
    if value.is_empty() || value == "-" {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value))
}

fn categories_of(rows: &[Row], run: usize) -> impl Iterator<Item = Category> + '_ {
    rows.iter().filter_map(move |row| row.tests.get(run)).map(|t| t.category)
}

/// Statistics of run number `run` over `rows`
pub fn run_statistics(rows: &[Row], run: usize, columns: &[Column]) -> RunStats {
    let counts = CategoryCounts::from_categories(categories_of(rows, run));

    let columns = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            if column.is_status() {
                ColumnStats::Status
            } else {
                ColumnStats::Numeric(numeric_totals(rows, run, index, column))
            }
        })
        .collect();

    RunStats { counts, columns }
}

fn numeric_totals(rows: &[Row], run: usize, index: usize, column: &Column) -> NumericTotals {
    let mut totals = NumericTotals::default();

    for test in rows.iter().filter_map(|row| row.tests.get(run)) {
        let raw = test.values.get(index).map(String::as_str).unwrap_or_default();
        let value = match parse_decimal(raw) {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Column '{}' contains the non-numeric value '{raw}'; its statistics may be wrong.",
                    column.title
                );
                return NumericTotals {
                    degraded: true,
                    ..NumericTotals::default()
                };
            }
        };

        let bucket = match test.category {
            category if category.is_correct() => Some(&mut totals.correct),
            Category::WrongSafe => Some(&mut totals.wrong_safe),
            Category::WrongUnsafe => Some(&mut totals.wrong_unsafe),
            _ => None,
        };
        let bucket_ok = match bucket {
            Some(sum) => add_into(sum, value),
            None => true,
        };
        if !(bucket_ok && add_into(&mut totals.sum, value)) {
            warn!(
                "Column '{}' sums up beyond the representable range; its statistics may be wrong.",
                column.title
            );
            return NumericTotals {
                degraded: true,
                ..NumericTotals::default()
            };
        }
    }

    totals
}

fn add_into(sum: &mut Decimal, value: Decimal) -> bool {
    match sum.checked_add(value) {
        Some(total) => {
            *sum = total;
            true
        }
        None => false,
    }
}

/// Statistics of every run; `columns[i]` are the columns of run `i`
pub fn table_statistics(rows: &[Row], columns: &[&[Column]]) -> Vec<RunStats> {
    columns
        .iter()
        .enumerate()
        .map(|(run, columns)| run_statistics(rows, run, columns))
        .collect()
}

/// (correct, wrong, unknown) per run
pub fn dump_counts(rows: &[Row], run_count: usize) -> Vec<RunCounts> {
    (0..run_count)
        .map(|run| {
            let counts = CategoryCounts::from_categories(categories_of(rows, run));
            RunCounts {
                correct: counts.correct(),
                wrong: counts.wrong(),
                unknown: counts.unknown(),
            }
        })
        .collect()
}

/// Score reachable if every file were classified correctly
pub fn max_score(rows: &[Row]) -> i64 {
    rows.iter()
        .map(|row| {
            if row.bug_present {
                Category::CorrectUnsafe.score()
            } else {
                Category::CorrectSafe.score()
            }
        })
        .sum()
}
