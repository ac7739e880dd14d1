//! Detection of files whose status differs between runs

use tracing::{debug, info};

use crate::models::Row;

/// Result of comparing the statuses of all runs
#[derive(Debug, Clone)]
pub enum DiffOutcome {
    /// Every row has the same status in all runs
    NoDifference,
    /// Every row differs, so a difference table would repeat the main table
    AllDiffer,
    /// The differing rows, in canonical order
    Differences(Vec<Row>),
}

impl DiffOutcome {
    /// Rows to put into the difference table; empty unless some but not all rows differ
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Differences(rows) => rows,
            Self::NoDifference | Self::AllDiffer => &[],
        }
    }
}

/// First pair of differing statuses in a row, if any
pub fn first_difference(row: &Row) -> Option<(&str, &str)> {
    let first = row.tests.first()?;
    row.tests
        .iter()
        .find(|test| test.status != first.status)
        .map(|test| (first.status.as_str(), test.status.as_str()))
}

pub fn find_differences(rows: &[Row]) -> DiffOutcome {
    let width = rows.iter().map(|r| r.filename.len()).max().unwrap_or(0);

    let differing: Vec<Row> = rows
        .iter()
        .filter(|row| match first_difference(row) {
            Some((old, new)) => {
                debug!(
                    "    difference found:  {:width$} : {old} --> {new}",
                    row.filename
                );
                true
            }
            None => false,
        })
        .cloned()
        .collect();

    if differing.is_empty() {
        info!("---> NO DIFFERENCE FOUND IN COLUMN 'STATUS'");
        DiffOutcome::NoDifference
    } else if differing.len() == rows.len() {
        info!("---> DIFFERENCES FOUND IN ALL ROWS, NO NEED TO CREATE DIFFERENCE TABLE");
        DiffOutcome::AllDiffer
    } else {
        info!("---> {} ROWS DIFFER IN COLUMN 'STATUS'", differing.len());
        DiffOutcome::Differences(differing)
    }
}
