//! Classified results arranged as table rows

use std::path::PathBuf;

use super::category::Category;

/// Final classified result of one run for one file
#[derive(Debug, Clone)]
pub struct Test {
    pub status: String,
    pub category: Category,
    pub score: i64,
    /// One value per column of the run, already extracted and formatted
    pub values: Vec<String>,
    pub log_file: Option<PathBuf>,
}

/// All results for one source file, one `Test` per run in run order
#[derive(Debug, Clone)]
pub struct Row {
    pub filename: String,
    /// Ground truth of the file as decided by the oracle
    pub bug_present: bool,
    pub tests: Vec<Test>,
}

impl Row {
    pub fn new(filename: impl Into<String>, bug_present: bool) -> Self {
        Self {
            filename: filename.into(),
            bug_present,
            tests: Vec::new(),
        }
    }
}
