//! Table-definition document loader
//!
//! ```xml
//! <table>
//!   <test filename="results/*.results.xml">
//!     <column title="status"/>
//!     <column title="cputime" numberOfDigits="2"/>
//!     <column title="refinements">Number of refinements</column>
//!   </test>
//! </table>
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::xml::Element;
use super::{read_document, LoadError};
use crate::fs::file_list::expand_pattern;
use crate::models::constants::TABLE_ROOT_TAG;
use crate::models::Column;

/// One result document selected by the definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSelection {
    pub result_file: PathBuf,
    /// Explicit columns; `None` shows every column of the document
    pub columns: Option<Vec<Column>>,
}

/// Parsed table definition
#[derive(Debug, Clone)]
pub struct TableDefinition {
    /// Table name, taken from the definition file name without extension
    pub name: String,
    pub runs: Vec<RunSelection>,
}

/// Load a table definition and expand its file patterns
pub fn load_table_definition(path: &Path) -> Result<TableDefinition> {
    info!("reading table definition from '{}'...", path.display());

    let root = read_document(path, TABLE_ROOT_TAG, "")?;

    let mut runs = Vec::new();
    for test in root.find_all("test") {
        let Some(pattern) = test.attr("filename") else {
            warn!("Skipping a <test> without filename in {}", path.display());
            continue;
        };

        let columns = read_columns(path, test)?;
        for result_file in expand_pattern(pattern)? {
            runs.push(RunSelection {
                result_file,
                columns: columns.clone(),
            });
        }
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());

    Ok(TableDefinition { name, runs })
}

fn read_columns(path: &Path, test: &Element) -> Result<Option<Vec<Column>>> {
    let mut columns = Vec::new();
    for element in test.find_all("column") {
        let Some(title) = element.attr("title") else {
            warn!("Skipping a <column> without title in {}", path.display());
            continue;
        };

        let mut column = Column::new(title);
        let key = element.text.trim();
        if !key.is_empty() {
            column = column.with_log_key(key);
        }
        if let Some(raw) = element.attr("numberOfDigits") {
            let digits = raw.trim().parse::<usize>().map_err(|_| LoadError::InvalidPrecision {
                path: path.to_path_buf(),
                title: title.to_string(),
                value: raw.to_string(),
            })?;
            column = column.with_digits(digits);
        }
        columns.push(column);
    }

    Ok(if columns.is_empty() { None } else { Some(columns) })
}
