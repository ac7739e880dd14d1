//! Table generation command
//!
//! Loads the selected result documents, reconciles their file lists,
//! classifies every outcome and writes the full table plus the table of
//! rows whose status differs between runs.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use crate::classify::SubstringOracle;
use crate::config::{ConfigError, InputSelection, ReportConfig};
use crate::diff::{find_differences, DiffOutcome};
use crate::fs::file_list::{expand_pattern, expand_patterns};
use crate::models::constants::{DEFAULT_RESULT_PATTERN, NAME_START};
use crate::models::{Column, Row};
use crate::parser::result_doc::load_run;
use crate::parser::table_def::load_table_definition;
use crate::reconcile::reconcile;
use crate::render::{write_tables, TableSet};
use crate::stats::{dump_counts, RunCounts};
use crate::table::build_rows;

/// What a generation produced
#[derive(Debug)]
pub struct GenerateOutcome {
    pub name: String,
    pub filenames: Vec<String>,
    pub rows: Vec<Row>,
    pub diff: DiffOutcome,
    pub counts: Vec<RunCounts>,
    /// Paths of all written tables
    pub written: Vec<PathBuf>,
}

struct Selection {
    files: Vec<(PathBuf, Option<Vec<Column>>)>,
    name: Option<String>,
    hint: String,
}

fn select_inputs(config: &ReportConfig) -> Result<Selection> {
    let selection = match &config.inputs {
        InputSelection::TableDefinition(path) => {
            let definition = load_table_definition(path)?;
            Selection {
                files: definition
                    .runs
                    .into_iter()
                    .map(|run| (run.result_file, run.columns))
                    .collect(),
                name: Some(definition.name),
                hint: "Please check the filenames in your XML-file.".to_string(),
            }
        }
        InputSelection::ResultFiles(patterns) => Selection {
            files: expand_patterns(patterns)?
                .into_iter()
                .map(|path| (path, None))
                .collect(),
            name: None,
            hint: format!("Please check the given files: {}", patterns.join(" ")),
        },
        InputSelection::SearchOutputDir => {
            info!("searching resultfiles in '{}'...", config.output_dir.display());
            let pattern = config.output_dir.join(DEFAULT_RESULT_PATTERN);
            let pattern = pattern.to_string_lossy();
            Selection {
                files: expand_pattern(&pattern)?
                    .into_iter()
                    .map(|path| (path, None))
                    .collect(),
                name: None,
                hint: format!("No file matches '{pattern}'."),
            }
        }
    };
    Ok(selection)
}

fn default_name() -> String {
    format!("{NAME_START}.{}", Local::now().format("%y%m%d-%H%M"))
}

/// Execute the generate command
pub fn execute(config: &ReportConfig) -> Result<GenerateOutcome> {
    let selection = select_inputs(config)?;
    if selection.files.is_empty() {
        return Err(ConfigError::NoResultFiles {
            hint: selection.hint,
        }
        .into());
    }

    let name = config
        .name
        .clone()
        .or(selection.name)
        .unwrap_or_else(default_name);

    info!("reading {} result files ...", selection.files.len());
    let runs = selection
        .files
        .iter()
        .map(|(path, columns)| load_run(path, columns.as_deref()))
        .collect::<Result<Vec<_>>>()?;

    let reconciled = reconcile(runs, config.policy);
    let rows = build_rows(
        &reconciled.runs,
        &reconciled.filenames,
        &SubstringOracle::default(),
        config.correct_only,
    );
    let diff = find_differences(&rows);

    info!("generating table ...");
    let written = write_tables(
        &TableSet {
            name: &name,
            runs: &reconciled.runs,
            filenames: &reconciled.filenames,
            rows: &rows,
            diff_rows: diff.rows(),
        },
        &config.output_dir,
        &config.render,
    )?;
    info!("done");

    let counts = dump_counts(&rows, reconciled.runs.len());

    Ok(GenerateOutcome {
        name,
        filenames: reconciled.filenames,
        rows,
        diff,
        counts,
        written,
    })
}

/// Print the summary of a finished generation; with `dump_counts`, the
/// per-run counts follow a `STATS` line.
pub fn print_outcome(outcome: &GenerateOutcome, dump_counts: bool) {
    println!(
        "{} Table '{}' with {} files and {} runs",
        "✓".green().bold(),
        outcome.name,
        outcome.filenames.len(),
        outcome.counts.len()
    );
    for path in &outcome.written {
        println!("  {} {}", "→".cyan(), path.display());
    }

    if dump_counts {
        println!("STATS");
        for counts in &outcome.counts {
            println!("{counts}");
        }
    }
}
