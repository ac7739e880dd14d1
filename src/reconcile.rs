//! Reconciliation of the file lists of several runs into one canonical list
//!
//! After reconciliation every run has exactly one outcome per canonical file
//! name, in canonical order; files a run has no result for are represented by
//! placeholder outcomes.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::models::{FileOutcome, RunRecord};

/// How divergent file lists of different runs are unified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcilePolicy {
    /// All runs must have the same files in the same order as the first run;
    /// runs that differ are dropped
    #[default]
    #[serde(rename = "equal")]
    StrictEqual,
    /// Union of all file lists, in first-seen order
    Merge,
    /// Intersection of all file lists, in the order of the first run
    Common,
}

impl std::fmt::Display for ReconcilePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrictEqual => write!(f, "equal"),
            Self::Merge => write!(f, "merge"),
            Self::Common => write!(f, "common"),
        }
    }
}

/// Runs aligned to a canonical file list
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub filenames: Vec<String>,
    pub runs: Vec<RunRecord>,
}

/// Unify the file lists of all runs according to `policy`
pub fn reconcile(runs: Vec<RunRecord>, policy: ReconcilePolicy) -> Reconciled {
    info!("merging files ...");

    let mut runs: Vec<RunRecord> = runs.into_iter().map(remove_duplicates).collect();
    if runs.is_empty() {
        return Reconciled {
            filenames: Vec::new(),
            runs,
        };
    }

    let filenames = match policy {
        ReconcilePolicy::StrictEqual => {
            let (filenames, kept) = ensure_equal_files(runs);
            runs = kept;
            filenames
        }
        ReconcilePolicy::Merge => merge_filenames(&runs),
        ReconcilePolicy::Common => {
            let filenames = common_filenames(&runs);
            if filenames.is_empty() {
                warn!("No files are present in all benchmark results.");
            }
            filenames
        }
    };

    for run in &mut runs {
        align(run, &filenames);
    }

    Reconciled { filenames, runs }
}

/// Drop later occurrences of a file name within one run
pub fn remove_duplicates(mut run: RunRecord) -> RunRecord {
    let mut seen = HashSet::new();
    let source = run.source.display().to_string();
    run.outcomes.retain(|outcome| {
        let first = seen.insert(outcome.filename.clone());
        if !first {
            warn!(
                "File {} is present twice in {}, skipping it.",
                outcome.filename, source
            );
        }
        first
    });
    run
}

/// Union of all file lists.
///
/// Each run's files are inserted right after the run's previous file when new,
/// so `[A, C]` merged with `[A, B]` yields `[A, B, C]`.
pub fn merge_filenames(runs: &[RunRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut known: HashSet<String> = HashSet::new();

    for run in runs {
        let mut previous: Option<usize> = None;
        for name in run.filenames() {
            if known.insert(name.to_string()) {
                let position = previous.map_or(0, |i| i + 1);
                names.insert(position, name.to_string());
                previous = Some(position);
            } else {
                previous = names.iter().position(|n| n == name);
            }
        }
    }

    names
}

/// Files present in every run, in the order of the first run
pub fn common_filenames(runs: &[RunRecord]) -> Vec<String> {
    let Some(first) = runs.first() else {
        return Vec::new();
    };

    let mut common: HashSet<&str> = first.filenames().into_iter().collect();
    for run in &runs[1..] {
        let names: HashSet<&str> = run.filenames().into_iter().collect();
        common.retain(|name| names.contains(name));
    }

    first
        .filenames()
        .into_iter()
        .filter(|name| common.contains(name))
        .map(str::to_string)
        .collect()
}

/// Keep only runs whose file list equals the first run's list
fn ensure_equal_files(runs: Vec<RunRecord>) -> (Vec<String>, Vec<RunRecord>) {
    let filenames: Vec<String> = runs[0]
        .filenames()
        .into_iter()
        .map(str::to_string)
        .collect();

    let kept = runs
        .into_iter()
        .filter(|run| {
            let equal = run.filenames() == filenames;
            if !equal {
                warn!(
                    "    {} contains different files, skipping resultfile",
                    run.source.display()
                );
            }
            equal
        })
        .collect();

    (filenames, kept)
}

/// Rewrite the outcomes of `run` to match `filenames` one to one
pub fn align(run: &mut RunRecord, filenames: &[String]) {
    let mut by_name: HashMap<String, FileOutcome> = std::mem::take(&mut run.outcomes)
        .into_iter()
        .map(|outcome| (outcome.filename.clone(), outcome))
        .collect();

    run.outcomes = filenames
        .iter()
        .map(|name| {
            by_name.remove(name).unwrap_or_else(|| {
                debug!("    no result for {} in {}", name, run.source.display());
                FileOutcome::placeholder(name.as_str())
            })
        })
        .collect();
}
