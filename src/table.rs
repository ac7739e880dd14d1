//! Assembly of classified rows from reconciled runs

use tracing::debug;

use crate::classify::{classify, GroundTruthOracle};
use crate::extract::extract_values;
use crate::models::{Row, RunRecord, Test};

/// Classify every outcome of every run and arrange the results by file.
///
/// `runs` must be aligned to `filenames` (see [`crate::reconcile`]); each
/// returned row holds one test per run, in run order.
pub fn build_rows(
    runs: &[RunRecord],
    filenames: &[String],
    oracle: &dyn GroundTruthOracle,
    correct_only: bool,
) -> Vec<Row> {
    let mut rows: Vec<Row> = filenames
        .iter()
        .map(|name| Row::new(name.as_str(), oracle.is_bug_present(name)))
        .collect();

    for run in runs {
        debug_assert_eq!(run.outcomes.len(), rows.len());
        for (outcome, row) in run.outcomes.iter().zip(rows.iter_mut()) {
            let category = classify(&outcome.status, row.bug_present);
            let score = category.score();
            let values = extract_values(outcome, &run.columns, score, correct_only);

            row.tests.push(Test {
                status: outcome.status.clone(),
                category,
                score,
                values,
                log_file: outcome.log_file.clone(),
            });
        }
        debug!(
            "classified {} files of {}",
            run.outcomes.len(),
            run.source.display()
        );
    }

    rows
}
