//! Category and score assignment against a filename-derived ground truth

use crate::models::constants::BUG_MARKERS;
use crate::models::{Category, ReportedStatus};

/// Decides whether a source file contains a bug
pub trait GroundTruthOracle {
    fn is_bug_present(&self, filename: &str) -> bool;
}

impl<F> GroundTruthOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_bug_present(&self, filename: &str) -> bool {
        self(filename)
    }
}

/// Oracle that looks for marker substrings in the lower-cased file name
#[derive(Debug, Clone)]
pub struct SubstringOracle {
    markers: Vec<String>,
}

impl SubstringOracle {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.into().to_lowercase())
                .collect(),
        }
    }
}

impl Default for SubstringOracle {
    fn default() -> Self {
        Self::new(BUG_MARKERS.iter().copied())
    }
}

impl GroundTruthOracle for SubstringOracle {
    fn is_bug_present(&self, filename: &str) -> bool {
        let filename = filename.to_lowercase();
        self.markers.iter().any(|m| filename.contains(m.as_str()))
    }
}

/// Category of a reported status for a file with the given ground truth
pub fn classify(status: &str, bug_present: bool) -> Category {
    match (ReportedStatus::parse(status), bug_present) {
        (ReportedStatus::Safe, false) => Category::CorrectSafe,
        (ReportedStatus::Safe, true) => Category::WrongSafe,
        (ReportedStatus::Unsafe, false) => Category::WrongUnsafe,
        (ReportedStatus::Unsafe, true) => Category::CorrectUnsafe,
        (ReportedStatus::Unknown, _) => Category::Unknown,
        (ReportedStatus::Other, _) => Category::Error,
    }
}
