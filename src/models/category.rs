//! Correctness categories and the reported status they are derived from

use super::constants::score;

/// Status string reported by the verification tool, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedStatus {
    Safe,
    Unsafe,
    Unknown,
    /// Anything else: crashes, timeouts, exceptions, missing results
    Other,
}

impl ReportedStatus {
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "safe" => Self::Safe,
            "unsafe" => Self::Unsafe,
            "unknown" => Self::Unknown,
            _ => Self::Other,
        }
    }
}

/// Correctness bucket of one outcome against the file's ground truth.
///
/// `Error` scores like `Unknown` but is kept separate so the report can
/// distinguish "the tool gave up" from "the tool failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CorrectSafe,
    WrongSafe,
    CorrectUnsafe,
    WrongUnsafe,
    Unknown,
    Error,
}

impl Category {
    /// Fixed score contribution of this category
    pub fn score(self) -> i64 {
        match self {
            Self::CorrectSafe => score::CORRECT_SAFE,
            Self::CorrectUnsafe => score::CORRECT_UNSAFE,
            Self::WrongUnsafe => score::WRONG_UNSAFE,
            Self::WrongSafe => score::WRONG_SAFE,
            Self::Unknown | Self::Error => score::UNKNOWN,
        }
    }

    /// Name used as CSS class in the HTML table
    pub fn css_class(self) -> &'static str {
        match self {
            Self::CorrectSafe => "correctSafe",
            Self::WrongSafe => "wrongSafe",
            Self::CorrectUnsafe => "correctUnsafe",
            Self::WrongUnsafe => "wrongUnsafe",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::CorrectSafe | Self::CorrectUnsafe)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}
