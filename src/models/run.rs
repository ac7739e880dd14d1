//! One verification run as loaded from its result document

use indexmap::IndexMap;
use std::path::PathBuf;

/// Display descriptor of one table column.
///
/// The value itself is not stored here; it is resolved per outcome by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Display name, also the structured field looked up when `log_key` is `None`
    pub title: String,
    /// Text identifying the line of the log file that holds the value
    pub log_key: Option<String>,
    /// Number of decimal digits for numeric values
    pub digits: Option<usize>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            log_key: None,
            digits: None,
        }
    }

    pub fn with_log_key(mut self, key: impl Into<String>) -> Self {
        self.log_key = Some(key.into());
        self
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    pub fn is_status(&self) -> bool {
        self.title.eq_ignore_ascii_case("status")
    }

    pub fn is_score(&self) -> bool {
        self.title.eq_ignore_ascii_case("score")
    }
}

/// Description of the machine a run was executed on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    pub host: String,
    pub os: String,
    pub cpu: String,
    pub cores: String,
    pub freq: String,
    pub ram: String,
}

/// Run-level attributes shown in the table head
#[derive(Debug, Clone, Default)]
pub struct RunAttributes {
    /// Run name, falling back to the benchmark name
    pub name: String,
    pub benchmark_name: String,
    pub date: String,
    pub tool: String,
    pub version: String,
    pub timelimit: Option<String>,
    pub memlimit: Option<String>,
    pub options: String,
    /// Part of the result file name before `#`, empty if there is none
    pub branch: String,
    pub system: SystemInfo,
    /// All attributes of the document root, in document order
    pub passthrough: IndexMap<String, String>,
}

/// Result of one run for one source file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub filename: String,
    /// Reported status, free text; empty for placeholders
    pub status: String,
    /// Structured fields by title, in document order
    pub fields: IndexMap<String, String>,
    /// Location of the log file, resolved against the result document's directory
    pub log_file: Option<PathBuf>,
    has_result: bool,
}

impl FileOutcome {
    pub fn new(filename: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: status.into(),
            fields: IndexMap::new(),
            log_file: None,
            has_result: true,
        }
    }

    /// Stand-in for a file the run has no result for
    pub fn placeholder(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: String::new(),
            fields: IndexMap::new(),
            log_file: None,
            has_result: false,
        }
    }

    pub fn with_field(mut self, title: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.entry(title.into()).or_insert(value.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn field(&self, title: &str) -> Option<&str> {
        self.fields.get(title).map(String::as_str)
    }

    pub fn is_placeholder(&self) -> bool {
        !self.has_result
    }
}

/// One verification run
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Path of the result document this run was loaded from
    pub source: PathBuf,
    pub attributes: RunAttributes,
    pub outcomes: Vec<FileOutcome>,
    pub columns: Vec<Column>,
}

impl RunRecord {
    pub fn new(source: impl Into<PathBuf>, attributes: RunAttributes) -> Self {
        Self {
            source: source.into(),
            attributes,
            outcomes: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.filename.as_str()).collect()
    }
}
