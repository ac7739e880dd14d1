/// Placeholder shown when a value cannot be resolved.
pub const SENTINEL: &str = "-";

/// Field separator of the flat data export.
pub const CSV_SEPARATOR: &str = "\t";

/// First part of the generated table name when no definition file is used.
pub const NAME_START: &str = "results";

/// Pattern used to find result documents inside the output directory
/// when neither explicit files nor a table definition are given.
pub const DEFAULT_RESULT_PATTERN: &str = "*.results*.xml";

/// Default output directory for generated tables.
pub const DEFAULT_OUTPUT_DIR: &str = "test/results";

/// Substrings (lower case) in a file name that mark the file as containing a bug.
pub const BUG_MARKERS: &[&str] = &["bad", "bug", "unsafe"];

/// Root tag of a run-result document.
pub const RESULT_ROOT_TAG: &str = "test";

/// Root tag of a table-definition document.
pub const TABLE_ROOT_TAG: &str = "table";

/// Suffix appended to a source file's base name to form its log file name.
pub const LOG_SUFFIX: &str = ".log";

/// Score values, fixed by the SV-COMP scoring scheme.
pub mod score {
    pub const CORRECT_SAFE: i64 = 2;
    pub const CORRECT_UNSAFE: i64 = 1;
    pub const UNKNOWN: i64 = 0;
    pub const WRONG_UNSAFE: i64 = -2;
    pub const WRONG_SAFE: i64 = -4;
}

/// Base URLs for the JavaScript and CSS assets referenced by the HTML table.
pub mod assets {
    /// Hosted asset location.
    pub const LIB_URL: &str = "http://www.sosy-lab.org/lib";

    /// Local asset location used with `--offline`.
    pub const LIB_URL_OFFLINE: &str = "lib/javascript";
}
