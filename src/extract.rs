//! Column value extraction from structured fields and log files
//!
//! Log lines are expected to look like `<label>: <value> (<comment>)`.

use crate::fs::log_files::LazyLog;
use crate::models::constants::SENTINEL;
use crate::models::{Column, FileOutcome};

/// Resolve the values of all `columns` for one outcome.
///
/// The log file is read at most once, on the first column that needs it.
/// With `correct_only`, every value of an outcome whose score is not
/// positive is replaced by the sentinel (status and score excepted).
pub fn extract_values(
    outcome: &FileOutcome,
    columns: &[Column],
    score: i64,
    correct_only: bool,
) -> Vec<String> {
    let log = LazyLog::new(outcome.log_file.as_deref());

    columns
        .iter()
        .map(|column| {
            let value = resolve_value(column, outcome, &log, score, correct_only);
            match column.digits {
                Some(digits) => format_number(&value, digits),
                None => value,
            }
        })
        .collect()
}

fn resolve_value(
    column: &Column,
    outcome: &FileOutcome,
    log: &LazyLog<'_>,
    score: i64,
    correct_only: bool,
) -> String {
    if column.is_score() {
        return score.to_string();
    }
    if column.is_status() {
        return if outcome.status.is_empty() {
            SENTINEL.to_string()
        } else {
            outcome.status.clone()
        };
    }
    if correct_only && score <= 0 {
        return SENTINEL.to_string();
    }

    match &column.log_key {
        None => outcome
            .field(&column.title)
            .unwrap_or(SENTINEL)
            .to_string(),
        Some(key) => log
            .content()
            .and_then(|content| scan_log(content, key))
            .unwrap_or_else(|| SENTINEL.to_string()),
    }
}

/// Value of the first line containing `key`: the text after the first `:`
/// up to the first `(`, trimmed.
///
/// Both positions are taken on the whole line, so a `(` in front of the
/// `:` yields an empty value.
pub fn scan_log(content: &str, key: &str) -> Option<String> {
    let line = content.lines().find(|line| line.contains(key))?;

    let start = line.find(':').map_or(0, |i| i + 1);
    let end = line.find('(').unwrap_or(line.len());
    let value = line.get(start..end).unwrap_or_default();
    Some(value.trim().to_string())
}

/// Round or pad a numeric value to `digits` decimal places.
///
/// A single trailing non-digit character (a unit such as `s`) is kept;
/// values that are not numbers are returned unchanged.
pub fn format_number(value: &str, digits: usize) -> String {
    let (number, unit) = split_unit(value);
    match number.trim().parse::<f64>() {
        Ok(parsed) => format!("{parsed:.digits$}{unit}"),
        Err(_) => value.to_string(),
    }
}

fn split_unit(value: &str) -> (&str, &str) {
    let mut chars = value.char_indices().rev();
    match (chars.next(), chars.next()) {
        (Some((last_at, last)), Some((_, before)))
            if !last.is_ascii_digit() && before.is_ascii_digit() =>
        {
            value.split_at(last_at)
        }
        _ => (value, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LOG: &str = "\
CPAchecker general statistics
Number of refinements:            12
Total time for CPAchecker:        4.213s (Max: 5.0s)
Time for analysis:   3.9s
";

    #[test]
    fn test_scan_log_takes_value_before_parenthesis() {
        assert_eq!(
            scan_log(LOG, "Total time for CPAchecker"),
            Some("4.213s".to_string())
        );
        assert_eq!(scan_log(LOG, "refinements"), Some("12".to_string()));
        assert_eq!(scan_log(LOG, "Time for analysis"), Some("3.9s".to_string()));
    }

    #[test]
    fn test_scan_log_parenthesis_before_colon_gives_empty_value() {
        assert_eq!(
            scan_log("Time for analysis (cpu): 3.2s\n", "Time for analysis"),
            Some(String::new())
        );
        assert_eq!(
            scan_log("Time for analysis: 3.2s (cpu)\n", "Time for analysis"),
            Some("3.2s".to_string())
        );
    }

    #[test]
    fn test_scan_log_uses_first_matching_line() {
        let content = "time: 1\ntime: 2\n";
        assert_eq!(scan_log(content, "time"), Some("1".to_string()));
    }

    #[test]
    fn test_scan_log_without_match() {
        assert_eq!(scan_log(LOG, "Memory"), None);
        assert_eq!(scan_log("", "anything"), None);
    }

    #[test]
    fn test_format_number_pads_and_keeps_unit() {
        assert_eq!(format_number("12.3s", 2), "12.30s");
        assert_eq!(format_number("12.345", 1), "12.3");
        assert_eq!(format_number("7", 2), "7.00");
        assert_eq!(format_number("0.75", 0), "1");
    }

    #[test]
    fn test_format_number_is_idempotent() {
        let once = format_number("3.14159s", 3);
        assert_eq!(once, "3.142s");
        assert_eq!(format_number(&once, 3), once);
    }

    #[test]
    fn test_format_number_leaves_non_numbers_alone() {
        assert_eq!(format_number("-", 2), "-");
        assert_eq!(format_number("SAFE", 2), "SAFE");
        assert_eq!(format_number("12ms", 2), "12ms");
        assert_eq!(format_number("", 2), "");
    }

    #[test]
    fn test_structured_fields_and_sentinel() {
        let outcome = FileOutcome::new("a.c", "SAFE").with_field("cputime", "1.26s");
        let columns = vec![
            Column::new("status"),
            Column::new("cputime").with_digits(1),
            Column::new("memory"),
            Column::new("score"),
        ];
        let values = extract_values(&outcome, &columns, 2, false);
        assert_eq!(values, vec!["SAFE", "1.3s", "-", "2"]);
    }

    #[test]
    fn test_log_columns_read_from_log_file() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("a.c.log");
        fs::write(&log, LOG).unwrap();

        let outcome = FileOutcome::new("a.c", "unsafe").with_log_file(&log);
        let columns = vec![
            Column::new("refinements").with_log_key("Number of refinements"),
            Column::new("total").with_log_key("Total time").with_digits(1),
            Column::new("missing").with_log_key("not in the log"),
        ];
        let values = extract_values(&outcome, &columns, 1, false);
        assert_eq!(values, vec!["12", "4.2s", "-"]);
    }

    #[test]
    fn test_missing_log_file_yields_sentinel() {
        let dir = TempDir::new().unwrap();
        let outcome =
            FileOutcome::new("a.c", "safe").with_log_file(dir.path().join("absent.log"));
        let columns = vec![Column::new("time").with_log_key("Total time")];
        assert_eq!(extract_values(&outcome, &columns, 2, false), vec!["-"]);
    }

    #[test]
    fn test_placeholder_with_log_column_yields_sentinel() {
        let outcome = FileOutcome::placeholder("a.c");
        let columns = vec![
            Column::new("status"),
            Column::new("time").with_log_key("Total time").with_digits(2),
            Column::new("cputime"),
        ];
        assert_eq!(
            extract_values(&outcome, &columns, 0, false),
            vec!["-", "-", "-"]
        );
    }

    #[test]
    fn test_correct_only_clears_non_positive_scores() {
        let outcome = FileOutcome::new("bug.c", "SAFE").with_field("cputime", "3.0s");
        let columns = vec![
            Column::new("status"),
            Column::new("cputime"),
            Column::new("score"),
        ];

        assert_eq!(
            extract_values(&outcome, &columns, -4, true),
            vec!["SAFE", "-", "-4"]
        );
        assert_eq!(
            extract_values(&outcome, &columns, -4, false),
            vec!["SAFE", "3.0s", "-4"]
        );
        assert_eq!(
            extract_values(&outcome, &columns, 2, true),
            vec!["SAFE", "3.0s", "2"]
        );
    }
}
