//! HTML table body and footer

use std::path::Path;

use crate::models::{Column, Row, Test};
use crate::stats::{max_score, table_statistics, ColumnStats};
use crate::utils::{escape_html, quote_path, relative_path, strip_common_prefix};

fn link_target(path: &Path, output_dir: &Path) -> String {
    let target = if path.is_absolute() {
        path.to_path_buf()
    } else {
        relative_path(path, output_dir)
    };
    quote_path(&target.to_string_lossy())
}

/// Cells of one test; status cells link to the log file when there is one.
pub fn test_cells(test: &Test, columns: &[Column], output_dir: &Path) -> String {
    let category = test.category.css_class();

    columns
        .iter()
        .zip(&test.values)
        .map(|(column, value)| match (&test.log_file, column.is_status()) {
            (Some(log), true) => format!(
                "<td class=\"{category}\"><a href=\"{}\">{}</a></td>",
                quote_path(&relative_path(log, output_dir).to_string_lossy()),
                escape_html(&value.to_lowercase())
            ),
            _ => format!("<td class=\"{category}Value\">{}</td>", escape_html(value)),
        })
        .collect()
}

/// One table row: linked file name followed by the cells of every run
pub fn row_html(row: &Row, columns: &[&[Column]], common_prefix: &str, output_dir: &Path) -> String {
    let cells: String = row
        .tests
        .iter()
        .zip(columns)
        .map(|(test, columns)| test_cells(test, columns, output_dir))
        .collect();

    format!(
        "<tr><td><a href=\"{}\">{}</a></td>{cells}</tr>",
        link_target(Path::new(&row.filename), output_dir),
        escape_html(strip_common_prefix(&row.filename, common_prefix))
    )
}

pub fn body_html(rows: &[Row], columns: &[&[Column]], common_prefix: &str, output_dir: &Path) -> String {
    rows.iter()
        .map(|row| row_html(row, columns, common_prefix, output_dir))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Footer with totals, correct results, false negatives, false positives and score
pub fn foot_html(rows: &[Row], columns: &[&[Column]]) -> String {
    let mut lines = [
        vec!["<td>total files</td>".to_string()],
        vec![
            "<td title=\"(no bug exists + result is SAFE) OR (bug exists + result is UNSAFE)\">correct results</td>"
                .to_string(),
        ],
        vec!["<td title=\"bug exists + result is SAFE\">false negatives</td>".to_string()],
        vec!["<td title=\"no bug exists + result is UNSAFE\">false positives</td>".to_string()],
        vec![format!(
            "<td>score ({} files, max score: {})</td>",
            rows.len(),
            max_score(rows)
        )],
    ];

    for stats in table_statistics(rows, columns) {
        let counts = &stats.counts;
        for column in &stats.columns {
            let [total, correct, wrong_safe, wrong_unsafe, score] = &mut lines;
            match column {
                ColumnStats::Status => {
                    total.push(format!("<td>{}</td>", counts.total));
                    correct.push(format!("<td>{}</td>", counts.correct()));
                    wrong_safe.push(format!("<td>{}</td>", counts.wrong_safe));
                    wrong_unsafe.push(format!("<td>{}</td>", counts.wrong_unsafe));
                    score.push(format!("<td class=\"score\">{}</td>", counts.score()));
                }
                ColumnStats::Numeric(totals) => {
                    total.push(format!("<td>{}</td>", totals.sum));
                    correct.push(format!("<td>{}</td>", totals.correct));
                    wrong_safe.push(format!("<td>{}</td>", totals.wrong_safe));
                    wrong_unsafe.push(format!("<td>{}</td>", totals.wrong_unsafe));
                    score.push("<td class=\"score\"></td>".to_string());
                }
            }
        }
    }

    lines
        .iter()
        .map(|cells| format!("<tr>{}</tr>", cells.concat()))
        .collect::<Vec<_>>()
        .join("\n")
}
