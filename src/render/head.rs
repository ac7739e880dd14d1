//! Table head: run descriptions above the column titles
//!
//! Each run spans as many table columns as it has columns selected. Head
//! lines describing the environment merge neighbouring runs with equal
//! values into a single wider cell.

use crate::models::constants::{CSV_SEPARATOR, SENTINEL};
use crate::models::RunRecord;
use crate::utils::escape_html;

/// Head of both outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHead {
    pub html: String,
    pub csv: String,
}

/// Merge consecutive equal values, adding up their widths.
///
/// Only neighbours are merged; the order of values is never changed.
pub fn collapse_equal_values(values: &[String], widths: &[usize]) -> Vec<(String, usize)> {
    debug_assert_eq!(values.len(), widths.len());

    let mut collapsed: Vec<(String, usize)> = Vec::new();
    for (value, &width) in values.iter().zip(widths) {
        match collapsed.last_mut() {
            Some((previous, total)) if previous == value => *total += width,
            _ => collapsed.push((value.clone(), width)),
        }
    }
    collapsed
}

fn html_row(
    name: &str,
    values: &[String],
    widths: &[usize],
    collapse: bool,
    id: Option<&str>,
) -> Option<String> {
    if values.iter().all(|v| v.is_empty()) {
        return None;
    }

    let id = id.map(str::to_string).unwrap_or_else(|| {
        name.split(' ')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    });

    let spans = if collapse {
        collapse_equal_values(values, widths)
    } else {
        values.iter().cloned().zip(widths.iter().copied()).collect()
    };

    let cells: String = spans
        .iter()
        .filter(|(_, width)| *width > 0)
        .map(|(value, width)| format!("<td colspan=\"{width}\">{value}</td>"))
        .collect();

    Some(format!(
        "<tr id=\"{}\"><td>{}</td>{cells}</tr>",
        escape_html(&id),
        escape_html(name)
    ))
}

fn csv_row(name: &str, values: &[String], widths: &[usize]) -> String {
    let mut cells = vec![name.to_string()];
    for (value, &width) in values.iter().zip(widths) {
        cells.extend(std::iter::repeat(value.clone()).take(width));
    }
    cells.join(CSV_SEPARATOR)
}

fn or_sentinel(value: Option<&str>) -> &str {
    value.unwrap_or(SENTINEL)
}

/// Build the head of both outputs.
///
/// `common_prefix` heads the file name column.
pub fn table_head(runs: &[RunRecord], common_prefix: &str) -> TableHead {
    let widths: Vec<usize> = runs.iter().map(|r| r.columns.len()).collect();
    let line = |format: fn(&RunRecord) -> String| -> Vec<String> { runs.iter().map(format).collect() };

    let tools = line(|r| format!("{} {}", r.attributes.tool, r.attributes.version));
    let limits = line(|r| {
        format!(
            "timelimit: {}, memlimit: {}",
            or_sentinel(r.attributes.timelimit.as_deref()),
            or_sentinel(r.attributes.memlimit.as_deref())
        )
    });
    let hosts = line(|r| r.attributes.system.host.clone());
    let systems_os = line(|r| r.attributes.system.os.clone());
    let systems = line(|r| {
        let s = &r.attributes.system;
        format!(
            "CPU: {} with {} cores, frequency: {}; RAM: {}",
            s.cpu, s.cores, s.freq, s.ram
        )
    });
    let dates = line(|r| r.attributes.date.clone());
    let names = line(|r| r.attributes.name.clone());
    let branches = line(|r| r.attributes.branch.clone());
    let options = line(|r| r.attributes.options.clone());

    let escaped = |values: &[String]| -> Vec<String> { values.iter().map(|v| escape_html(v)).collect() };
    let options_html: Vec<String> = escaped(&options)
        .iter()
        .map(|o| o.replace(" -", "<br/>-").replace('=', "=<wbr/>"))
        .collect();

    let titles: Vec<String> = runs
        .iter()
        .flat_map(|r| r.columns.iter().map(|c| c.title.clone()))
        .collect();
    let title_widths = vec![1; titles.len()];

    let html_lines = [
        html_row("Tool", &escaped(&tools), &widths, true, None),
        html_row("Limits", &escaped(&limits), &widths, true, None),
        html_row("Host", &escaped(&hosts), &widths, true, None),
        html_row("OS", &escaped(&systems_os), &widths, true, None),
        html_row("System", &escaped(&systems), &widths, true, None),
        html_row("Date of run", &escaped(&dates), &widths, true, None),
        html_row("Test", &escaped(&names), &widths, false, None),
        html_row("Branch", &escaped(&branches), &widths, false, None),
        html_row("Options", &options_html, &widths, false, None),
        html_row(
            common_prefix,
            &escaped(&titles),
            &title_widths,
            false,
            Some("columnTitles"),
        ),
    ];

    let csv_lines = [
        csv_row("tool", &tools, &widths),
        csv_row("test", &names, &widths),
        csv_row(common_prefix, &titles, &title_widths),
    ];

    TableHead {
        html: html_lines.into_iter().flatten().collect::<Vec<_>>().join("\n"),
        csv: csv_lines.join("\n"),
    }
}
