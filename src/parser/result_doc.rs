//! Run-result document loader
//!
//! A result document looks like
//!
//! ```xml
//! <test benchmarkname="..." date="..." tool="..." version="..." [name="..."]>
//!   <systeminfo hostname="...">
//!     <os name="..."/> <cpu model="..." cores="..." frequency="..."/> <ram size="..."/>
//!   </systeminfo>
//!   <sourcefile name="...">
//!     <column title="status" value="SAFE"/>
//!     ...
//!   </sourcefile>
//! </test>
//! ```

use anyhow::Result;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::xml::Element;
use super::{read_document, LoadError};
use crate::models::constants::{LOG_SUFFIX, RESULT_ROOT_TAG};
use crate::models::{Column, FileOutcome, RunAttributes, RunRecord, SystemInfo};

const WRONG_ROOT_HINT: &str =
    " If you want to use a table-definition file, pass it with the option '-x' or '--xml'.";

/// Load one result document.
///
/// `columns` are the columns selected by a table definition; without them
/// every structured field of the first source file becomes a column.
pub fn load_run(path: &Path, columns: Option<&[Column]>) -> Result<RunRecord> {
    info!("    {}", path.display());

    let root = read_document(path, RESULT_ROOT_TAG, WRONG_ROOT_HINT)?;
    let attributes = read_attributes(path, &root)?;

    let mut outcomes = Vec::new();
    for sourcefile in root.find_all("sourcefile") {
        let Some(filename) = sourcefile.attr("name") else {
            warn!(
                "Skipping a <sourcefile> without name in {}",
                path.display()
            );
            continue;
        };

        let mut outcome = FileOutcome::new(filename, "unknown")
            .with_log_file(log_file_path(path, &attributes, filename));
        for column in sourcefile.find_all("column") {
            if let (Some(title), Some(value)) = (column.attr("title"), column.attr("value")) {
                outcome = outcome.with_field(title, value);
            }
        }
        if let Some(status) = outcome.field("status") {
            outcome.status = status.to_string();
        }
        outcomes.push(outcome);
    }

    let columns = match columns {
        Some(selected) if !selected.is_empty() => selected.to_vec(),
        _ => discover_columns(&root),
    };

    let mut run = RunRecord::new(path, attributes);
    run.outcomes = outcomes;
    run.columns = columns;
    Ok(run)
}

/// Columns of the first source file, in document order
fn discover_columns(root: &Element) -> Vec<Column> {
    root.find("sourcefile")
        .map(|file| {
            file.find_all("column")
                .filter_map(|c| c.attr("title"))
                .map(Column::new)
                .collect()
        })
        .unwrap_or_default()
}

fn read_attributes(path: &Path, root: &Element) -> Result<RunAttributes> {
    let required = |attribute: &'static str| -> Result<String> {
        root.attr(attribute)
            .map(str::to_string)
            .ok_or_else(|| {
                LoadError::MissingAttribute {
                    path: path.to_path_buf(),
                    attribute,
                }
                .into()
            })
    };
    let optional = |attribute: &str| root.attr(attribute).unwrap_or_default().to_string();

    let benchmark_name = required("benchmarkname")?;
    let date = required("date")?;

    let passthrough: IndexMap<String, String> = root.attributes.iter().cloned().collect();

    let mut system = read_system_info(root.find("systeminfo"));
    let mut branch = branch_of(path);
    // root attributes win over values derived from systeminfo and the file name
    for (key, value) in &passthrough {
        let field = match key.as_str() {
            "host" => &mut system.host,
            "os" => &mut system.os,
            "cpu" => &mut system.cpu,
            "cores" => &mut system.cores,
            "freq" => &mut system.freq,
            "ram" => &mut system.ram,
            "branch" => &mut branch,
            _ => continue,
        };
        *field = value.clone();
    }

    Ok(RunAttributes {
        name: root
            .attr("name")
            .map(str::to_string)
            .unwrap_or_else(|| benchmark_name.clone()),
        benchmark_name,
        date,
        tool: optional("tool"),
        version: optional("version"),
        timelimit: root.attr("timelimit").map(str::to_string),
        memlimit: root.attr("memlimit").map(str::to_string),
        options: optional("options"),
        branch,
        system,
        passthrough,
    })
}

fn read_system_info(system: Option<&Element>) -> SystemInfo {
    let Some(system) = system else {
        return SystemInfo {
            host: "unknown".to_string(),
            ..SystemInfo::default()
        };
    };

    let child_attr = |child: &str, attr: &str| {
        system
            .find(child)
            .and_then(|c| c.attr(attr))
            .unwrap_or_default()
            .to_string()
    };

    SystemInfo {
        host: system.attr("hostname").unwrap_or("unknown").to_string(),
        os: child_attr("os", "name"),
        cpu: child_attr("cpu", "model"),
        cores: child_attr("cpu", "cores"),
        freq: child_attr("cpu", "frequency"),
        ram: child_attr("ram", "size"),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Branch prefix of a result file name (`<branch>#<rest>`), empty if absent
fn branch_of(path: &Path) -> String {
    file_name_of(path)
        .split_once('#')
        .map(|(branch, _)| branch.to_string())
        .unwrap_or_default()
}

/// Location of the log file written for `source_file` during the run
/// described by the result document at `result_file`.
///
/// Layout: `[<branch>#]<benchmarkname>.<date>.logfiles/[<name>.]<basename>.log`,
/// relative to the directory of the result document.
pub fn log_file_path(result_file: &Path, attributes: &RunAttributes, source_file: &str) -> PathBuf {
    let mut folder = format!(
        "{}.{}.logfiles",
        attributes.benchmark_name, attributes.date
    );
    if let Some((branch, _)) = file_name_of(result_file).split_once('#') {
        folder = format!("{branch}#{folder}");
    }

    let mut log_name = String::new();
    if let Some(run_name) = attributes.passthrough.get("name") {
        log_name.push_str(run_name);
        log_name.push('.');
    }
    log_name.push_str(&file_name_of(Path::new(source_file)));
    log_name.push_str(LOG_SUFFIX);

    result_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(folder)
        .join(log_name)
}
