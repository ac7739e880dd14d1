//! Result documents and directories for end-to-end tests

use benchtable::config::{InputSelection, ReportConfig};
use benchtable::reconcile::ReconcilePolicy;
use benchtable::render::RenderConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub const BENCHMARK: &str = "loops";
pub const DATE: &str = "12-03-04_1200";

/// One `<sourcefile>`: name, status and cputime
pub type Outcome<'a> = (&'a str, &'a str, &'a str);

/// Build a result document for run `name`
pub fn result_doc(name: &str, host: &str, outcomes: &[Outcome<'_>]) -> String {
    let sourcefiles: String = outcomes
        .iter()
        .map(|(file, status, cputime)| {
            format!(
                r#"  <sourcefile name="{file}">
    <column title="status" value="{status}"/>
    <column title="cputime" value="{cputime}"/>
  </sourcefile>
"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0"?>
<test benchmarkname="{BENCHMARK}" date="{DATE}" tool="CPAchecker" version="1.1" name="{name}" timelimit="900s" memlimit="15000MB" options="-heap 2000M -setprop cpa=predicate">
  <systeminfo hostname="{host}">
    <os name="Linux"/>
    <cpu model="Xeon" cores="8" frequency="2400MHz"/>
    <ram size="16GB"/>
  </systeminfo>
{sourcefiles}</test>
"#
    )
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Write a log file where the run `name` of the fixture benchmark expects it
pub fn write_log(dir: &Path, name: &str, source_file: &str, content: &str) -> PathBuf {
    let base = Path::new(source_file)
        .file_name()
        .expect("source file has a name")
        .to_string_lossy()
        .into_owned();
    write_file(
        dir,
        &format!("{BENCHMARK}.{DATE}.logfiles/{name}.{base}.log"),
        content,
    )
}

/// Report over explicit result files, written to `output_dir`
pub fn report_config(inputs: InputSelection, output_dir: &Path) -> ReportConfig {
    ReportConfig {
        inputs,
        output_dir: output_dir.to_path_buf(),
        policy: ReconcilePolicy::StrictEqual,
        correct_only: false,
        dump_counts: false,
        name: Some("report".to_string()),
        render: RenderConfig::offline(),
    }
}

pub fn result_files(paths: &[&Path]) -> InputSelection {
    InputSelection::ResultFiles(
        paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect(),
    )
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
