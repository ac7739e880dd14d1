//! Full generation runs over result documents on disk

use super::fixtures::*;
use benchtable::commands::generate::execute;
use benchtable::config::InputSelection;
use benchtable::diff::DiffOutcome;
use benchtable::models::Category;
use benchtable::reconcile::ReconcilePolicy;
use tempfile::TempDir;

fn two_runs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let first = write_file(
        dir.path(),
        "loops.first.results.xml",
        &result_doc(
            "first",
            "node1",
            &[
                ("programs/a_safe.c", "safe", "1.0s"),
                ("programs/b_bug.c", "unsafe", "2.5s"),
            ],
        ),
    );
    let second = write_file(
        dir.path(),
        "loops.second.results.xml",
        &result_doc(
            "second",
            "node2",
            &[
                ("programs/a_safe.c", "unknown", "900.0s"),
                ("programs/b_bug.c", "unsafe", "3.0s"),
            ],
        ),
    );
    (first, second)
}

#[test]
fn test_two_runs_classified_and_compared() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let (first, second) = two_runs(&dir);

    let config = report_config(result_files(&[&first, &second]), &out);
    let outcome = execute(&config).unwrap();

    assert_eq!(outcome.filenames, vec!["programs/a_safe.c", "programs/b_bug.c"]);

    let categories: Vec<Vec<Category>> = outcome
        .rows
        .iter()
        .map(|row| row.tests.iter().map(|t| t.category).collect())
        .collect();
    assert_eq!(
        categories,
        vec![
            vec![Category::CorrectSafe, Category::Unknown],
            vec![Category::CorrectUnsafe, Category::CorrectUnsafe],
        ]
    );
    let scores: Vec<Vec<i64>> = outcome
        .rows
        .iter()
        .map(|row| row.tests.iter().map(|t| t.score).collect())
        .collect();
    assert_eq!(scores, vec![vec![2, 0], vec![1, 1]]);

    match &outcome.diff {
        DiffOutcome::Differences(rows) => {
            let names: Vec<_> = rows.iter().map(|r| r.filename.as_str()).collect();
            assert_eq!(names, vec!["programs/a_safe.c"]);
        }
        other => panic!("expected differing rows, got {other:?}"),
    }

    let counts: Vec<String> = outcome.counts.iter().map(|c| c.to_string()).collect();
    assert_eq!(counts, vec!["2 0 0", "1 0 1"]);

    assert_eq!(
        outcome.written,
        vec![
            out.join("report.table.html"),
            out.join("report.table.csv"),
            out.join("report.diff.html"),
            out.join("report.diff.csv"),
        ]
    );
}

#[test]
fn test_written_tables_contain_head_body_and_footer() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let (first, second) = two_runs(&dir);

    execute(&report_config(result_files(&[&first, &second]), &out)).unwrap();

    let csv = read(&out.join("report.table.csv"));
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "tool\tCPAchecker 1.1\tCPAchecker 1.1\tCPAchecker 1.1\tCPAchecker 1.1",
            "test\tfirst\tfirst\tsecond\tsecond",
            "programs/\tstatus\tcputime\tstatus\tcputime",
            "a_safe.c\tsafe\t1.0s\tunknown\t900.0s",
            "b_bug.c\tunsafe\t2.5s\tunsafe\t3.0s",
        ]
    );

    let html = read(&out.join("report.table.html"));
    assert!(html.contains("<title>report</title>"));
    assert!(html.contains(
        "<tr id=\"tool\"><td>Tool</td><td colspan=\"4\">CPAchecker 1.1</td></tr>"
    ));
    assert!(html.contains(
        "<tr id=\"host\"><td>Host</td><td colspan=\"2\">node1</td><td colspan=\"2\">node2</td></tr>"
    ));
    assert!(html.contains("-heap 2000M<br/>-setprop cpa=<wbr/>predicate"));
    assert!(html.contains("<a href=\"../loops.12-03-04_1200.logfiles/first.a_safe.c.log\">safe</a>"));
    assert!(html.contains("<td class=\"unknownValue\">900.0s</td>"));
    assert!(html.contains("<td>score (2 files, max score: 3)</td>"));
    assert!(html.contains("<td>total files</td><td>2</td><td>3.5</td><td>2</td><td>903.0</td>"));

    let diff = read(&out.join("report.diff.csv"));
    let rows: Vec<_> = diff.lines().skip(3).collect();
    assert_eq!(rows, vec!["a_safe.c\tsafe\t1.0s\tunknown\t900.0s"]);
    assert!(read(&out.join("report.diff.html")).contains("<title>report differences</title>"));
}

#[test]
fn test_merge_policy_fills_missing_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let first = write_file(
        dir.path(),
        "first.results.xml",
        &result_doc(
            "first",
            "node1",
            &[("p/a_safe.c", "safe", "1s"), ("p/c_safe.c", "safe", "2s")],
        ),
    );
    let second = write_file(
        dir.path(),
        "second.results.xml",
        &result_doc(
            "second",
            "node1",
            &[("p/a_safe.c", "safe", "1s"), ("p/b_bug.c", "unsafe", "4s")],
        ),
    );

    let mut config = report_config(result_files(&[&first, &second]), &out);
    config.policy = ReconcilePolicy::Merge;
    let outcome = execute(&config).unwrap();

    assert_eq!(outcome.filenames, vec!["p/a_safe.c", "p/b_bug.c", "p/c_safe.c"]);
    let missing = &outcome.rows[1].tests[0];
    assert_eq!(missing.category, Category::Error);
    assert_eq!(missing.values, vec!["-", "-"]);

    let csv = read(&out.join("report.table.csv"));
    assert!(csv.lines().any(|l| l == "b_bug.c\t-\t-\tunsafe\t4s"));
    assert!(csv.lines().any(|l| l == "c_safe.c\tsafe\t2s\t-\t-"));
}

#[test]
fn test_common_and_strict_policies() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let first = write_file(
        dir.path(),
        "first.results.xml",
        &result_doc(
            "first",
            "node1",
            &[("p/a_safe.c", "safe", "1s"), ("p/c_safe.c", "safe", "2s")],
        ),
    );
    let second = write_file(
        dir.path(),
        "second.results.xml",
        &result_doc(
            "second",
            "node1",
            &[("p/a_safe.c", "safe", "1s"), ("p/b_bug.c", "unsafe", "4s")],
        ),
    );

    let mut config = report_config(result_files(&[&first, &second]), &out);
    config.policy = ReconcilePolicy::Common;
    let common = execute(&config).unwrap();
    assert_eq!(common.filenames, vec!["p/a_safe.c"]);
    assert_eq!(common.counts.len(), 2);

    config.policy = ReconcilePolicy::StrictEqual;
    let strict = execute(&config).unwrap();
    assert_eq!(strict.filenames, vec!["p/a_safe.c", "p/c_safe.c"]);
    assert_eq!(strict.counts.len(), 1, "the differing run is dropped");
}

#[test]
fn test_correct_only_clears_values_of_unsuccessful_results() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let (first, second) = two_runs(&dir);

    let mut config = report_config(result_files(&[&first, &second]), &out);
    config.correct_only = true;
    let outcome = execute(&config).unwrap();

    assert_eq!(outcome.rows[0].tests[1].values, vec!["unknown", "-"]);
    assert_eq!(outcome.rows[0].tests[0].values, vec!["safe", "1.0s"]);
}

#[test]
fn test_table_definition_selects_columns_and_scans_logs() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    two_runs(&dir);
    write_log(
        dir.path(),
        "first",
        "programs/a_safe.c",
        "Analysis started\nNumber of refinements:  12 (of 20)\n",
    );

    let definition = write_file(
        dir.path(),
        "compare.xml",
        &format!(
            r#"<table>
  <test filename="{}/loops.first.results.xml">
    <column title="status"/>
    <column title="cputime" numberOfDigits="2"/>
    <column title="refinements">Number of refinements</column>
  </test>
</table>"#,
            dir.path().display()
        ),
    );

    let mut config = report_config(InputSelection::TableDefinition(definition), &out);
    config.name = None;
    let outcome = execute(&config).unwrap();

    assert_eq!(outcome.name, "compare");
    assert_eq!(outcome.rows[0].tests[0].values, vec!["safe", "1.00s", "12"]);
    assert_eq!(outcome.rows[1].tests[0].values, vec!["unsafe", "2.50s", "-"]);
    assert!(out.join("compare.table.html").is_file());
    assert!(matches!(outcome.diff, DiffOutcome::NoDifference));
    assert!(!out.join("compare.diff.html").exists());
}

#[test]
fn test_result_files_found_in_output_directory() {
    let dir = TempDir::new().unwrap();
    two_runs(&dir);

    let mut config = report_config(InputSelection::SearchOutputDir, dir.path());
    config.name = None;
    let outcome = execute(&config).unwrap();

    assert!(outcome.name.starts_with("results."));
    assert_eq!(outcome.counts.len(), 2);
    assert!(dir
        .path()
        .join(format!("{}.table.csv", outcome.name))
        .is_file());
}
