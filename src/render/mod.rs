//! Writing of the HTML table and the flat data export
//!
//! Every table is written twice, as `<name>.html` and `<name>.csv`, sharing
//! one head. The difference subset gets its own pair of files.

pub mod csv;
pub mod head;
pub mod html;
pub mod template;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::constants::assets;
use crate::models::{Column, Row, RunRecord};
use crate::utils::{common_directory_prefix, escape_html};
use head::{table_head, TableHead};
use template::{render_template, TABLE_TEMPLATE};

/// Presentation settings of the HTML table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Base URL of the JavaScript and CSS assets
    pub lib_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lib_url: assets::LIB_URL.to_string(),
        }
    }
}

impl RenderConfig {
    /// Assets are taken from a local directory.
    pub fn offline() -> Self {
        Self {
            lib_url: assets::LIB_URL_OFFLINE.to_string(),
        }
    }
}

/// Everything needed to write the tables of one report
pub struct TableSet<'a> {
    pub name: &'a str,
    pub runs: &'a [RunRecord],
    pub filenames: &'a [String],
    pub rows: &'a [Row],
    pub diff_rows: &'a [Row],
}

struct TableWriter<'a> {
    output_dir: &'a Path,
    config: &'a RenderConfig,
    head: TableHead,
    common_prefix: String,
    columns: Vec<&'a [Column]>,
}

impl TableWriter<'_> {
    fn write(&self, file_stem: &str, title: &str, rows: &[Row]) -> Result<Vec<PathBuf>> {
        let html_path = self.output_dir.join(format!("{file_stem}.html"));
        let csv_path = self.output_dir.join(format!("{file_stem}.csv"));
        info!("writing html into {} ...", html_path.display());

        let body = html::body_html(rows, &self.columns, &self.common_prefix, self.output_dir);
        let foot = html::foot_html(rows, &self.columns);
        let title = escape_html(title);
        let page = render_template(
            TABLE_TEMPLATE,
            &[
                ("title", title.as_str()),
                ("head", self.head.html.as_str()),
                ("body", body.as_str()),
                ("foot", foot.as_str()),
                ("lib_url", self.config.lib_url.as_str()),
            ],
        );
        fs::write(&html_path, page)
            .with_context(|| format!("Failed to write {}", html_path.display()))?;

        let mut flat = self.head.csv.clone();
        flat.push('\n');
        flat.push_str(&csv::body_csv(rows, &self.common_prefix));
        fs::write(&csv_path, flat)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;

        Ok(vec![html_path, csv_path])
    }
}

/// Write `<name>.table.{html,csv}` and, if there are differing rows,
/// `<name>.diff.{html,csv}` into `output_dir`, which is created if needed.
///
/// Returns the paths of all written files.
pub fn write_tables(
    tables: &TableSet<'_>,
    output_dir: &Path,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let common_prefix = common_directory_prefix(tables.filenames);
    let writer = TableWriter {
        output_dir,
        config,
        head: table_head(tables.runs, &common_prefix),
        columns: tables.runs.iter().map(|r| r.columns.as_slice()).collect(),
        common_prefix,
    };

    let mut written = writer.write(&format!("{}.table", tables.name), tables.name, tables.rows)?;
    if !tables.diff_rows.is_empty() {
        written.extend(writer.write(
            &format!("{}.diff", tables.name),
            &format!("{} differences", tables.name),
            tables.diff_rows,
        )?);
    }

    Ok(written)
}
