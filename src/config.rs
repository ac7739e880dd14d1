//! Report configuration
//!
//! Settings come from the command line and, optionally, a TOML defaults
//! file. Command line values take precedence; file values fill the gaps.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::constants::{assets, DEFAULT_OUTPUT_DIR};
use crate::reconcile::ReconcilePolicy;
use crate::render::RenderConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid combination of arguments (--merge and --common)")]
    ConflictingPolicies,

    #[error(
        "Invalid additional arguments '{}': result files are taken from the table definition",
        files.join(" ")
    )]
    DefinitionWithFiles { files: Vec<String> },

    #[error("No file with testresults found. {hint}")]
    NoResultFiles { hint: String },
}

/// Defaults read from a TOML file
///
/// ```toml
/// output_dir = "test/results"
/// policy = "merge"
/// correct_only = false
/// offline = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub output_dir: Option<PathBuf>,
    pub policy: Option<ReconcilePolicy>,
    pub correct_only: Option<bool>,
    pub offline: Option<bool>,
    pub lib_url: Option<String>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }
}

/// Options given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub definition: Option<PathBuf>,
    pub result_files: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub merge: bool,
    pub common: bool,
    pub correct_only: bool,
    pub offline: bool,
    pub dump_counts: bool,
    pub name: Option<String>,
}

/// Where the result documents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// Runs and columns listed in a table-definition document
    TableDefinition(PathBuf),
    /// Result files or glob patterns given explicitly
    ResultFiles(Vec<String>),
    /// All result documents found in the output directory
    SearchOutputDir,
}

/// Fully resolved settings of one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub inputs: InputSelection,
    pub output_dir: PathBuf,
    pub policy: ReconcilePolicy,
    pub correct_only: bool,
    pub dump_counts: bool,
    /// Explicit table name; derived from the inputs if absent
    pub name: Option<String>,
    pub render: RenderConfig,
}

impl ReportConfig {
    /// Merge command line options with file defaults and validate the result.
    pub fn resolve(cli: CliOptions, file: FileConfig) -> Result<Self, ConfigError> {
        let policy = match (cli.merge, cli.common) {
            (true, true) => return Err(ConfigError::ConflictingPolicies),
            (true, false) => ReconcilePolicy::Merge,
            (false, true) => ReconcilePolicy::Common,
            (false, false) => file.policy.unwrap_or_default(),
        };

        let inputs = match cli.definition {
            Some(_) if !cli.result_files.is_empty() => {
                return Err(ConfigError::DefinitionWithFiles {
                    files: cli.result_files,
                })
            }
            Some(definition) => InputSelection::TableDefinition(definition),
            None if cli.result_files.is_empty() => InputSelection::SearchOutputDir,
            None => InputSelection::ResultFiles(cli.result_files),
        };

        let render = if cli.offline || file.offline.unwrap_or(false) {
            RenderConfig {
                lib_url: assets::LIB_URL_OFFLINE.to_string(),
            }
        } else {
            RenderConfig {
                lib_url: file.lib_url.unwrap_or_else(|| assets::LIB_URL.to_string()),
            }
        };

        Ok(Self {
            inputs,
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            policy,
            correct_only: cli.correct_only || file.correct_only.unwrap_or(false),
            dump_counts: cli.dump_counts,
            name: cli.name,
            render,
        })
    }
}
