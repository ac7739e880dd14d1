//! Expansion of user-supplied file patterns into sorted file lists

use anyhow::Result;
use regex::Regex;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::warn;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("Invalid regex pattern")
});

/// Expand ~ to home directory in paths
pub fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Ok(home) = env::var("HOME") {
            return path.replacen('~', &home, 1);
        }
    }
    path.to_string()
}

/// Expand ${ENV_VAR} and $ENV_VAR patterns; unknown variables stay as written
pub fn expand_env_vars(s: &str) -> String {
    ENV_VAR
        .replace_all(s, |caps: &regex::Captures| {
            let name = caps.get(1).or_else(|| caps.get(2));
            name.and_then(|n| env::var(n.as_str()).ok())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

/// Expand a pattern that may contain `~`, variables and wildcards into an
/// alphabetically sorted list of existing paths.
///
/// A pattern matching nothing is not an error; it is reported and yields
/// an empty list.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let expanded = expand_env_vars(&expand_tilde(pattern));

    let mut files: Vec<PathBuf> = glob::glob(&expanded)
        .map_err(|e| anyhow::anyhow!("Invalid glob pattern '{pattern}': {e}"))?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        warn!("no file matches \"{pattern}\".");
    }
    files.sort();
    Ok(files)
}

/// Expand every pattern and concatenate the results, keeping pattern order
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        files.extend(expand_pattern(pattern.as_ref())?);
    }
    Ok(files)
}
