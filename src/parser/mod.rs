//! Loaders for run-result and table-definition documents

pub mod result_doc;
pub mod table_def;
pub mod xml;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use xml::{parse_document, Element, XmlError};

/// Fatal problems with an input document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File '{}' does not exist", path.display())]
    MissingDocument { path: PathBuf },

    #[error(
        "'{}' seems to be invalid: the root element is named '{found}', expected '{expected}'.{hint}",
        path.display()
    )]
    WrongRootTag {
        path: PathBuf,
        expected: &'static str,
        found: String,
        hint: &'static str,
    },

    #[error("'{}' lacks the required attribute '{attribute}'", path.display())]
    MissingAttribute {
        path: PathBuf,
        attribute: &'static str,
    },

    #[error("Column '{title}' in '{}' has an invalid numberOfDigits value '{value}'", path.display())]
    InvalidPrecision {
        path: PathBuf,
        title: String,
        value: String,
    },

    #[error("Failed to parse '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: XmlError,
    },
}

/// Read a document and check that its root element carries the expected tag
pub(crate) fn read_document(
    path: &Path,
    expected_root: &'static str,
    hint: &'static str,
) -> Result<Element> {
    if !path.is_file() {
        return Err(LoadError::MissingDocument {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let root = parse_document(&content).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    if root.name != expected_root {
        return Err(LoadError::WrongRootTag {
            path: path.to_path_buf(),
            expected: expected_root,
            found: root.name,
            hint,
        }
        .into());
    }

    Ok(root)
}
