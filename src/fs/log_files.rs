//! Lazy access to per-file log output

use std::cell::OnceCell;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Log file of one outcome, read at most once and only when a column needs it
pub struct LazyLog<'a> {
    path: Option<&'a Path>,
    content: OnceCell<Option<String>>,
}

impl<'a> LazyLog<'a> {
    pub fn new(path: Option<&'a Path>) -> Self {
        Self {
            path,
            content: OnceCell::new(),
        }
    }

    /// Content of the log, or `None` if there is no log or it cannot be read
    pub fn content(&self) -> Option<&str> {
        self.content
            .get_or_init(|| {
                let path = self.path?;
                match fs::read_to_string(path) {
                    Ok(content) => Some(content),
                    Err(e) => {
                        warn!(
                            "Could not read value from logfile {}: {e}",
                            path.display()
                        );
                        None
                    }
                }
            })
            .as_deref()
    }

    /// Whether the log has been read (successfully or not)
    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.content.get().is_some()
    }
}
