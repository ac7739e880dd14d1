use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Component, Path, PathBuf};

/// Characters left unescaped in links, matching the usual URL path quoting.
const PATH_QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Longest common directory prefix of all names, including the trailing `/`.
///
/// Returns an empty string if the names share no directory.
pub fn common_directory_prefix<S: AsRef<str>>(names: &[S]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };
    let first = first.as_ref();

    let mut len = first.len();
    for name in &names[1..] {
        let common = first
            .char_indices()
            .zip(name.as_ref().chars())
            .find(|((_, a), b)| a != b)
            .map_or_else(|| first.len().min(name.as_ref().len()), |((i, _), _)| i);
        len = len.min(common);
    }

    match first[..len].rfind('/') {
        Some(slash) => first[..=slash].to_string(),
        None => String::new(),
    }
}

/// Remove `prefix` from the start of `name` if present
pub fn strip_common_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

fn absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    // lexical normalization; the paths need not exist
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Path of `target` relative to the directory `base`
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target = absolute(target);
    let base = absolute(base);

    let target_parts: Vec<_> = target.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let shared = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[shared..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

/// Percent-encode a path for use in an `href`
pub fn quote_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_QUOTE_SET).to_string()
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
