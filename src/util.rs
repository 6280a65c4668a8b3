//! Script loading and identifier helpers.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::graph::Graph;

/// Read a Mermaid script from disk.
///
/// The graph title is the file stem. Any extension is accepted here; only
/// [`Graph::save`] restricts extensions.
pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let script = std::fs::read_to_string(path)?;
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Graph::new(title, script))
}

/// Lowercase `text` and replace every character outside `[a-zA-Z0-9_.-]`
/// with an underscore. Mermaid identifiers derived from display names go
/// through this.
pub fn slugify(text: &str) -> String {
    static NON_ID: OnceLock<Regex> = OnceLock::new();
    let re = NON_ID.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_.-]").expect("pattern is valid"));
    re.replace_all(text, "_").to_lowercase()
}
