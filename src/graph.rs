//! The base script record and the assembly seam shared by every builder.

use std::path::Path;

use crate::config::Config;
use crate::error::{NereidError, Result};

/// A named, ready-to-ship Mermaid script.
///
/// Typed builders produce one through [`Diagram::graph`]; [`crate::load`]
/// reads one back from disk. The script is stored verbatim, frontmatter
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Diagram title, also the default file stem on save.
    pub title: String,
    /// The complete Mermaid script.
    pub script: String,
}

impl Graph {
    pub fn new(title: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script: script.into(),
        }
    }

    /// Write the script to `./{title}.mmd`.
    pub fn save(&self) -> Result<()> {
        self.save_as(format!("./{}.mmd", self.title))
    }

    /// Write the script to `path`, which must end in `.mmd` or `.mermaid`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("mmd" | "mermaid") => {}
            _ => return Err(NereidError::InvalidExtension(path.to_path_buf())),
        }
        std::fs::write(path, &self.script)?;
        Ok(())
    }
}

/// Assembly seam implemented by every typed diagram.
///
/// Implementors supply the title, the optional init directive and the body;
/// the provided methods assemble the final script. Bodies start with their
/// `\n{keyword}` line so the frontmatter joins them without separators.
pub trait Diagram {
    /// Title rendered into the `---` frontmatter.
    fn title(&self) -> &str;

    /// Optional `%%{init: ...}%%` directive.
    fn config(&self) -> Option<&Config> {
        None
    }

    /// Append the diagram body to `out`.
    fn write_body(&self, out: &mut String);

    /// Render the complete script, frontmatter first.
    fn script(&self) -> String {
        let mut out = format!("---\ntitle: {}\n---", self.title());
        if let Some(config) = self.config() {
            out.push('\n');
            out.push_str(&config.to_string());
        }
        self.write_body(&mut out);
        out
    }

    /// Bundle the rendered script with the title.
    fn graph(&self) -> Graph {
        Graph::new(self.title(), self.script())
    }

    /// Save the rendered script to `./{title}.mmd`.
    fn save(&self) -> Result<()> {
        self.graph().save()
    }

    /// Save the rendered script to `path` (`.mmd` or `.mermaid`).
    fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.graph().save_as(path)
    }
}
