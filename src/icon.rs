//! Icon fragments for mindmap nodes.

use std::fmt;

/// Syntax revision of the icon shorthand.
///
/// Mermaid changed the inline icon format across releases; `V1` is the
/// space-separated form, `V2` the colon form, `V3` the padded colon form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconVersion {
    #[default]
    V1,
    V2,
    V3,
}

/// An icon reference, e.g. a fontawesome glyph (`fa` kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub kind: String,
    pub version: IconVersion,
}

impl Icon {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version: IconVersion::default(),
        }
    }

    pub fn with_version(mut self, version: IconVersion) -> Self {
        self.version = version;
        self
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            IconVersion::V1 => write!(f, "{} {}", self.kind, self.name),
            IconVersion::V2 => write!(f, "{}:{}", self.kind, self.name),
            IconVersion::V3 => write!(f, " {}:{} ", self.kind, self.name),
        }
    }
}
