//! `classDef` style definitions attached to nodes and states.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A named style definition, rendered as one `classDef` line.
///
/// The dedicated fields cover the attributes diagrams set most; anything
/// else goes into `other` as a raw comma-separated `key:value` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub fill: Option<String>,
    pub color: Option<String>,
    pub font_weight: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke: Option<String>,
    pub other: Option<String>,
}

impl Style {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// Styles share identity by name so diagram-level dedup keeps the first
// definition; equality still compares every field.
impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "classDef {} ", self.name)?;
        let attributes = [
            ("fill", &self.fill),
            ("color", &self.color),
            ("font-weight", &self.font_weight),
            ("stroke-width", &self.stroke_width),
            ("stroke", &self.stroke),
        ];
        let mut first = true;
        for (key, value) in attributes {
            if let Some(value) = value {
                if !first {
                    f.write_str(",")?;
                }
                write!(f, "{key}:{value}")?;
                first = false;
            }
        }
        if let Some(other) = &self.other {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(other)?;
        }
        Ok(())
    }
}
