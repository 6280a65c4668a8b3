//! Mindmaps built from nested levels.

use std::fmt;
use std::fmt::Write;

use crate::config::Config;
use crate::graph::Diagram;
use crate::icon::Icon;
use crate::util::slugify;

/// Bracket pair drawn around a level name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelShape {
    Square,
    RoundedSquare,
    Circle,
    Bang,
    Cloud,
    Hexagon,
    #[default]
    Default,
}

impl LevelShape {
    /// Opening and closing delimiters for the shape.
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            LevelShape::Square => ("[", "]"),
            LevelShape::RoundedSquare => ("(", ")"),
            LevelShape::Circle => ("((", "))"),
            LevelShape::Bang => ("))", "(("),
            LevelShape::Cloud => (")", "("),
            LevelShape::Hexagon => ("{{", "}}"),
            LevelShape::Default => ("", ""),
        }
    }
}

/// One node of the mindmap tree.
///
/// Levels nest through [`Level::add_child`]; an icon is only rendered on
/// levels without children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub children: Vec<Level>,
    pub shape: LevelShape,
    pub icon: Option<Icon>,
}

impl Level {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            name: name.to_string(),
            children: Vec::new(),
            shape: LevelShape::default(),
            icon: None,
        }
    }

    pub fn with_shape(mut self, shape: LevelShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Level>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn add_child(&mut self, child: Level) {
        self.children.push(child);
    }

    fn write_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "\t".repeat(depth);
        let (start, end) = self.shape.delimiters();
        writeln!(f, "{indent}{start}{}{end}", self.name)?;
        if self.children.is_empty() {
            if let Some(icon) = &self.icon {
                writeln!(f, "{indent}::icon({} {})", icon.kind, icon.name)?;
            }
        }
        for child in &self.children {
            child.write_at(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Top-level levels sit below the root title, two tabs deep.
        self.write_at(f, 2)
    }
}

/// A `mindmap` diagram rooted at its title.
#[derive(Debug, Clone)]
pub struct Mindmap {
    pub title: String,
    pub levels: Vec<Level>,
    pub shape: LevelShape,
    pub config: Option<Config>,
}

impl Mindmap {
    pub fn new(title: impl Into<String>, levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            title: title.into(),
            levels: levels.into_iter().collect(),
            shape: LevelShape::default(),
            config: None,
        }
    }

    pub fn with_shape(mut self, shape: LevelShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for Mindmap {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        let (start, end) = self.shape.delimiters();
        let _ = write!(out, "\nmindmap\n\t{start}{}{end}\n", self.title);
        for level in &self.levels {
            let _ = write!(out, "{level}");
        }
    }
}
