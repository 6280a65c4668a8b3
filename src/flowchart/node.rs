//! Flowchart nodes and subgraphs.

use std::fmt;

use crate::Direction;
use crate::style::Style;
use crate::util::slugify;

/// Box shape drawn around a node's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeShape {
    #[default]
    Normal,
    RoundEdge,
    Stadium,
    Subroutine,
    Cylindrical,
    Circle,
    Label,
    Rhombus,
    Hexagon,
    Parallelogram,
    ParallelogramAlt,
    Trapezoid,
    TrapezoidAlt,
    DoubleCircle,
}

impl NodeShape {
    /// Opening and closing delimiters around the quoted content.
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Normal => ("[", "]"),
            NodeShape::RoundEdge => ("(", ")"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Subroutine => ("[[", "]]"),
            NodeShape::Cylindrical => ("[(", ")]"),
            NodeShape::Circle => ("((", "))"),
            NodeShape::Label => (">", "]"),
            NodeShape::Rhombus => ("{", "}"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Parallelogram => ("[/", "/]"),
            NodeShape::ParallelogramAlt => ("[\\", "\\]"),
            NodeShape::Trapezoid => ("[/", "\\]"),
            NodeShape::TrapezoidAlt => ("[\\", "/]"),
            NodeShape::DoubleCircle => ("(((", ")))"),
        }
    }
}

/// Browser target of a node's click link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HrefTarget {
    #[default]
    Blank,
    SelfTarget,
    Parent,
    Top,
}

impl HrefTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            HrefTarget::Blank => "_blank",
            HrefTarget::SelfTarget => "_self",
            HrefTarget::Parent => "_parent",
            HrefTarget::Top => "_top",
        }
    }
}

impl fmt::Display for HrefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flowchart node, or a subgraph when it carries sub-nodes.
///
/// The id is the slugified display name; the content defaults to the name
/// as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub content: String,
    pub shape: NodeShape,
    pub href: Option<String>,
    pub href_target: HrefTarget,
    pub styles: Vec<Style>,
    pub sub_nodes: Vec<Node>,
    /// Layout direction inside a subgraph. Ignored for plain nodes.
    pub direction: Direction,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            content: name.to_string(),
            shape: NodeShape::default(),
            href: None,
            href_target: HrefTarget::default(),
            styles: Vec::new(),
            sub_nodes: Vec::new(),
            direction: Direction::LeftToRight,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_href_target(mut self, target: HrefTarget) -> Self {
        self.href_target = target;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.styles.extend(styles);
        self
    }

    pub fn with_sub_nodes(mut self, sub_nodes: impl IntoIterator<Item = Node>) -> Self {
        self.sub_nodes.extend(sub_nodes);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub_nodes.is_empty() {
            let (start, end) = self.shape.delimiters();
            write!(f, "{}{}\"{}\"{}", self.id, start, self.content, end)?;
        } else {
            write!(f, "subgraph {} [\"{}\"]", self.id, self.content)?;
            write!(f, "\n\tdirection {}", self.direction)?;
            for sub_node in &self.sub_nodes {
                write!(f, "\n\t{sub_node}")?;
            }
            f.write_str("\nend")?;
        }
        if let Some(href) = &self.href {
            write!(f, "\nclick {} \"{}\" {}", self.id, href, self.href_target)?;
        }
        for style in &self.styles {
            write!(f, "\n{}:::{}", self.id, style.name)?;
        }
        Ok(())
    }
}
