//! Links between flowchart nodes.

use std::fmt;

use super::node::Node;

/// Line style of a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkShape {
    #[default]
    Normal,
    Dotted,
    Thick,
    Hidden,
}

impl LinkShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkShape::Normal => "--",
            LinkShape::Dotted => "-.-",
            LinkShape::Thick => "==",
            LinkShape::Hidden => "~~~",
        }
    }
}

/// Endpoint decoration on either side of a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkHead {
    #[default]
    None,
    Arrow,
    LeftArrow,
    Bullet,
    Cross,
}

impl LinkHead {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkHead::None => "",
            LinkHead::Arrow => ">",
            LinkHead::LeftArrow => "<",
            LinkHead::Bullet => "o",
            LinkHead::Cross => "x",
        }
    }
}

/// A link between two nodes, with an optional inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub origin: String,
    pub end: String,
    pub shape: LinkShape,
    pub head_left: LinkHead,
    pub head_right: LinkHead,
    pub message: Option<String>,
}

impl Link {
    /// Connect `origin` to `end` with the default solid arrow.
    pub fn new(origin: &Node, end: &Node) -> Self {
        Self {
            origin: origin.id.clone(),
            end: end.id.clone(),
            shape: LinkShape::default(),
            head_left: LinkHead::None,
            head_right: LinkHead::Arrow,
            message: None,
        }
    }

    pub fn with_shape(mut self, shape: LinkShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_head_left(mut self, head: LinkHead) -> Self {
        self.head_left = head;
        self
    }

    pub fn with_head_right(mut self, head: LinkHead) -> Self {
        self.head_right = head;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}{}",
            self.origin,
            self.head_left.as_str(),
            self.shape.as_str(),
            self.head_right.as_str()
        )?;
        if let Some(message) = &self.message {
            write!(f, "|{message}|")?;
        }
        write!(f, " {}", self.end)
    }
}
