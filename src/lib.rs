//! # nereid
//!
//! Typed Mermaid diagram builders with mermaid.ink rendering.
//!
//! Every diagram type assembles the exact Mermaid text DSL through the
//! [`Diagram`] trait; the finished [`Graph`] can be saved as a script or
//! rendered to SVG/PNG through [`ink::InkClient`] and wrapped into a docs
//! page via [`docsite`].
//!
//! ```
//! use nereid::Diagram;
//! use nereid::flowchart::{FlowChart, Link, Node};
//!
//! let nodes = vec![Node::new("First Node"), Node::new("Second Node")];
//! let links = vec![Link::new(&nodes[0], &nodes[1])];
//! let chart = FlowChart::new("simple flowchart", nodes, links);
//! assert!(chart.script().contains("first_node --> second_node"));
//! ```

use std::fmt;

pub mod config;
pub mod docsite;
pub mod erdiagram;
pub mod error;
pub mod flowchart;
pub mod graph;
pub mod icon;
pub mod ink;
pub mod mindmap;
pub mod piechart;
pub mod reqdiagram;
pub mod sequence;
pub mod statediagram;
pub mod style;
pub mod timeline;
pub mod userjourney;
mod util;

// Re-export main types
pub use config::{Config, Theme};
pub use docsite::{Position, SiteTheme};
pub use error::{NereidError, Result};
pub use graph::{Diagram, Graph};
pub use icon::{Icon, IconVersion};
pub use ink::{InkClient, RenderOptions, Rendered};
pub use style::Style;
pub use util::{load, slugify};

/// Layout direction shared by flowcharts, subgraphs and state diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keywords() {
        assert_eq!(Direction::LeftToRight.as_str(), "LR");
        assert_eq!(Direction::RightToLeft.as_str(), "RL");
        assert_eq!(Direction::TopToBottom.as_str(), "TB");
        assert_eq!(Direction::BottomToTop.as_str(), "BT");
    }
}
