//! Flowchart diagrams.
//!
//! Nodes, subgraphs and links assemble into a [`FlowChart`], which renders
//! the `flowchart` script via [`Diagram`].

mod link;
mod node;

use std::fmt::Write;

use indexmap::IndexSet;

pub use self::link::{Link, LinkHead, LinkShape};
pub use self::node::{HrefTarget, Node, NodeShape};
use crate::Direction;
use crate::config::Config;
use crate::graph::Diagram;
use crate::style::Style;

/// A flowchart: nodes and links laid out along an orientation.
#[derive(Debug, Clone)]
pub struct FlowChart {
    pub title: String,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub orientation: Direction,
    pub config: Option<Config>,
}

impl FlowChart {
    pub fn new(title: impl Into<String>, nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            nodes,
            links,
            orientation: Direction::TopToBottom,
            config: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Direction) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Styles referenced by the nodes, first use first, duplicates dropped.
    fn styles(&self) -> IndexSet<Style> {
        let mut styles = IndexSet::new();
        for node in &self.nodes {
            styles.extend(node.styles.iter().cloned());
        }
        styles
    }
}

impl Diagram for FlowChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        let _ = write!(out, "\nflowchart {}", self.orientation);
        for style in self.styles() {
            let _ = write!(out, "\n\t{style}");
        }
        for node in &self.nodes {
            let _ = write!(out, "\n\t{node}");
        }
        for link in &self.links {
            let _ = write!(out, "\n\t{link}");
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::Diagram;

    fn sample() -> (Vec<Node>, Vec<Link>) {
        let nodes = vec![
            Node::new("First Node"),
            Node::new("Second Node"),
            Node::new("Third Node"),
        ];
        let links = vec![
            Link::new(&nodes[0], &nodes[1]).with_head_left(LinkHead::Cross),
            Link::new(&nodes[1], &nodes[2]).with_head_right(LinkHead::Bullet),
        ];
        (nodes, links)
    }

    #[test]
    fn script_with_default_orientation() {
        let (nodes, links) = sample();
        let flowchart = FlowChart::new("simple flowchart", nodes, links);
        let expected = concat!(
            "---\n",
            "title: simple flowchart\n",
            "---\n",
            "flowchart TB\n",
            "\tfirst_node[\"First Node\"]\n",
            "\tsecond_node[\"Second Node\"]\n",
            "\tthird_node[\"Third Node\"]\n",
            "\tfirst_node x--> second_node\n",
            "\tsecond_node --o third_node\n",
        );
        assert_eq!(flowchart.script(), expected);
    }

    #[test]
    fn script_with_orientation() {
        let (nodes, links) = sample();
        let flowchart = FlowChart::new("simple flowchart", nodes, links)
            .with_orientation(Direction::LeftToRight);
        let expected = concat!(
            "---\n",
            "title: simple flowchart\n",
            "---\n",
            "flowchart LR\n",
            "\tfirst_node[\"First Node\"]\n",
            "\tsecond_node[\"Second Node\"]\n",
            "\tthird_node[\"Third Node\"]\n",
            "\tfirst_node x--> second_node\n",
            "\tsecond_node --o third_node\n",
        );
        assert_eq!(flowchart.script(), expected);
    }

    #[test]
    fn script_collects_styles_in_first_use_order() {
        let first_style = Style {
            name: "firstStyle".to_string(),
            fill: Some("red".to_string()),
            ..Style::default()
        };
        let second_style = Style {
            name: "secondStyle".to_string(),
            stroke: Some("green".to_string()),
            ..Style::default()
        };
        let nodes = vec![
            Node::new("First Node").with_style(first_style),
            Node::new("Second Node").with_style(second_style),
            Node::new("Third Node"),
        ];
        let links = vec![
            Link::new(&nodes[0], &nodes[1]).with_head_left(LinkHead::Cross),
            Link::new(&nodes[1], &nodes[2]).with_head_right(LinkHead::Bullet),
        ];
        let flowchart = FlowChart::new("simple flowchart", nodes, links);
        let expected = concat!(
            "---\n",
            "title: simple flowchart\n",
            "---\n",
            "flowchart TB\n",
            "\tclassDef firstStyle fill:red\n",
            "\tclassDef secondStyle stroke:green\n",
            "\tfirst_node[\"First Node\"]\n",
            "first_node:::firstStyle\n",
            "\tsecond_node[\"Second Node\"]\n",
            "second_node:::secondStyle\n",
            "\tthird_node[\"Third Node\"]\n",
            "\tfirst_node x--> second_node\n",
            "\tsecond_node --o third_node\n",
        );
        assert_eq!(flowchart.script(), expected);
    }

    #[test]
    fn script_drops_duplicate_styles() {
        let styles = [
            Style {
                name: "firstStyle".to_string(),
                fill: Some("red".to_string()),
                ..Style::default()
            },
            Style {
                name: "secondStyle".to_string(),
                stroke: Some("green".to_string()),
                ..Style::default()
            },
        ];
        let nodes = vec![
            Node::new("First Node").with_styles(styles.clone()),
            Node::new("Second Node").with_styles(styles),
        ];
        let links = vec![Link::new(&nodes[0], &nodes[1])];
        let flowchart = FlowChart::new("simple flowchart", nodes, links);
        let script = flowchart.script();
        assert_eq!(script.matches("classDef firstStyle").count(), 1);
        assert_eq!(script.matches("classDef secondStyle").count(), 1);
    }

    #[test]
    fn script_with_config() {
        let (nodes, links) = sample();
        let config = Config {
            primary_color: Some("red".to_string()),
            ..Config::default()
        };
        let flowchart = FlowChart::new("simple flowchart", nodes, links).with_config(config);
        let expected = concat!(
            "---\n",
            "title: simple flowchart\n",
            "---\n",
            "%%{\n",
            "\tinit: {\n",
            "\t\t\"theme\": \"default\",\n",
            "\t\t\"themeVariables\": {\n",
            "\t\t\t\"primaryColor\": \"red\"\n",
            "\t\t}\n",
            "\t}\n",
            "}%%\n",
            "\n",
            "flowchart TB\n",
            "\tfirst_node[\"First Node\"]\n",
            "\tsecond_node[\"Second Node\"]\n",
            "\tthird_node[\"Third Node\"]\n",
            "\tfirst_node x--> second_node\n",
            "\tsecond_node --o third_node\n",
        );
        assert_eq!(flowchart.script(), expected);
    }
}
