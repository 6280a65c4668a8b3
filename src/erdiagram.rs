//! Entity-relationship diagrams.

use std::fmt;
use std::fmt::Write;

use indexmap::IndexMap;

use crate::config::Config;
use crate::graph::Diagram;

/// Key constraint attached to an entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyConstraint {
    Primary,
    Foreign,
    Unique,
}

impl KeyConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyConstraint::Primary => "PK",
            KeyConstraint::Foreign => "FK",
            KeyConstraint::Unique => "UK",
        }
    }
}

/// Type, optional key constraint and optional comment of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDef {
    pub kind: String,
    pub constraint: Option<KeyConstraint>,
    pub comment: Option<String>,
}

impl AttributeDef {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            constraint: None,
            comment: None,
        }
    }

    pub fn with_constraint(mut self, constraint: KeyConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// An entity and its attributes, kept in author order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub attributes: IndexMap<String, AttributeDef>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, def: AttributeDef) -> Self {
        self.attributes.insert(name.into(), def);
        self
    }

    /// Insert or replace one attribute.
    pub fn add_attribute(&mut self, name: impl Into<String>, def: AttributeDef) {
        self.attributes.insert(name.into(), def);
    }

    /// Merge `attributes` into the entity, replacing clashes.
    pub fn update_attributes(
        &mut self,
        attributes: impl IntoIterator<Item = (String, AttributeDef)>,
    ) {
        for (name, def) in attributes {
            self.attributes.insert(name, def);
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{\n", self.name)?;
        for (name, def) in &self.attributes {
            write!(f, "\t{} {}", def.kind, name)?;
            if let Some(constraint) = def.constraint {
                write!(f, " {}", constraint.as_str())?;
            }
            if let Some(comment) = &def.comment {
                write!(f, " \"{comment}\"")?;
            }
            f.write_str("\n")?;
        }
        f.write_str("}")
    }
}

/// How many rows of one entity relate to a row of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ZeroOrOne,
    ExactlyOne,
    ZeroOrMore,
    OneOrMore,
}

impl Cardinality {
    /// Symbol on the origin side of the relation.
    pub fn left(&self) -> &'static str {
        match self {
            Cardinality::ZeroOrOne => "|o",
            Cardinality::ExactlyOne => "||",
            Cardinality::ZeroOrMore => "}o",
            Cardinality::OneOrMore => "}|",
        }
    }

    /// Symbol on the end side of the relation.
    pub fn right(&self) -> &'static str {
        match self {
            Cardinality::ZeroOrOne => "o|",
            Cardinality::ExactlyOne => "||",
            Cardinality::ZeroOrMore => "o{",
            Cardinality::OneOrMore => "|{",
        }
    }
}

/// A relation between two entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub origin: String,
    pub end: String,
    pub origin_cardinality: Cardinality,
    pub end_cardinality: Cardinality,
    pub dotted: bool,
    pub label: String,
}

impl Link {
    pub fn new(
        origin: &Entity,
        end: &Entity,
        origin_cardinality: Cardinality,
        end_cardinality: Cardinality,
    ) -> Self {
        Self {
            origin: origin.name.clone(),
            end: end.name.clone(),
            origin_cardinality,
            end_cardinality,
            dotted: false,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn dotted(mut self) -> Self {
        self.dotted = true;
        self
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = if self.dotted { ".." } else { "--" };
        write!(
            f,
            "{}{}{}{}{} : \"{}\"",
            self.origin,
            self.origin_cardinality.left(),
            line,
            self.end_cardinality.right(),
            self.end,
            self.label
        )
    }
}

/// An ER diagram: entities plus the relations between them.
#[derive(Debug, Clone)]
pub struct ERDiagram {
    pub title: String,
    pub entities: Vec<Entity>,
    pub links: Vec<Link>,
    pub config: Option<Config>,
}

impl ERDiagram {
    pub fn new(title: impl Into<String>, entities: Vec<Entity>, links: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            entities,
            links,
            config: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for ERDiagram {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        out.push_str("\nerDiagram");
        for entity in &self.entities {
            let _ = write!(out, "\n\t{entity}");
        }
        for link in &self.links {
            let _ = write!(out, "\n\t{link}");
        }
        out.push('\n');
    }
}
