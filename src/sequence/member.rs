//! Actors, participants and boxes around them.

use std::fmt;

use super::SequenceItem;
use crate::util::slugify;

/// Anything a link or note can point at.
pub trait Member {
    /// Identifier used on arrow and note lines.
    fn id(&self) -> &str;
}

/// A person-shaped lifeline, addressed by its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Member for Actor {
    fn id(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tactor {}", self.name)
    }
}

/// A box-shaped lifeline with a slugified id and an alias display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub id: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = slugify(&name);
        Self { name, id }
    }
}

impl Member for Participant {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tparticipant {} as {}", self.id, self.name)
    }
}

/// A `box` grouping around a run of members.
#[derive(Debug, Clone)]
pub struct ActorBox {
    pub name: String,
    pub members: Vec<SequenceItem>,
}

impl ActorBox {
    pub fn new(name: impl Into<String>, members: Vec<SequenceItem>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

impl fmt::Display for ActorBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tbox {}", self.name)?;
        for member in &self.members {
            write!(f, "{member}")?;
        }
        f.write_str("\tend\n")
    }
}
