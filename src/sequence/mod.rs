//! Sequence diagrams.
//!
//! A [`SequenceDiagram`] is an ordered list of [`SequenceItem`]s: members,
//! messages, notes and control-flow blocks, each rendering its own lines.

mod block;
mod link;
mod member;

use std::fmt;

pub use self::block::{Alt, Break, Critical, Loop, Note, NotePosition, Optional, Parallel, Rect};
pub use self::link::{ArrowType, Link};
pub use self::member::{Actor, ActorBox, Member, Participant};
use crate::config::Config;
use crate::graph::Diagram;

/// One entry in a sequence diagram.
///
/// Blocks hold further items, so control flow nests arbitrarily.
#[derive(Debug, Clone)]
pub enum SequenceItem {
    Actor(Actor),
    Participant(Participant),
    ActorBox(ActorBox),
    Link(Link),
    Note(Note),
    Rect(Rect),
    Loop(Loop),
    Alt(Alt),
    Optional(Optional),
    Parallel(Parallel),
    Critical(Critical),
    Break(Break),
}

impl fmt::Display for SequenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceItem::Actor(item) => item.fmt(f),
            SequenceItem::Participant(item) => item.fmt(f),
            SequenceItem::ActorBox(item) => item.fmt(f),
            SequenceItem::Link(item) => item.fmt(f),
            SequenceItem::Note(item) => item.fmt(f),
            SequenceItem::Rect(item) => item.fmt(f),
            SequenceItem::Loop(item) => item.fmt(f),
            SequenceItem::Alt(item) => item.fmt(f),
            SequenceItem::Optional(item) => item.fmt(f),
            SequenceItem::Parallel(item) => item.fmt(f),
            SequenceItem::Critical(item) => item.fmt(f),
            SequenceItem::Break(item) => item.fmt(f),
        }
    }
}

macro_rules! sequence_item_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for SequenceItem {
                fn from(item: $variant) -> Self {
                    SequenceItem::$variant(item)
                }
            }
        )+
    };
}

sequence_item_from!(
    Actor,
    Participant,
    ActorBox,
    Link,
    Note,
    Rect,
    Loop,
    Alt,
    Optional,
    Parallel,
    Critical,
    Break,
);

/// A sequence diagram over an ordered list of items.
#[derive(Debug, Clone)]
pub struct SequenceDiagram {
    pub title: String,
    pub items: Vec<SequenceItem>,
    pub auto_number: bool,
    pub config: Option<Config>,
}

impl SequenceDiagram {
    pub fn new(title: impl Into<String>, items: Vec<SequenceItem>) -> Self {
        Self {
            title: title.into(),
            items,
            auto_number: false,
            config: None,
        }
    }

    /// Number every message automatically.
    pub fn auto_number(mut self) -> Self {
        self.auto_number = true;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for SequenceDiagram {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        out.push_str("\nsequenceDiagram\n");
        if self.auto_number {
            out.push_str("\tautonumber\n");
        }
        for item in &self.items {
            out.push_str(&item.to_string());
        }
    }
}
