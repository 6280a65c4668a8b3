//! Notes, rects and the control-flow blocks of a sequence diagram.

use std::fmt;

use indexmap::IndexMap;

use super::SequenceItem;
use super::member::Member;
use crate::error::{NereidError, Result};

/// Where a note sits relative to its members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotePosition {
    #[default]
    Over,
    LeftOf,
    RightOf,
}

impl NotePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotePosition::Over => "over",
            NotePosition::LeftOf => "left of",
            NotePosition::RightOf => "right of",
        }
    }
}

/// A note attached to one or more members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub text: String,
    pub member_ids: Vec<String>,
    pub position: NotePosition,
}

impl Note {
    pub fn over(text: impl Into<String>, member: &impl Member) -> Self {
        Self {
            text: text.into(),
            member_ids: vec![member.id().to_string()],
            position: NotePosition::Over,
        }
    }

    pub fn left_of(text: impl Into<String>, member: &impl Member) -> Self {
        Self {
            text: text.into(),
            member_ids: vec![member.id().to_string()],
            position: NotePosition::LeftOf,
        }
    }

    pub fn right_of(text: impl Into<String>, member: &impl Member) -> Self {
        Self {
            text: text.into(),
            member_ids: vec![member.id().to_string()],
            position: NotePosition::RightOf,
        }
    }

    /// A note across several members. Only the `over` placement can span,
    /// anything else is [`NereidError::NoteSpan`].
    pub fn spanning(
        text: impl Into<String>,
        members: &[&dyn Member],
        position: NotePosition,
    ) -> Result<Self> {
        if members.len() > 1 && position != NotePosition::Over {
            return Err(NereidError::NoteSpan);
        }
        Ok(Self {
            text: text.into(),
            member_ids: members.iter().map(|member| member.id().to_string()).collect(),
            position,
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\tNote {} {}: {}",
            self.position.as_str(),
            self.member_ids.join(","),
            self.text
        )
    }
}

/// A colored background rectangle around a run of items.
#[derive(Debug, Clone)]
pub struct Rect {
    pub items: Vec<SequenceItem>,
    pub color: (u8, u8, u8),
}

impl Rect {
    pub fn new(items: Vec<SequenceItem>, color: (u8, u8, u8)) -> Self {
        Self { items, color }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.color;
        writeln!(f, "\trect rgb({red},{green},{blue})")?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        f.write_str("\tend\n")
    }
}

/// A `loop` block repeating while its condition holds.
#[derive(Debug, Clone)]
pub struct Loop {
    pub condition: String,
    pub items: Vec<SequenceItem>,
}

impl Loop {
    pub fn new(condition: impl Into<String>, items: Vec<SequenceItem>) -> Self {
        Self {
            condition: condition.into(),
            items,
        }
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tloop {}", self.condition)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        f.write_str("\tend\n")
    }
}

/// An `alt` block: the first branch, then `else` branches in order.
#[derive(Debug, Clone)]
pub struct Alt {
    pub branches: IndexMap<String, Vec<SequenceItem>>,
}

impl Alt {
    pub fn new<S, I>(branches: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<SequenceItem>)>,
    {
        Self {
            branches: branches
                .into_iter()
                .map(|(condition, items)| (condition.into(), items))
                .collect(),
        }
    }
}

impl fmt::Display for Alt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (condition, items)) in self.branches.iter().enumerate() {
            let keyword = if index == 0 { "alt" } else { "else" };
            writeln!(f, "\t{keyword} {condition}")?;
            for item in items {
                write!(f, "{item}")?;
            }
        }
        f.write_str("\tend\n")
    }
}

/// An `opt` block rendered when its condition holds.
#[derive(Debug, Clone)]
pub struct Optional {
    pub condition: String,
    pub items: Vec<SequenceItem>,
}

impl Optional {
    pub fn new(condition: impl Into<String>, items: Vec<SequenceItem>) -> Self {
        Self {
            condition: condition.into(),
            items,
        }
    }
}

impl fmt::Display for Optional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\topt {}", self.condition)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        f.write_str("\tend\n")
    }
}

/// A `par` block: the first branch, then `and` branches in order.
#[derive(Debug, Clone)]
pub struct Parallel {
    pub branches: IndexMap<String, Vec<SequenceItem>>,
}

impl Parallel {
    pub fn new<S, I>(branches: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<SequenceItem>)>,
    {
        Self {
            branches: branches
                .into_iter()
                .map(|(condition, items)| (condition.into(), items))
                .collect(),
        }
    }
}

impl fmt::Display for Parallel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (condition, items)) in self.branches.iter().enumerate() {
            let keyword = if index == 0 { "par" } else { "and" };
            writeln!(f, "\t{keyword} {condition}")?;
            for item in items {
                write!(f, "{item}")?;
            }
        }
        f.write_str("\tend\n")
    }
}

/// A `critical` block with `option` fallbacks.
#[derive(Debug, Clone)]
pub struct Critical {
    pub condition: String,
    pub items: Vec<SequenceItem>,
    pub options: IndexMap<String, Vec<SequenceItem>>,
}

impl Critical {
    pub fn new<S, I>(condition: impl Into<String>, items: Vec<SequenceItem>, options: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<SequenceItem>)>,
    {
        Self {
            condition: condition.into(),
            items,
            options: options
                .into_iter()
                .map(|(condition, items)| (condition.into(), items))
                .collect(),
        }
    }
}

impl fmt::Display for Critical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tcritical {}", self.condition)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        for (condition, items) in &self.options {
            writeln!(f, "\toption {condition}")?;
            for item in items {
                write!(f, "{item}")?;
            }
        }
        f.write_str("\tend\n")
    }
}

/// A `break` block leaving the surrounding flow.
#[derive(Debug, Clone)]
pub struct Break {
    pub condition: String,
    pub items: Vec<SequenceItem>,
}

impl Break {
    pub fn new(condition: impl Into<String>, items: Vec<SequenceItem>) -> Self {
        Self {
            condition: condition.into(),
            items,
        }
    }
}

impl fmt::Display for Break {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tbreak {}", self.condition)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        f.write_str("\tend\n")
    }
}
