//! Arrows between sequence members.

use std::fmt;

use super::member::Member;

/// Arrow drawn for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowType {
    SolidLine,
    DottedLine,
    SolidArrow,
    DottedArrow,
    SolidCross,
    DottedCross,
    SolidAsync,
    DottedAsync,
}

impl ArrowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowType::SolidLine => "->",
            ArrowType::DottedLine => "-->",
            ArrowType::SolidArrow => "->>",
            ArrowType::DottedArrow => "-->>",
            ArrowType::SolidCross => "-x",
            ArrowType::DottedCross => "--x",
            ArrowType::SolidAsync => "-)",
            ArrowType::DottedAsync => "--)",
        }
    }
}

/// A message from one member to another.
///
/// Activation markers reference the target and are emitted right after the
/// message line, unindented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub arrow: ArrowType,
    pub message: String,
    pub activate_target: bool,
    pub deactivate_target: bool,
}

impl Link {
    pub fn new(
        source: &impl Member,
        target: &impl Member,
        arrow: ArrowType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.id().to_string(),
            target: target.id().to_string(),
            arrow,
            message: message.into(),
            activate_target: false,
            deactivate_target: false,
        }
    }

    pub fn with_activation(mut self) -> Self {
        self.activate_target = true;
        self
    }

    pub fn with_deactivation(mut self) -> Self {
        self.deactivate_target = true;
        self
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\t{}{}{}: {}",
            self.source,
            self.arrow.as_str(),
            self.target,
            self.message
        )?;
        if self.activate_target {
            writeln!(f, "activate {}", self.target)?;
        }
        if self.deactivate_target {
            writeln!(f, "deactivate {}", self.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::member::{Actor, Participant};
    use super::*;

    #[test]
    fn link_without_activation() {
        let john = Actor::new("John");
        let alice = Actor::new("Alice");
        let link = Link::new(&john, &alice, ArrowType::SolidLine, "Hello World");
        assert_eq!(link.to_string(), "\tJohn->Alice: Hello World\n");
    }

    #[test]
    fn link_with_activation() {
        let john = Actor::new("John");
        let alice = Actor::new("Alice");
        let link =
            Link::new(&john, &alice, ArrowType::SolidLine, "Hello World").with_activation();
        assert_eq!(
            link.to_string(),
            "\tJohn->Alice: Hello World\nactivate Alice\n"
        );
    }

    #[test]
    fn link_with_deactivation() {
        let john = Actor::new("John");
        let alice = Actor::new("Alice");
        let link =
            Link::new(&john, &alice, ArrowType::SolidLine, "Hello World").with_deactivation();
        assert_eq!(
            link.to_string(),
            "\tJohn->Alice: Hello World\ndeactivate Alice\n"
        );
    }

    #[test]
    fn link_addresses_participant_by_slug() {
        let john = Actor::new("John");
        let alice = Participant::new("Alice Smith");
        let link = Link::new(&john, &alice, ArrowType::DottedArrow, "hi");
        assert_eq!(link.to_string(), "\tJohn-->>alice_smith: hi\n");
    }

    #[test]
    fn arrow_symbols() {
        assert_eq!(ArrowType::SolidLine.as_str(), "->");
        assert_eq!(ArrowType::DottedLine.as_str(), "-->");
        assert_eq!(ArrowType::SolidArrow.as_str(), "->>");
        assert_eq!(ArrowType::DottedArrow.as_str(), "-->>");
        assert_eq!(ArrowType::SolidCross.as_str(), "-x");
        assert_eq!(ArrowType::DottedCross.as_str(), "--x");
        assert_eq!(ArrowType::SolidAsync.as_str(), "-)");
        assert_eq!(ArrowType::DottedAsync.as_str(), "--)");
    }
}
