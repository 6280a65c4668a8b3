//! Transitions between states.

use std::fmt;

use super::state::StateNode;

/// An arrow between two states, `[*]` endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl Transition {
    pub fn new(from: &impl StateNode, to: &impl StateNode) -> Self {
        Self {
            from: from.id().to_string(),
            to: to.id().to_string(),
            label: None,
        }
    }

    /// Entry transition from the `[*]` marker.
    pub fn from_start(to: &impl StateNode) -> Self {
        Self {
            from: "[*]".to_string(),
            to: to.id().to_string(),
            label: None,
        }
    }

    /// Exit transition into the `[*]` marker.
    pub fn to_end(from: &impl StateNode) -> Self {
        Self {
            from: from.id().to_string(),
            to: "[*]".to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.from, self.to)?;
        if let Some(label) = &self.label {
            write!(f, " : {label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::state::State;
    use super::*;

    #[test]
    fn labeled_transition() {
        let first = State::new("First State");
        let second = State::new("Second State");
        let transition = Transition::new(&first, &second).with_label("This is my label");
        assert_eq!(
            transition.to_string(),
            "first_state --> second_state : This is my label"
        );
    }

    #[test]
    fn transition_from_start() {
        let first = State::new("First State");
        assert_eq!(
            Transition::from_start(&first).to_string(),
            "[*] --> first_state"
        );
    }

    #[test]
    fn transition_to_end() {
        let first = State::new("First State");
        assert_eq!(Transition::to_end(&first).to_string(), "first_state --> [*]");
    }
}
