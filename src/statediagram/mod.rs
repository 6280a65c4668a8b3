//! State diagrams: states, pseudo-states and the transitions between them.

mod state;
mod transition;

use std::fmt;
use std::fmt::Write;

use indexmap::IndexSet;

pub use self::state::{
    Choice, Composite, Concurrent, End, Fork, Join, Start, State, StateItem, StateNode,
};
pub use self::transition::Transition;
use crate::Direction;
use crate::config::Config;
use crate::graph::Diagram;
use crate::style::Style;

/// Keyword revision emitted at the top of the diagram body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateVersion {
    V1,
    #[default]
    V2,
}

impl StateVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateVersion::V1 => "stateDiagram",
            StateVersion::V2 => "stateDiagram-v2",
        }
    }
}

impl fmt::Display for StateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `stateDiagram` built from states and transitions.
#[derive(Debug, Clone)]
pub struct StateDiagram {
    pub title: String,
    pub states: Vec<StateItem>,
    pub transitions: Vec<Transition>,
    pub version: StateVersion,
    pub direction: Option<Direction>,
    pub config: Option<Config>,
}

impl StateDiagram {
    pub fn new(
        title: impl Into<String>,
        states: impl IntoIterator<Item = StateItem>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        Self {
            title: title.into(),
            states: states.into_iter().collect(),
            transitions: transitions.into_iter().collect(),
            version: StateVersion::default(),
            direction: None,
            config: None,
        }
    }

    pub fn with_version(mut self, version: StateVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Styles referenced by any state, deduplicated in first-use order.
    fn styles(&self) -> IndexSet<Style> {
        self.states
            .iter()
            .flat_map(|state| state.styles().iter().cloned())
            .collect()
    }
}

impl Diagram for StateDiagram {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        let _ = write!(out, "\n{}", self.version);
        if let Some(direction) = self.direction {
            let _ = write!(out, "\n\tdirection {direction}");
        }
        for style in self.styles() {
            let _ = write!(out, "\n\t{style}");
        }
        for state in &self.states {
            let _ = write!(out, "\n\t{state}");
        }
        for transition in &self.transitions {
            let _ = write!(out, "\n\t{transition}");
        }
        out.push('\n');
    }
}
