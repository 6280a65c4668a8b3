//! States, composites and the pseudo-states around them.

use std::fmt;

use super::transition::Transition;
use crate::Direction;
use crate::style::Style;
use crate::util::slugify;

/// Anything a transition can reference.
pub trait StateNode {
    /// Identifier used on transition lines.
    fn id(&self) -> &str;
}

/// The `[*]` entry marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Start;

impl StateNode for Start {
    fn id(&self) -> &str {
        "[*]"
    }
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[*]")
    }
}

/// The `[*]` exit marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct End;

impl StateNode for End {
    fn id(&self) -> &str {
        "[*]"
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[*]")
    }
}

/// A plain state with a slugified id and display content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: String,
    pub content: String,
    pub styles: Vec<Style>,
}

impl State {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            content: name.to_string(),
            styles: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.styles.extend(styles);
        self
    }
}

impl StateNode for State {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.id, self.content)?;
        for style in &self.styles {
            write!(f, "\n{}:::{}", self.id, style.name)?;
        }
        Ok(())
    }
}

/// A state holding nested states and transitions.
#[derive(Debug, Clone)]
pub struct Composite {
    pub state: State,
    pub sub_states: Vec<StateItem>,
    pub transitions: Vec<Transition>,
    pub direction: Option<Direction>,
}

impl Composite {
    pub fn new(name: &str) -> Self {
        Self {
            state: State::new(name),
            sub_states: Vec::new(),
            transitions: Vec::new(),
            direction: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.state.content = content.into();
        self
    }

    pub fn with_sub_states(mut self, sub_states: impl IntoIterator<Item = StateItem>) -> Self {
        self.sub_states.extend(sub_states);
        self
    }

    pub fn with_transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.state.styles.extend(styles);
        self
    }
}

impl StateNode for Composite {
    fn id(&self) -> &str {
        &self.state.id
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)?;
        if self.sub_states.is_empty() {
            return Ok(());
        }
        write!(f, "\nstate {} {{", self.state.id)?;
        if let Some(direction) = self.direction {
            write!(f, "\n\tdirection {direction}")?;
        }
        for sub_state in &self.sub_states {
            write!(f, "\n\t{sub_state}")?;
        }
        for transition in &self.transitions {
            write!(f, "\n\t{transition}")?;
        }
        f.write_str("\n}")
    }
}

/// A state split into concurrently active groups, separated by `--`.
#[derive(Debug, Clone)]
pub struct Concurrent {
    pub state: State,
    pub sub_groups: Vec<(Vec<StateItem>, Vec<Transition>)>,
}

impl Concurrent {
    pub fn new(name: &str) -> Self {
        Self {
            state: State::new(name),
            sub_groups: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.state.content = content.into();
        self
    }

    pub fn with_group(
        mut self,
        states: impl IntoIterator<Item = StateItem>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        self.sub_groups
            .push((states.into_iter().collect(), transitions.into_iter().collect()));
        self
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.state.styles.extend(styles);
        self
    }
}

impl StateNode for Concurrent {
    fn id(&self) -> &str {
        &self.state.id
    }
}

impl fmt::Display for Concurrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)?;
        if self.sub_groups.is_empty() {
            return Ok(());
        }
        write!(f, "\nstate {} {{", self.state.id)?;
        for (index, (states, transitions)) in self.sub_groups.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\t--")?;
            }
            for state in states {
                write!(f, "\n\t{state}")?;
            }
            for transition in transitions {
                write!(f, "\n\t{transition}")?;
            }
        }
        f.write_str("\n}")
    }
}

/// A `<<choice>>` pseudo-state fanning out along conditions.
#[derive(Debug, Clone)]
pub struct Choice {
    pub id: String,
    pub from: Option<String>,
    /// Outgoing targets with their optional condition labels.
    pub branches: Vec<(String, Option<String>)>,
}

impl Choice {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            from: None,
            branches: Vec::new(),
        }
    }

    pub fn with_from(mut self, from: &impl StateNode) -> Self {
        self.from = Some(from.id().to_string());
        self
    }

    pub fn with_branch(mut self, to: &impl StateNode, condition: Option<&str>) -> Self {
        self.branches
            .push((to.id().to_string(), condition.map(str::to_string)));
        self
    }
}

impl StateNode for Choice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} <<choice>>", self.id)?;
        if let Some(from) = &self.from {
            write!(f, "\n{} --> {}", from, self.id)?;
        }
        for (to, condition) in &self.branches {
            write!(f, "\n{} --> {}", self.id, to)?;
            if let Some(condition) = condition {
                write!(f, " : {condition}")?;
            }
        }
        Ok(())
    }
}

/// A `<<fork>>` pseudo-state splitting one flow into several.
#[derive(Debug, Clone)]
pub struct Fork {
    pub id: String,
    pub from: Option<String>,
    pub to: Vec<String>,
}

impl Fork {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            from: None,
            to: Vec::new(),
        }
    }

    pub fn with_from(mut self, from: &impl StateNode) -> Self {
        self.from = Some(from.id().to_string());
        self
    }

    pub fn with_to(mut self, to: &impl StateNode) -> Self {
        self.to.push(to.id().to_string());
        self
    }
}

impl StateNode for Fork {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} <<fork>>", self.id)?;
        if let Some(from) = &self.from {
            write!(f, "\n{} --> {}", from, self.id)?;
        }
        for to in &self.to {
            write!(f, "\n{} --> {}", self.id, to)?;
        }
        Ok(())
    }
}

/// A `<<join>>` pseudo-state merging several flows into one.
#[derive(Debug, Clone)]
pub struct Join {
    pub id: String,
    pub from: Vec<String>,
    pub to: Option<String>,
}

impl Join {
    pub fn new(name: &str) -> Self {
        Self {
            id: slugify(name),
            from: Vec::new(),
            to: None,
        }
    }

    pub fn with_from(mut self, from: &impl StateNode) -> Self {
        self.from.push(from.id().to_string());
        self
    }

    pub fn with_to(mut self, to: &impl StateNode) -> Self {
        self.to = Some(to.id().to_string());
        self
    }
}

impl StateNode for Join {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} <<join>>", self.id)?;
        for from in &self.from {
            write!(f, "\n{} --> {}", from, self.id)?;
        }
        if let Some(to) = &self.to {
            write!(f, "\n{} --> {}", self.id, to)?;
        }
        Ok(())
    }
}

/// One entry in a state diagram or composite body.
#[derive(Debug, Clone)]
pub enum StateItem {
    State(State),
    Start(Start),
    End(End),
    Composite(Composite),
    Concurrent(Concurrent),
    Choice(Choice),
    Fork(Fork),
    Join(Join),
}

impl StateItem {
    /// Styles contributed to the diagram-level `classDef` block.
    pub(super) fn styles(&self) -> &[Style] {
        match self {
            StateItem::State(state) => &state.styles,
            StateItem::Composite(composite) => &composite.state.styles,
            StateItem::Concurrent(concurrent) => &concurrent.state.styles,
            _ => &[],
        }
    }
}

impl fmt::Display for StateItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateItem::State(item) => item.fmt(f),
            StateItem::Start(item) => item.fmt(f),
            StateItem::End(item) => item.fmt(f),
            StateItem::Composite(item) => item.fmt(f),
            StateItem::Concurrent(item) => item.fmt(f),
            StateItem::Choice(item) => item.fmt(f),
            StateItem::Fork(item) => item.fmt(f),
            StateItem::Join(item) => item.fmt(f),
        }
    }
}

macro_rules! state_item_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for StateItem {
                fn from(item: $variant) -> Self {
                    StateItem::$variant(item)
                }
            }
        )+
    };
}

state_item_from!(State, Start, End, Composite, Concurrent, Choice, Fork, Join);
