//! Timeline diagrams.

use std::fmt::Write;

use crate::config::Config;
use crate::graph::Diagram;

/// One period on the timeline and what happened in it.
///
/// Several happenings can share the period by separating them with
/// `" : "` in the description; each gets its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub period: String,
    pub description: String,
}

impl Event {
    pub fn new(period: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            description: description.into(),
        }
    }
}

/// A timeline of events in author order.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub title: String,
    pub events: Vec<Event>,
    pub config: Option<Config>,
}

impl Timeline {
    pub fn new(title: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            title: title.into(),
            events,
            config: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for Timeline {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        out.push_str("\ntimeline");
        for event in &self.events {
            for description in event.description.split(" : ") {
                let _ = write!(out, "\n\t{} : {}", event.period, description);
            }
        }
        out.push('\n');
    }
}
