//! User journeys: scored tasks grouped into sections.

use std::fmt;
use std::fmt::Write;

use crate::config::Config;
use crate::graph::Diagram;

/// Someone taking part in a journey task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyActor {
    pub name: String,
}

impl JourneyActor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single step with its satisfaction score and actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub score: u8,
    pub actors: Vec<JourneyActor>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        score: u8,
        actors: impl IntoIterator<Item = JourneyActor>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            actors: actors.into_iter().collect(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actors = self
            .actors
            .iter()
            .map(|actor| actor.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "\t\t{}: {} : {}", self.name, self.score, actors)
    }
}

/// A named group of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Section {
    pub fn new(name: impl Into<String>, tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            name: name.into(),
            tasks: tasks.into_iter().collect(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tsection {}", self.name)?;
        for task in &self.tasks {
            writeln!(f, "{task}")?;
        }
        Ok(())
    }
}

/// One entry of a journey, either a section or a bare task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyItem {
    Section(Section),
    Task(Task),
}

impl fmt::Display for JourneyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyItem::Section(item) => item.fmt(f),
            JourneyItem::Task(item) => item.fmt(f),
        }
    }
}

impl From<Section> for JourneyItem {
    fn from(section: Section) -> Self {
        JourneyItem::Section(section)
    }
}

impl From<Task> for JourneyItem {
    fn from(task: Task) -> Self {
        JourneyItem::Task(task)
    }
}

/// A `journey` diagram.
#[derive(Debug, Clone)]
pub struct UserJourney {
    pub title: String,
    pub sections: Vec<JourneyItem>,
    pub config: Option<Config>,
}

impl UserJourney {
    pub fn new(title: impl Into<String>, sections: impl IntoIterator<Item = JourneyItem>) -> Self {
        Self {
            title: title.into(),
            sections: sections.into_iter().collect(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for UserJourney {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        let _ = write!(out, "\njourney\n\ttitle {}\n", self.title);
        for section in &self.sections {
            let _ = writeln!(out, "{section}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Theme;

    #[test]
    fn task_with_one_actor() {
        let task = Task::new("Make tea", 5, [JourneyActor::new("Me")]);
        assert_eq!(task.to_string(), "\t\tMake tea: 5 : Me");
    }

    #[test]
    fn task_with_several_actors() {
        let task = Task::new("Make tea", 5, [JourneyActor::new("Me"), JourneyActor::new("Cat")]);
        assert_eq!(task.to_string(), "\t\tMake tea: 5 : Me, Cat");
    }

    #[test]
    fn section_lists_tasks() {
        let actors = [JourneyActor::new("Me"), JourneyActor::new("Cat")];
        let section = Section::new(
            "My working day",
            [
                Task::new("Make tea1", 5, actors.clone()),
                Task::new("Make tea2", 5, actors),
            ],
        );
        let expected = concat!(
            "\tsection My working day\n",
            "\t\tMake tea1: 5 : Me, Cat\n",
            "\t\tMake tea2: 5 : Me, Cat\n",
        );
        assert_eq!(section.to_string(), expected);
    }

    #[test]
    fn journey_with_bare_tasks() {
        let actors = [JourneyActor::new("Me"), JourneyActor::new("Cat")];
        let journey = UserJourney::new(
            "simple user journey",
            [
                Task::new("Make tea1", 5, actors.clone()).into(),
                Task::new("Make tea2", 5, actors).into(),
            ],
        );
        let expected = concat!(
            "---\n",
            "title: simple user journey\n",
            "---\n",
            "journey\n",
            "\ttitle simple user journey\n",
            "\t\tMake tea1: 5 : Me, Cat\n",
            "\t\tMake tea2: 5 : Me, Cat\n",
        );
        assert_eq!(journey.script(), expected);
    }

    #[test]
    fn journey_with_sections() {
        let actors = [JourneyActor::new("Me"), JourneyActor::new("Cat")];
        let journey = UserJourney::new(
            "simple user journey",
            [
                Section::new(
                    "section-1",
                    [
                        Task::new("Make tea1", 5, actors.clone()),
                        Task::new("Make tea2", 5, actors.clone()),
                    ],
                )
                .into(),
                Section::new(
                    "section-2",
                    [
                        Task::new("Make tea1", 5, actors.clone()),
                        Task::new("Make tea2", 5, actors),
                    ],
                )
                .into(),
            ],
        );
        let expected = concat!(
            "---\n",
            "title: simple user journey\n",
            "---\n",
            "journey\n",
            "\ttitle simple user journey\n",
            "\tsection section-1\n",
            "\t\tMake tea1: 5 : Me, Cat\n",
            "\t\tMake tea2: 5 : Me, Cat\n",
            "\n",
            "\tsection section-2\n",
            "\t\tMake tea1: 5 : Me, Cat\n",
            "\t\tMake tea2: 5 : Me, Cat\n",
            "\n",
        );
        assert_eq!(journey.script(), expected);
    }

    #[test]
    fn journey_with_config() {
        let journey = UserJourney::new("simple user journey", [])
            .with_config(Config::new(Theme::Forest));
        let expected = concat!(
            "---\n",
            "title: simple user journey\n",
            "---\n",
            "%%{\n",
            "\tinit: {\n",
            "\t\t\"theme\": \"forest\",\n",
            "\t\t\"themeVariables\": {\n",
            "\t\t}\n",
            "\t}\n",
            "}%%\n",
            "\n",
            "journey\n",
            "\ttitle simple user journey\n",
        );
        assert_eq!(journey.script(), expected);
    }
}
