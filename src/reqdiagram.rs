//! Requirement diagrams linking requirements to the elements satisfying them.

use std::fmt;
use std::fmt::Write;

use crate::config::Config;
use crate::graph::Diagram;

/// Risk level of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
        }
    }
}

impl From<Risk> for String {
    fn from(risk: Risk) -> Self {
        risk.as_str().to_string()
    }
}

/// How a requirement is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMethod {
    Analysis,
    Inspection,
    Test,
    Demonstration,
}

impl VerifyMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyMethod::Analysis => "Analysis",
            VerifyMethod::Inspection => "Inspection",
            VerifyMethod::Test => "Test",
            VerifyMethod::Demonstration => "Demonstration",
        }
    }
}

impl From<VerifyMethod> for String {
    fn from(method: VerifyMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Requirement category keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    Requirement,
    Functional,
    Interface,
    Performance,
    Physical,
    DesignConstraint,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKind::Requirement => "requirement",
            RequirementKind::Functional => "functionalRequirement",
            RequirementKind::Interface => "interfaceRequirement",
            RequirementKind::Performance => "performanceRequirement",
            RequirementKind::Physical => "physicalRequirement",
            RequirementKind::DesignConstraint => "designConstraint",
        }
    }
}

impl From<RequirementKind> for String {
    fn from(kind: RequirementKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Anything a [`Link`] can connect.
pub trait Named {
    fn name(&self) -> &str;
}

/// A requirement block.
///
/// Kind, risk and verify method accept the matching enum or any free-form
/// string, which passes through to the script verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub id: String,
    pub name: String,
    pub text: String,
    pub kind: String,
    pub risk: String,
    pub verify_method: String,
}

impl Requirement {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
        kind: impl Into<String>,
        risk: impl Into<String>,
        verify_method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            kind: kind.into(),
            risk: risk.into(),
            verify_method: verify_method.into(),
        }
    }
}

impl Named for Requirement {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {{", self.kind, self.name)?;
        writeln!(f, "\tid: {}", self.id)?;
        writeln!(f, "\ttext: {}", self.text)?;
        writeln!(f, "\trisk: {}", self.risk)?;
        writeln!(f, "\tverifymethod: {}", self.verify_method)?;
        writeln!(f, "}}")
    }
}

/// An element block, optionally pointing at a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub kind: String,
    pub doc_ref: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            doc_ref: None,
        }
    }

    pub fn with_doc_ref(mut self, doc_ref: impl Into<String>) -> Self {
        self.doc_ref = Some(doc_ref.into());
        self
    }
}

impl Named for Element {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "element {} {{", self.name)?;
        writeln!(f, "\ttype: \"{}\"", self.kind)?;
        if let Some(doc_ref) = &self.doc_ref {
            writeln!(f, "\tdocRef: {doc_ref}")?;
        }
        writeln!(f, "}}")
    }
}

/// A relationship line such as `a - traces -> b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub source: String,
    pub destination: String,
    pub kind: String,
}

impl Link {
    pub fn new(source: &impl Named, destination: &impl Named, kind: impl Into<String>) -> Self {
        Self {
            source: source.name().to_string(),
            destination: destination.name().to_string(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} -> {}", self.source, self.kind, self.destination)
    }
}

/// A `requirementDiagram`.
#[derive(Debug, Clone)]
pub struct RequirementDiagram {
    pub title: String,
    pub elements: Vec<Element>,
    pub requirements: Vec<Requirement>,
    pub links: Vec<Link>,
    pub config: Option<Config>,
}

impl RequirementDiagram {
    pub fn new(
        title: impl Into<String>,
        elements: impl IntoIterator<Item = Element>,
        requirements: impl IntoIterator<Item = Requirement>,
        links: impl IntoIterator<Item = Link>,
    ) -> Self {
        Self {
            title: title.into(),
            elements: elements.into_iter().collect(),
            requirements: requirements.into_iter().collect(),
            links: links.into_iter().collect(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for RequirementDiagram {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        out.push_str("\nrequirementDiagram\n");
        for element in &self.elements {
            let _ = writeln!(out, "{element}");
        }
        for requirement in &self.requirements {
            let _ = writeln!(out, "{requirement}");
        }
        for link in &self.links {
            let _ = writeln!(out, "{link}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn requirement_from_strings() {
        let requirement =
            Requirement::new("1", "test_req", "the test text.", "requirement", "high", "Test");
        let expected = concat!(
            "requirement test_req {\n",
            "\tid: 1\n",
            "\ttext: the test text.\n",
            "\trisk: high\n",
            "\tverifymethod: Test\n",
            "}\n",
        );
        assert_eq!(requirement.to_string(), expected);
    }

    #[test]
    fn requirement_from_enums() {
        let requirement = Requirement::new(
            "1",
            "test_req",
            "the test text.",
            RequirementKind::Interface,
            Risk::Low,
            VerifyMethod::Analysis,
        );
        let expected = concat!(
            "interfaceRequirement test_req {\n",
            "\tid: 1\n",
            "\ttext: the test text.\n",
            "\trisk: Low\n",
            "\tverifymethod: Analysis\n",
            "}\n",
        );
        assert_eq!(requirement.to_string(), expected);
    }

    #[test]
    fn element_with_doc_ref() {
        let element = Element::new("test_entity", "simulation").with_doc_ref("/test/test_....py");
        let expected = concat!(
            "element test_entity {\n",
            "\ttype: \"simulation\"\n",
            "\tdocRef: /test/test_....py\n",
            "}\n",
        );
        assert_eq!(element.to_string(), expected);
    }

    #[test]
    fn element_without_doc_ref() {
        let element = Element::new("test_entity", "simulation");
        let expected = concat!("element test_entity {\n", "\ttype: \"simulation\"\n", "}\n");
        assert_eq!(element.to_string(), expected);
    }

    #[test]
    fn link_between_element_and_requirement() {
        let element = Element::new("test_entity", "simulation");
        let requirement =
            Requirement::new("1", "test_req", "text", "requirement", "high", "Test");
        let link = Link::new(&element, &requirement, "traces");
        assert_eq!(link.to_string(), "test_entity - traces -> test_req");
    }

    #[test]
    fn link_between_requirements() {
        let first = Requirement::new("1", "test_req", "text", "requirement", "high", "Test");
        let second = Requirement::new("2", "test_req2", "text", "requirement", "high", "Test");
        let link = Link::new(&first, &second, "contains");
        assert_eq!(link.to_string(), "test_req - contains -> test_req2");
    }

    fn sample_diagram() -> RequirementDiagram {
        let elements = [
            Element::new("test_entity_1", "simulation"),
            Element::new("test_entity_2", "simulation"),
        ];
        let requirements = [
            Requirement::new(
                "1.1",
                "test_req_1",
                "the test text.",
                "requirement",
                "high",
                "Test",
            ),
            Requirement::new(
                "1.2",
                "test_req_2",
                "the test text.",
                "requirement",
                "high",
                "Test",
            ),
        ];
        let links = [
            Link::new(&elements[0], &requirements[0], "traces"),
            Link::new(&elements[1], &requirements[1], "traces"),
            Link::new(&requirements[0], &requirements[1], "contains"),
        ];
        RequirementDiagram::new("simple requirement", elements, requirements, links)
    }

    const SAMPLE_BODY: &str = concat!(
        "requirementDiagram\n",
        "element test_entity_1 {\n",
        "\ttype: \"simulation\"\n",
        "}\n",
        "\n",
        "element test_entity_2 {\n",
        "\ttype: \"simulation\"\n",
        "}\n",
        "\n",
        "requirement test_req_1 {\n",
        "\tid: 1.1\n",
        "\ttext: the test text.\n",
        "\trisk: high\n",
        "\tverifymethod: Test\n",
        "}\n",
        "\n",
        "requirement test_req_2 {\n",
        "\tid: 1.2\n",
        "\ttext: the test text.\n",
        "\trisk: high\n",
        "\tverifymethod: Test\n",
        "}\n",
        "\n",
        "test_entity_1 - traces -> test_req_1\n",
        "test_entity_2 - traces -> test_req_2\n",
        "test_req_1 - contains -> test_req_2\n",
    );

    #[test]
    fn diagram_script() {
        let expected = format!("---\ntitle: simple requirement\n---\n{SAMPLE_BODY}");
        assert_eq!(sample_diagram().script(), expected);
    }

    #[test]
    fn diagram_script_with_config() {
        let diagram = sample_diagram().with_config(Config {
            primary_color: Some("red".to_string()),
            ..Config::default()
        });
        let header = concat!(
            "---\n",
            "title: simple requirement\n",
            "---\n",
            "%%{\n",
            "\tinit: {\n",
            "\t\t\"theme\": \"default\",\n",
            "\t\t\"themeVariables\": {\n",
            "\t\t\t\"primaryColor\": \"red\"\n",
            "\t\t}\n",
            "\t}\n",
            "}%%\n",
            "\n",
        );
        let expected = format!("{header}{SAMPLE_BODY}");
        assert_eq!(diagram.script(), expected);
    }
}
