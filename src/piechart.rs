//! Pie chart diagrams.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::config::Config;
use crate::graph::Diagram;

/// A pie chart over labeled slices, kept in author order.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub data: IndexMap<String, f64>,
    pub show_data: bool,
    pub config: Option<Config>,
}

impl PieChart {
    pub fn new<S, I>(title: impl Into<String>, data: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self {
            title: title.into(),
            data: data
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
            show_data: false,
            config: None,
        }
    }

    /// Append the raw value after each label in the rendered chart.
    pub fn show_data(mut self) -> Self {
        self.show_data = true;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

impl Diagram for PieChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    fn write_body(&self, out: &mut String) {
        out.push_str("\npie");
        if self.show_data {
            out.push_str(" showData");
        }
        for (label, value) in &self.data {
            let _ = write!(out, "\n\t\"{label}\" : {value}");
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minerals() -> Vec<(&'static str, f64)> {
        vec![
            ("Calcium", 42.96),
            ("Potassium", 50.05),
            ("Magnesium", 10.01),
            ("Iron", 5.0),
        ]
    }

    #[test]
    fn piechart_without_show_data() {
        let pie = PieChart::new("simple pie chart", minerals());
        let expected = concat!(
            "---\n",
            "title: simple pie chart\n",
            "---\n",
            "pie\n",
            "\t\"Calcium\" : 42.96\n",
            "\t\"Potassium\" : 50.05\n",
            "\t\"Magnesium\" : 10.01\n",
            "\t\"Iron\" : 5\n",
        );
        assert_eq!(pie.script(), expected);
    }

    #[test]
    fn piechart_with_show_data() {
        let pie = PieChart::new("simple pie chart", minerals()).show_data();
        let expected = concat!(
            "---\n",
            "title: simple pie chart\n",
            "---\n",
            "pie showData\n",
            "\t\"Calcium\" : 42.96\n",
            "\t\"Potassium\" : 50.05\n",
            "\t\"Magnesium\" : 10.01\n",
            "\t\"Iron\" : 5\n",
        );
        assert_eq!(pie.script(), expected);
    }

    #[test]
    fn piechart_with_config() {
        let config = Config {
            primary_color: Some("red".to_string()),
            ..Config::default()
        };
        let pie = PieChart::new("simple pie chart", minerals())
            .show_data()
            .with_config(config);
        let expected = concat!(
            "---\n",
            "title: simple pie chart\n",
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
            "pie showData\n",
            "\t\"Calcium\" : 42.96\n",
            "\t\"Potassium\" : 50.05\n",
            "\t\"Magnesium\" : 10.01\n",
            "\t\"Iron\" : 5\n",
        );
        assert_eq!(pie.script(), expected);
    }
}
