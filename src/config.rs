//! The `%%{init: ...}%%` directive rendered ahead of a diagram body.

use std::fmt;

/// Built-in mermaid color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Forest,
    Dark,
    Neutral,
    Base,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Forest => "forest",
            Theme::Dark => "dark",
            Theme::Neutral => "neutral",
            Theme::Base => "base",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme and theme-variable overrides for a single diagram.
///
/// Renders as the tab-indented init directive mermaid expects; only the
/// variables that are set appear in the `themeVariables` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub primary_color: Option<String>,
    pub primary_text_color: Option<String>,
    pub primary_border_color: Option<String>,
    pub line_color: Option<String>,
    pub secondary_color: Option<String>,
    pub tertiary_color: Option<String>,
}

impl Config {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "%%{{\n\tinit: {{\n\t\t\"theme\": \"{}\",\n\t\t\"themeVariables\": {{\n",
            self.theme
        )?;
        let variables = [
            ("primaryColor", &self.primary_color),
            ("primaryTextColor", &self.primary_text_color),
            ("primaryBorderColor", &self.primary_border_color),
            ("lineColor", &self.line_color),
            ("secondaryColor", &self.secondary_color),
            ("tertiaryColor", &self.tertiary_color),
        ];
        let mut first = true;
        for (key, value) in variables {
            if let Some(value) = value {
                if !first {
                    f.write_str(",\n")?;
                }
                write!(f, "\t\t\t\"{key}\": \"{value}\"")?;
                first = false;
            }
        }
        if !first {
            f.write_str("\n")?;
        }
        f.write_str("\t\t}\n\t}\n}%%\n")
    }
}
