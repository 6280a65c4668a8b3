//! Docs-site presentation layer.
//!
//! This module handles the deserialization of a site theme file and the
//! minimal HTML wrapping used when a diagram is exported as a page. Every
//! field of the theme passes through to the output verbatim.

use std::fmt;
use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Horizontal alignment of an embedded diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
    Center,
    #[default]
    None,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Center => "center",
            Position::None => "none",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            "center" => Ok(Position::Center),
            "none" => Ok(Position::None),
            other => Err(format!("unknown position: {other}")),
        }
    }
}

/// The theme record for generated documentation pages.
///
/// The record is read once when a page is produced and never mutated.
/// No field is validated; content is the consumer's concern.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SiteTheme {
    /// Markup fragment rendered in the page header. Not escaped.
    #[serde(default = "default_logo")]
    pub logo: String,

    /// "View source" link shown in the header.
    pub project_link: Option<String>,

    /// Community chat link shown in the header.
    pub chat_link: Option<String>,

    /// Base address the per-page "edit" link points into.
    pub docs_repository_base: Option<String>,

    /// Line rendered in the page footer.
    pub footer_text: Option<String>,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            project_link: Some(default_project_link()),
            chat_link: Some(default_chat_link()),
            docs_repository_base: Some(default_docs_repository_base()),
            footer_text: Some(default_footer_text()),
        }
    }
}

impl SiteTheme {
    /// Parse a theme from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a theme file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Serialize the record for an external docs pipeline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Wrap a rendered SVG in a standalone documentation page.
    ///
    /// Header links and the footer only appear for fields that are set;
    /// what is set appears verbatim.
    pub fn render_page(&self, title: &str, svg: &str, position: Position) -> String {
        let mut page = String::new();
        page.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(page, "<title>{title}</title>");
        page.push_str("</head>\n<body>\n<header>\n");
        let _ = writeln!(page, "{}", self.logo);
        if let Some(link) = &self.project_link {
            let _ = writeln!(page, "<a href=\"{link}\">Source</a>");
        }
        if let Some(link) = &self.chat_link {
            let _ = writeln!(page, "<a href=\"{link}\">Chat</a>");
        }
        page.push_str("</header>\n<main>\n");
        let _ = writeln!(page, "{}", html_snippet(svg, position));
        page.push_str("</main>\n<footer>\n");
        if let Some(base) = &self.docs_repository_base {
            let _ = writeln!(page, "<a href=\"{base}\">Edit this page</a>");
        }
        if let Some(text) = &self.footer_text {
            let _ = writeln!(page, "<p>{text}</p>");
        }
        page.push_str("</footer>\n</body>\n</html>\n");
        page
    }
}

/// An SVG fragment, wrapped in an aligning `div` unless unpositioned.
pub fn html_snippet(svg: &str, position: Position) -> String {
    match position {
        Position::None => svg.to_string(),
        _ => format!("<div style=\"text-align:{position}\">{svg}</div>"),
    }
}

// --- Default value providers ---

fn default_logo() -> String { "<span>nereid</span>".to_string() }
fn default_project_link() -> String { "https://github.com/nereid-rs/nereid".to_string() }
fn default_chat_link() -> String { "https://discord.com".to_string() }
fn default_docs_repository_base() -> String { "https://github.com/nereid-rs/nereid/tree/main/docs".to_string() }
fn default_footer_text() -> String { "nereid docs".to_string() }
