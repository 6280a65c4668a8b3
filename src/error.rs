//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for nereid operations.
#[derive(Error, Debug)]
pub enum NereidError {
    /// Reading or writing a script or artifact failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The mermaid.ink request could not be performed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mermaid.ink server answered outside the 2xx range.
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// A site theme file could not be parsed.
    #[error("theme parse error: {0}")]
    ThemeParse(#[from] toml::de::Error),

    /// Serializing a record to JSON failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scripts are saved as `.mmd` or `.mermaid` only.
    #[error("file extension must be .mmd or .mermaid, got {0}")]
    InvalidExtension(PathBuf),

    /// mermaid.ink accepts scale factors between 1 and 3.
    #[error("scale must be between 1 and 3, got {0}")]
    ScaleOutOfRange(f64),

    /// A scale factor is only meaningful next to a width or height.
    #[error("scale requires a width or a height")]
    ScaleWithoutDimensions,

    /// Notes spanning several members support the `over` placement only.
    #[error("a note across multiple members must be placed over them")]
    NoteSpan,
}

/// Result type alias for nereid operations.
pub type Result<T> = std::result::Result<T, NereidError>;
