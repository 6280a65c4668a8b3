//! Async client for the mermaid.ink rendering service.
//!
//! The service renders a base64-encoded script fetched from
//! `/svg/{encoded}` or `/img/{encoded}`, with optional `width`, `height`
//! and `scale` query parameters.

use std::env;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use reqwest::Client;

use crate::error::{NereidError, Result};
use crate::graph::Graph;

/// Rendering service used when `MERMAID_INK_SERVER` is unset.
pub const DEFAULT_SERVER: &str = "https://mermaid.ink";

/// Pixel dimensions and zoom forwarded to the service.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Zoom factor, accepted between 1 and 3 and only together with a
    /// width or a height.
    pub scale: Option<f64>,
}

impl RenderOptions {
    pub fn validated(self) -> Result<Self> {
        if let Some(scale) = self.scale {
            if !(1.0..=3.0).contains(&scale) {
                return Err(NereidError::ScaleOutOfRange(scale));
            }
            if self.width.is_none() && self.height.is_none() {
                return Err(NereidError::ScaleWithoutDimensions);
            }
        }
        Ok(self)
    }

    /// `?key=value` query string, empty when nothing is set.
    fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(width) = self.width {
            params.push(format!("width={width}"));
        }
        if let Some(height) = self.height {
            params.push(format!("height={height}"));
        }
        if let Some(scale) = self.scale {
            params.push(format!("scale={scale}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Both renderings of one graph, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub svg: String,
    pub png: Vec<u8>,
}

impl Rendered {
    pub fn to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }

    pub fn to_png(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// Client for one mermaid.ink server.
#[derive(Debug, Clone)]
pub struct InkClient {
    server: String,
    client: Client,
}

impl InkClient {
    /// Client against `MERMAID_INK_SERVER`, or the public instance.
    pub fn new() -> Self {
        let server = env::var("MERMAID_INK_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        Self::with_server(server)
    }

    pub fn with_server(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            client: Client::new(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// URL-safe base64 of the script, padded, as the service expects.
    pub fn encode(graph: &Graph) -> String {
        URL_SAFE.encode(graph.script.as_bytes())
    }

    pub fn svg_url(&self, graph: &Graph, options: &RenderOptions) -> Result<String> {
        let options = options.validated()?;
        Ok(format!(
            "{}/svg/{}{}",
            self.server,
            Self::encode(graph),
            options.query()
        ))
    }

    pub fn png_url(&self, graph: &Graph, options: &RenderOptions) -> Result<String> {
        let options = options.validated()?;
        Ok(format!(
            "{}/img/{}{}",
            self.server,
            Self::encode(graph),
            options.query()
        ))
    }

    pub async fn fetch_svg(&self, graph: &Graph, options: &RenderOptions) -> Result<String> {
        let url = self.svg_url(graph, options)?;
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(NereidError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }

    pub async fn fetch_png(&self, graph: &Graph, options: &RenderOptions) -> Result<Vec<u8>> {
        let url = self.png_url(graph, options)?;
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(NereidError::Status {
                status: response.status().as_u16(),
                url,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn render(&self, graph: &Graph, options: &RenderOptions) -> Result<Rendered> {
        let svg = self.fetch_svg(graph, options).await?;
        let png = self.fetch_png(graph, options).await?;
        Ok(Rendered { svg, png })
    }
}

impl Default for InkClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_graph() -> Graph {
        let script = concat!(
            "graph TD;\n",
            "    A-->B;\n",
            "    A-->C;\n",
            "    B-->D;\n",
            "    C-->D;",
        );
        Graph::new("simple-graph", script)
    }

    #[test]
    fn encoding_is_url_safe_and_padded() {
        assert_eq!(
            InkClient::encode(&sample_graph()),
            "Z3JhcGggVEQ7CiAgICBBLS0-QjsKICAgIEEtLT5DOwogICAgQi0tPkQ7CiAgICBDLS0-RDs="
        );
        assert_eq!(
            InkClient::encode(&Graph::new("tiny", "flowchart LR")),
            "Zmxvd2NoYXJ0IExS"
        );
    }

    #[test]
    fn urls_without_options() {
        let client = InkClient::with_server("https://mermaid.ink");
        let graph = Graph::new("tiny", "flowchart LR");
        assert_eq!(
            client.svg_url(&graph, &RenderOptions::default()).unwrap(),
            "https://mermaid.ink/svg/Zmxvd2NoYXJ0IExS"
        );
        assert_eq!(
            client.png_url(&graph, &RenderOptions::default()).unwrap(),
            "https://mermaid.ink/img/Zmxvd2NoYXJ0IExS"
        );
    }

    #[test]
    fn urls_carry_set_options_only() {
        let client = InkClient::with_server("http://localhost:3000");
        let graph = Graph::new("tiny", "flowchart LR");
        let width_only = RenderOptions {
            width: Some(800),
            ..RenderOptions::default()
        };
        assert_eq!(
            client.svg_url(&graph, &width_only).unwrap(),
            "http://localhost:3000/svg/Zmxvd2NoYXJ0IExS?width=800"
        );
        let all = RenderOptions {
            width: Some(800),
            height: Some(600),
            scale: Some(1.5),
        };
        assert_eq!(
            client.png_url(&graph, &all).unwrap(),
            "http://localhost:3000/img/Zmxvd2NoYXJ0IExS?width=800&height=600&scale=1.5"
        );
    }

    #[test]
    fn scale_outside_bounds_is_rejected() {
        let low = RenderOptions {
            width: Some(800),
            scale: Some(0.5),
            ..RenderOptions::default()
        };
        assert!(matches!(
            low.validated(),
            Err(NereidError::ScaleOutOfRange(_))
        ));
        let high = RenderOptions {
            width: Some(800),
            scale: Some(3.5),
            ..RenderOptions::default()
        };
        assert!(matches!(
            high.validated(),
            Err(NereidError::ScaleOutOfRange(_))
        ));
    }

    #[test]
    fn scale_requires_a_dimension() {
        let scale_only = RenderOptions {
            scale: Some(2.0),
            ..RenderOptions::default()
        };
        assert!(matches!(
            scale_only.validated(),
            Err(NereidError::ScaleWithoutDimensions)
        ));
        let with_height = RenderOptions {
            height: Some(600),
            scale: Some(2.0),
            ..RenderOptions::default()
        };
        assert!(with_height.validated().is_ok());
    }

    #[test]
    fn rendered_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let rendered = Rendered {
            svg: "<svg></svg>".to_string(),
            png: vec![0x89, 0x50, 0x4e, 0x47],
        };
        let svg_path = dir.path().join("out.svg");
        let png_path = dir.path().join("out.png");
        rendered.to_svg(&svg_path).unwrap();
        rendered.to_png(&png_path).unwrap();
        assert_eq!(std::fs::read_to_string(&svg_path).unwrap(), "<svg></svg>");
        assert_eq!(std::fs::read(&png_path).unwrap(), rendered.png);
    }
}
