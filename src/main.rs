use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use notify::{RecursiveMode, Watcher, recommended_watcher};
use walkdir::WalkDir;

use nereid::docsite::{Position, SiteTheme};
use nereid::ink::{InkClient, RenderOptions};
use nereid::load;

#[derive(Parser)]
#[command(author, version, about = "nereid - render Mermaid scripts through mermaid.ink.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Render script files or directories of them.
    Render {
        /// `.mmd`/`.mermaid` files, or directories scanned for them.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[command(flatten)]
        options: RenderArgs,
    },
    /// Render once, then re-render whenever the input changes.
    Watch {
        /// A script file or a directory of scripts.
        input: PathBuf,
        #[command(flatten)]
        options: RenderArgs,
    },
}

#[derive(Args, Clone)]
struct RenderArgs {
    /// Output directory; artifacts land next to each input when unset.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "svg")]
    format: Format,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Zoom factor between 1 and 3; needs --width or --height.
    #[arg(long)]
    scale: Option<f64>,

    /// Diagram alignment in HTML output: left, right, center or none.
    #[arg(long, default_value = "none")]
    position: Position,

    /// mermaid.ink server address, MERMAID_INK_SERVER or the public
    /// instance when unset.
    #[arg(long)]
    server: Option<String>,

    /// Site theme TOML used for HTML output.
    #[arg(long)]
    theme: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Png,
    Html,
}

impl Format {
    fn extension(&self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
            Format::Html => "html",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { inputs, options } => {
            let files = collect_inputs(&inputs)?;
            let renderer = Renderer::new(&options)?;
            let failed = renderer.render_all(&files, &options, cli.verbose).await;
            if failed > 0 {
                anyhow::bail!("{} of {} inputs failed", failed, files.len());
            }
            println!(
                "{} rendered {} file(s) in {:.2}s.",
                style("success").cyan(),
                files.len(),
                start.elapsed().as_secs_f32()
            );
        }
        Commands::Watch { input, options } => {
            println!("nereid watch v{}", env!("CARGO_PKG_VERSION"));
            let renderer = Renderer::new(&options)?;
            let files = collect_inputs(std::slice::from_ref(&input))?;
            renderer.render_all(&files, &options, cli.verbose).await;
            println!(
                "{}",
                style(format!("watching {} for changes...", input.display())).yellow()
            );

            let (tx, rx) = mpsc::channel();
            let mut watcher = recommended_watcher(move |res: notify::Result<notify::Event>| {
                if let Ok(event) = res {
                    if event.kind.is_modify() {
                        let _ = tx.send(event);
                    }
                }
            })?;
            watcher.watch(&input, RecursiveMode::Recursive)?;

            while rx.recv().is_ok() {
                // editors fire several events per save; settle, then drain
                tokio::time::sleep(Duration::from_millis(200)).await;
                while rx.try_recv().is_ok() {}

                match collect_inputs(std::slice::from_ref(&input)) {
                    Ok(files) => {
                        renderer.render_all(&files, &options, cli.verbose).await;
                    }
                    Err(error) => eprintln!("{} {:#}", style("error").red(), error),
                }
            }
        }
    }
    Ok(())
}

/// The render pipeline shared by both subcommands: one ink client and one
/// site theme, applied to every input.
struct Renderer {
    client: InkClient,
    theme: SiteTheme,
}

impl Renderer {
    fn new(args: &RenderArgs) -> anyhow::Result<Self> {
        let client = match &args.server {
            Some(server) => InkClient::with_server(server),
            None => InkClient::new(),
        };
        let theme = match &args.theme {
            Some(path) => SiteTheme::load(path)
                .with_context(|| format!("reading theme {}", path.display()))?,
            None => SiteTheme::default(),
        };
        Ok(Self { client, theme })
    }

    /// Render every file, reporting progress; returns the failure count.
    async fn render_all(&self, files: &[PathBuf], args: &RenderArgs, verbose: bool) -> usize {
        let total = files.len();
        let mut failed = 0;
        for (index, file) in files.iter().enumerate() {
            println!(
                "{} {}",
                style(format!("[{}/{}]", index + 1, total)).dim(),
                file.display()
            );
            match self.render_file(file, args).await {
                Ok(output) => {
                    if verbose {
                        println!("{} {}", style("  wrote").dim(), output.display());
                    }
                }
                Err(error) => {
                    eprintln!("{} {}: {:#}", style("error").red(), file.display(), error);
                    failed += 1;
                }
            }
        }
        failed
    }

    async fn render_file(&self, input: &Path, args: &RenderArgs) -> anyhow::Result<PathBuf> {
        let graph = load(input).with_context(|| format!("loading {}", input.display()))?;
        let options = RenderOptions {
            width: args.width,
            height: args.height,
            scale: args.scale,
        };
        let output = output_path(input, args);
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        match args.format {
            Format::Svg => {
                let svg = self.client.fetch_svg(&graph, &options).await?;
                std::fs::write(&output, svg)?;
            }
            Format::Png => {
                let png = self.client.fetch_png(&graph, &options).await?;
                std::fs::write(&output, png)?;
            }
            Format::Html => {
                let svg = self.client.fetch_svg(&graph, &options).await?;
                let page = self.theme.render_page(&graph.title, &svg, args.position);
                std::fs::write(&output, page)?;
            }
        }
        Ok(output)
    }
}

/// Expand files and directories into the list of scripts to render.
///
/// Explicit files are taken as given; directories are scanned recursively
/// for `.mmd`/`.mermaid` files in name order.
fn collect_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_script(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if input.exists() {
            files.push(input.clone());
        } else {
            anyhow::bail!("input not found: {}", input.display());
        }
    }
    if files.is_empty() {
        anyhow::bail!("no .mmd or .mermaid files found in the given inputs");
    }
    Ok(files)
}

fn is_script(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("mmd" | "mermaid")
    )
}

/// Where the artifact for `input` goes: under `--out` when set, otherwise
/// next to the input, always with the format's extension.
fn output_path(input: &Path, args: &RenderArgs) -> PathBuf {
    let extension = args.format.extension();
    match &args.out {
        Some(dir) => {
            let stem = input.file_stem().unwrap_or_default();
            dir.join(stem).with_extension(extension)
        }
        None => input.with_extension(extension),
    }
}
