//! Command-line interface for the phalanx-diagrams utility
//!
//! Renders the Phalanx secret installation diagrams through Graphviz, or
//! prints their DOT source and text outline.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use phalanx_diagrams::architectures::Catalog;
use phalanx_diagrams::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use phalanx_diagrams::graph::GraphvizBackend;
use phalanx_diagrams::OutputFormat;

/// Phalanx diagrams - render the secret installation architecture diagrams
#[derive(Parser)]
#[command(name = "phalanx-diagrams")]
#[command(about = "Render the Phalanx secret installation architecture diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Command to run; renders every diagram to PNG when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render diagrams to image files
    Render {
        /// Diagrams to render (default: all)
        names: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatChoice::Png)]
        format: FormatChoice,

        /// Directory the files are written to
        #[arg(short = 'd', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print the Graphviz DOT source of a diagram
    Dot {
        /// Diagram name
        name: String,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a text outline of a diagram
    Outline {
        /// Diagram name
        name: String,
    },

    /// List the available diagrams
    List {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported output formats
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatChoice {
    Png,
    Svg,
    Pdf,
    Jpg,
    Dot,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Png => OutputFormat::Png,
            FormatChoice::Svg => OutputFormat::Svg,
            FormatChoice::Pdf => OutputFormat::Pdf,
            FormatChoice::Jpg => OutputFormat::Jpg,
            FormatChoice::Dot => OutputFormat::Dot,
        }
    }
}

/// One row of `list --json`
#[derive(Serialize)]
struct ListEntry {
    name: String,
    title: String,
    description: String,
    output: String,
    nodes: usize,
    edges: usize,
    clusters: Vec<String>,
}

/// Main CLI application
pub struct DiagramsApp {
    catalog: Catalog,
    backend: GraphvizBackend,
}

impl DiagramsApp {
    /// Create an application with every diagram and the default Graphviz backend
    pub fn new() -> Self {
        Self::with_backend(GraphvizBackend::new())
    }

    /// Create an application with a specific Graphviz backend
    pub fn with_backend(backend: GraphvizBackend) -> Self {
        Self {
            catalog: Catalog::with_all_diagrams(),
            backend,
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("phalanx-diagrams v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            None => self.render_command(Vec::new(), FormatChoice::Png, Path::new("."), cli.verbose),
            Some(Commands::Render {
                names,
                format,
                output_dir,
            }) => self.render_command(names, format, &output_dir, cli.verbose),
            Some(Commands::Dot { name, output }) => self.dot_command(&name, output),
            Some(Commands::Outline { name }) => self.outline_command(&name),
            Some(Commands::List { json }) => self.list_command(json),
        }
    }

    /// Handle the render command
    fn render_command(
        &self,
        names: Vec<String>,
        format: FormatChoice,
        output_dir: &Path,
        verbose: bool,
    ) -> Result<()> {
        let format = OutputFormat::from(format);
        let names = if names.is_empty() {
            self.catalog
                .names()
                .into_iter()
                .map(String::from)
                .collect()
        } else {
            names
        };
        debug!(?names, %format, dir = %output_dir.display(), "Rendering diagrams");

        if format.needs_graphviz() && !self.backend.is_available() {
            return Err(anyhow!(
                "Graphviz executable '{}' not found; install Graphviz or set GRAPHVIZ_DOT",
                self.backend.executable().display()
            ));
        }

        for name in &names {
            let path = self
                .catalog
                .render(name, &self.backend, output_dir, Some(format))?;
            if verbose {
                eprintln!("Wrote {}", path.display());
            }
        }
        Ok(())
    }

    /// Handle the dot command
    fn dot_command(&self, name: &str, output: Option<PathBuf>) -> Result<()> {
        let dot = self.catalog.build(name)?.to_dot()?;
        self.write_output(output, &dot)
    }

    /// Handle the outline command
    fn outline_command(&self, name: &str) -> Result<()> {
        let outline = self.catalog.build(name)?.outline()?;
        self.write_output(None, &outline)
    }

    /// Handle the list command
    fn list_command(&self, json: bool) -> Result<()> {
        let entries = self.list_entries()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("Available diagrams:");
            for entry in &entries {
                println!(
                    "  {:<10} {} ({} nodes, {} edges) -> {}",
                    entry.name, entry.title, entry.nodes, entry.edges, entry.output
                );
            }
            println!();
            println!("Total: {} diagrams", entries.len());
        }

        Ok(())
    }

    fn list_entries(&self) -> Result<Vec<ListEntry>> {
        self.catalog
            .summaries()?
            .into_iter()
            .map(|summary| -> Result<ListEntry> {
                let description = self.catalog.get(&summary.name)?.description().to_string();
                Ok(ListEntry {
                    name: summary.name,
                    title: summary.title,
                    description,
                    output: summary.output,
                    nodes: summary.nodes,
                    edges: summary.edges,
                    clusters: summary.clusters,
                })
            })
            .collect()
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for DiagramsApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_no_command() {
        let cli = Cli::try_parse_from(["phalanx-diagrams"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_cli_parsing_render_command() {
        let args = [
            "phalanx-diagrams",
            "render",
            "starting",
            "--format",
            "svg",
            "--output-dir",
            "out",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Some(Commands::Render {
                names,
                format,
                output_dir,
            }) => {
                assert_eq!(names, vec!["starting".to_string()]);
                assert_eq!(format, FormatChoice::Svg);
                assert_eq!(output_dir, PathBuf::from("out"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parsing_render_defaults() {
        let cli = Cli::try_parse_from(["phalanx-diagrams", "render"]).unwrap();
        match cli.command {
            Some(Commands::Render {
                names,
                format,
                output_dir,
            }) => {
                assert!(names.is_empty());
                assert_eq!(format, FormatChoice::Png);
                assert_eq!(output_dir, PathBuf::from("."));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parsing_dot_command() {
        let cli = Cli::try_parse_from(["phalanx-diagrams", "dot", "proposed", "-o", "-"]).unwrap();
        match cli.command {
            Some(Commands::Dot { name, output }) => {
                assert_eq!(name, "proposed");
                assert_eq!(output.unwrap().to_string_lossy(), "-");
            }
            _ => panic!("Expected Dot command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_json() {
        let cli = Cli::try_parse_from(["phalanx-diagrams", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["phalanx-diagrams", "render", "--format", "bmp"]).is_err());
    }

    #[test]
    fn test_verbose_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["phalanx-diagrams", "list", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_choice_conversion() {
        assert_eq!(OutputFormat::from(FormatChoice::Png), OutputFormat::Png);
        assert_eq!(OutputFormat::from(FormatChoice::Dot), OutputFormat::Dot);
    }

    #[test]
    fn test_write_output_to_file() {
        let app = DiagramsApp::new();
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("starting.dot");

        app.write_output(Some(file_path.clone()), "digraph {}\n").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "digraph {}\n");
    }

    #[test]
    fn test_render_dot_format_without_graphviz() {
        let app = DiagramsApp::with_backend(GraphvizBackend::with_executable(
            "/nonexistent/graphviz/dot",
        ));
        let dir = tempdir().unwrap();

        app.render_command(Vec::new(), FormatChoice::Dot, dir.path(), false)
            .unwrap();
        assert!(dir.path().join("starting.dot").exists());
        assert!(dir.path().join("proposed.dot").exists());
    }

    #[test]
    fn test_render_png_without_graphviz_fails() {
        let app = DiagramsApp::with_backend(GraphvizBackend::with_executable(
            "/nonexistent/graphviz/dot",
        ));
        let dir = tempdir().unwrap();

        let err = app
            .render_command(Vec::new(), FormatChoice::Png, dir.path(), false)
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_render_unknown_diagram() {
        let app = DiagramsApp::new();
        let dir = tempdir().unwrap();
        let err = app
            .render_command(
                vec!["final".to_string()],
                FormatChoice::Dot,
                dir.path(),
                false,
            )
            .unwrap_err();
        assert!(err.to_string().contains("Unknown diagram: final"));
    }

    #[test]
    fn test_list_entries() {
        let app = DiagramsApp::new();
        let entries = app.list_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "starting");
        assert_eq!(entries[0].output, "starting.png");
        assert_eq!(entries[1].name, "proposed");
        assert!(entries[1].description.contains("phalanx CLI"));
    }

    #[test]
    fn test_list_command() {
        let app = DiagramsApp::new();
        assert!(app.list_command(false).is_ok());
        assert!(app.list_command(true).is_ok());
    }
}
