//! Graphviz process backend
//!
//! Layout and rasterisation are done by the `dot` executable. DOT source is
//! piped to its stdin and the image is written with `-T<format> -o <path>`.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, span, warn, Level};

use crate::core::{DiagramError, OutputFormat};

use super::ArchitectureDiagram;

/// Environment variable overriding the `dot` executable
pub const GRAPHVIZ_DOT_ENV: &str = "GRAPHVIZ_DOT";

/// Runs Graphviz to turn diagrams into image files
#[derive(Debug, Clone)]
pub struct GraphvizBackend {
    executable: OsString,
}

impl GraphvizBackend {
    /// Use `$GRAPHVIZ_DOT` if set, `dot` from `PATH` otherwise
    pub fn new() -> Self {
        let executable = std::env::var_os(GRAPHVIZ_DOT_ENV).unwrap_or_else(|| "dot".into());
        Self { executable }
    }

    /// Use a specific `dot` executable
    pub fn with_executable(executable: impl Into<OsString>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// The executable this backend runs
    pub fn executable(&self) -> &Path {
        Path::new(&self.executable)
    }

    /// Returns true if the executable runs and reports a version
    pub fn is_available(&self) -> bool {
        Command::new(&self.executable)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Render `diagram` into `dir` using its configured format
    pub fn render(
        &self,
        diagram: &ArchitectureDiagram,
        dir: &Path,
    ) -> Result<PathBuf, DiagramError> {
        self.render_as(diagram, dir, diagram.config().format)
    }

    /// Render `diagram` into `dir` as `<filename>.<format>`
    ///
    /// [`OutputFormat::Dot`] writes the DOT source without running Graphviz.
    pub fn render_as(
        &self,
        diagram: &ArchitectureDiagram,
        dir: &Path,
        format: OutputFormat,
    ) -> Result<PathBuf, DiagramError> {
        let render_span = span!(
            Level::INFO,
            "render_diagram",
            title = %diagram.title(),
            format = %format
        );
        let _enter = render_span.enter();

        let dot = diagram
            .to_dot()
            .map_err(|e| DiagramError::render_error(e.to_string()))?;
        let path = dir.join(diagram.config().output_file_name(format));

        if format.needs_graphviz() {
            self.run_dot(&dot, format, &path)?;
        } else {
            std::fs::write(&path, &dot)?;
        }

        let size = match std::fs::metadata(&path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };
        if size == 0 {
            warn!(path = %path.display(), "Graphviz produced no output");
            return Err(DiagramError::render_error(format!(
                "{} is empty",
                path.display()
            )));
        }

        info!(path = %path.display(), bytes = size, "Diagram written");
        Ok(path)
    }

    fn run_dot(&self, dot: &str, format: OutputFormat, path: &Path) -> Result<(), DiagramError> {
        debug!(
            executable = %self.executable().display(),
            format = %format,
            path = %path.display(),
            "Running Graphviz"
        );

        let mut child = Command::new(&self.executable)
            .arg(format!("-T{}", format.extension()))
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DiagramError::graphviz_error(format!(
                    "failed to start '{}': {}",
                    self.executable().display(),
                    e
                ))
            })?;

        // Dropping stdin closes the pipe so dot sees end of input. A broken
        // pipe means dot already exited; its status below says why.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(dot.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(DiagramError::graphviz_error(format!(
                "'{}' exited with {}: {}",
                self.executable().display(),
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            warn!(stderr = %stderr.trim(), "Graphviz reported warnings");
        }
        Ok(())
    }
}

impl Default for GraphvizBackend {
    fn default() -> Self {
        Self::new()
    }
}
