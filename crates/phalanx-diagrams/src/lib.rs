//! Phalanx diagrams - architecture diagrams of the Phalanx secret installation flow
//!
//! Two static diagrams are declared here: the starting point, where secrets
//! are installed by shell scripts, and the proposed design, where the
//! `phalanx` CLI generates and installs them. Each diagram is a set of
//! labelled nodes grouped into clusters plus directed edges; layout and
//! rasterisation are left to Graphviz.
//!
//! # Quick Start
//!
//! ```rust
//! use phalanx_diagrams::to_dot;
//!
//! let dot = to_dot("starting").unwrap();
//! assert!(dot.contains("install.sh"));
//! ```
//!
//! Writing images requires the Graphviz `dot` executable:
//!
//! ```rust,no_run
//! use phalanx_diagrams::render_all;
//!
//! // writes starting.png and proposed.png into the current directory
//! render_all(std::path::Path::new(".")).unwrap();
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use phalanx_diagrams::prelude::*;
//!
//! let diagram = ProposedDesign.build().unwrap();
//! assert_eq!(diagram.node_count(), 9);
//!
//! let outline = diagram.outline().unwrap();
//! assert!(outline.contains("Phalanx CLI"));
//! ```

pub mod architectures;
pub mod core;
pub mod graph;

pub use core::*;

use std::path::{Path, PathBuf};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::architectures::{Blueprint, Catalog, ProposedDesign, StartingPoint};
    pub use crate::core::{
        Category, Database, DiagramError, EdgeData, EdgeDirection, NodeData, NodeKind,
        OutputFormat, RenderConfig, Renderer,
    };
    pub use crate::graph::{
        ArchitectureDiagram, DiagramBuilder, DiagramDatabase, DotRenderer, GraphvizBackend,
        OutlineRenderer,
    };
}

/// Build a diagram by name (`starting` or `proposed`)
///
/// # Example
/// ```rust
/// use phalanx_diagrams::build;
///
/// let diagram = build("proposed").unwrap();
/// assert_eq!(diagram.title(), "Proposed design");
/// ```
pub fn build(name: &str) -> anyhow::Result<graph::ArchitectureDiagram> {
    architectures::Catalog::with_all_diagrams().build(name)
}

/// Graphviz DOT source of a diagram
pub fn to_dot(name: &str) -> anyhow::Result<String> {
    build(name)?.to_dot()
}

/// Render a diagram to its configured image file inside `dir`
///
/// Returns the path of the written file.
pub fn render(name: &str, dir: &Path) -> anyhow::Result<PathBuf> {
    architectures::Catalog::with_all_diagrams().render(
        name,
        &graph::GraphvizBackend::new(),
        dir,
        None,
    )
}

/// Render every diagram to its configured image file inside `dir`
pub fn render_all(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    architectures::Catalog::with_all_diagrams().render_all(
        &graph::GraphvizBackend::new(),
        dir,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_by_name() {
        let diagram = build("starting").unwrap();
        assert_eq!(diagram.title(), "Starting point");
        assert_eq!(diagram.config().filename, "starting");
    }

    #[test]
    fn test_build_unknown_name() {
        let err = build("nope").unwrap_err();
        assert!(err.to_string().contains("Unknown diagram: nope"));
    }

    #[test]
    fn test_to_dot() {
        let dot = to_dot("proposed").unwrap();
        assert!(dot.starts_with("digraph \"Proposed design\""));
        assert!(dot.contains("phalanx generate"));
    }
}
