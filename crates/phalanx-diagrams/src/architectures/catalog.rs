//! Registry of the available diagrams
//!
//! The catalog looks blueprints up by name and drives rendering for one or
//! all of them.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, span, Level};

use crate::core::{DiagramError, OutputFormat};
use crate::graph::{ArchitectureDiagram, DiagramSummary, GraphvizBackend};

use super::{Blueprint, ProposedDesign, StartingPoint};

/// Registry of diagram blueprints, kept in registration order
pub struct Catalog {
    blueprints: Vec<Box<dyn Blueprint>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            blueprints: Vec::new(),
        }
    }

    /// Create a catalog with the starting-point and proposed-design diagrams
    pub fn with_all_diagrams() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(StartingPoint));
        catalog.register(Box::new(ProposedDesign));
        catalog
    }

    /// Register a blueprint; a later registration with the same name wins
    pub fn register(&mut self, blueprint: Box<dyn Blueprint>) {
        self.blueprints.retain(|b| b.name() != blueprint.name());
        debug!(name = blueprint.name(), "Registered blueprint");
        self.blueprints.push(blueprint);
    }

    /// Registered names in order
    pub fn names(&self) -> Vec<&'static str> {
        self.blueprints.iter().map(|b| b.name()).collect()
    }

    /// Look up a blueprint by name
    pub fn get(&self, name: &str) -> Result<&dyn Blueprint, DiagramError> {
        self.blueprints
            .iter()
            .find(|b| b.name() == name)
            .map(|b| &**b)
            .ok_or_else(|| DiagramError::UnknownDiagram {
                name: name.to_string(),
            })
    }

    /// Build the named diagram
    pub fn build(&self, name: &str) -> Result<ArchitectureDiagram> {
        let build_span = span!(Level::INFO, "build_diagram", name);
        let _enter = build_span.enter();
        self.get(name)?.build()
    }

    /// Summaries of every registered diagram
    pub fn summaries(&self) -> Result<Vec<DiagramSummary>> {
        self.blueprints
            .iter()
            .map(|b| -> Result<DiagramSummary> { Ok(b.build()?.summary()) })
            .collect()
    }

    /// Render the named diagram into `dir`
    ///
    /// `format` overrides the diagram's configured output format.
    pub fn render(
        &self,
        name: &str,
        backend: &GraphvizBackend,
        dir: &Path,
        format: Option<OutputFormat>,
    ) -> Result<PathBuf> {
        let diagram = self.build(name)?;
        let format = format.unwrap_or(diagram.config().format);
        Ok(backend.render_as(&diagram, dir, format)?)
    }

    /// Render every registered diagram into `dir`, stopping at the first failure
    pub fn render_all(
        &self,
        backend: &GraphvizBackend,
        dir: &Path,
        format: Option<OutputFormat>,
    ) -> Result<Vec<PathBuf>> {
        let paths = self
            .names()
            .into_iter()
            .map(|name| self.render(name, backend, dir, format))
            .collect::<Result<Vec<_>>>()?;
        info!(count = paths.len(), "Rendered all diagrams");
        Ok(paths)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_all_diagrams()
    }
}
