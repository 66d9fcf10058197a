//! Core renderer trait for diagram output
//!
//! This trait defines the interface for turning diagram data into an output
//! representation (DOT source, text outline, ...).

use anyhow::Result;

use super::Database;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use phalanx_diagrams::core::Renderer;
/// use phalanx_diagrams::graph::{DiagramDatabase, OutlineRenderer};
///
/// let db = DiagramDatabase::new();
/// let renderer = OutlineRenderer::new("Empty");
/// let output = renderer.render(&db).unwrap();
/// assert!(output.contains("Empty"));
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the diagram database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
