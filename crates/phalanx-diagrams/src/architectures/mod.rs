//! Architecture diagram declarations
//!
//! Each diagram is a [`Blueprint`]: a named, static declaration that builds
//! an [`ArchitectureDiagram`] on demand. The [`Catalog`] collects them.

use anyhow::Result;

use crate::graph::ArchitectureDiagram;

mod catalog;
mod proposed;
mod starting;

pub use catalog::*;
pub use proposed::*;
pub use starting::*;

/// A static, named diagram declaration
///
/// # Example
/// ```
/// use phalanx_diagrams::architectures::{Blueprint, StartingPoint};
///
/// let diagram = StartingPoint.build().unwrap();
/// assert_eq!(diagram.title(), "Starting point");
/// ```
pub trait Blueprint: Send + Sync {
    /// Short name, also the output file stem
    fn name(&self) -> &'static str;

    /// Human-readable title
    fn title(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Declare the diagram
    fn build(&self) -> Result<ArchitectureDiagram>;
}
