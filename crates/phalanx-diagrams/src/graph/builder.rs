//! Declarative diagram construction
//!
//! [`DiagramBuilder`] mirrors the way the diagrams are written down: nodes are
//! declared one after another, optionally inside a cluster scope, and edges
//! are declared with forward (`>>`) or backward (`<<`) chains between nodes
//! that already exist. [`DiagramBuilder::finish`] freezes the result into an
//! immutable [`ArchitectureDiagram`].

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, span, Level};

use crate::core::{
    Database, DiagramError, EdgeData, NodeData, NodeKind, RenderConfig, Renderer,
};

use super::{DiagramDatabase, DotRenderer, OutlineRenderer};

/// Builder for a single architecture diagram
///
/// # Example
/// ```
/// use phalanx_diagrams::core::{NodeKind, RenderConfig};
/// use phalanx_diagrams::graph::DiagramBuilder;
///
/// let mut builder = DiagramBuilder::new(RenderConfig::phalanx("Demo", "demo"));
/// builder.node("admin", NodeKind::User, "Administrator").unwrap();
/// builder
///     .cluster("Secret storage", |c| c.node("vault", NodeKind::Vault, "Vault"))
///     .unwrap();
/// builder.edge("admin", "vault").unwrap();
///
/// let diagram = builder.finish();
/// assert_eq!(diagram.node_count(), 2);
/// assert_eq!(diagram.edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    config: RenderConfig,
    database: DiagramDatabase,
    /// `(id, label)` of the cluster currently being declared
    open_cluster: Option<(String, String)>,
}

impl DiagramBuilder {
    /// Start a new diagram
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            database: DiagramDatabase::new(),
            open_cluster: None,
        }
    }

    /// Declare a node, inside the open cluster if there is one
    pub fn node(&mut self, id: &str, kind: NodeKind, label: &str) -> Result<()> {
        let node = match &self.open_cluster {
            Some((cluster_id, _)) => NodeData::in_cluster(id, kind, label, cluster_id.as_str()),
            None => NodeData::new(id, kind, label),
        };
        self.database.add_node(node)
    }

    /// Declare a cluster and the nodes inside it
    ///
    /// Clusters do not nest; opening one inside `declare` fails with
    /// [`DiagramError::NestedCluster`].
    pub fn cluster<F>(&mut self, label: &str, declare: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if let Some((_, outer)) = &self.open_cluster {
            return Err(DiagramError::NestedCluster {
                outer: outer.clone(),
                inner: label.to_string(),
            }
            .into());
        }

        let id = self.database.add_cluster(label);
        self.open_cluster = Some((id, label.to_string()));
        let result = declare(self);
        self.open_cluster = None;
        result
    }

    /// Declare `from >> to`
    pub fn edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.database.add_edge(EdgeData::new(from, to))
    }

    /// Declare `head << tail`, meaning `tail` feeds `head`
    pub fn back_edge(&mut self, head: &str, tail: &str) -> Result<()> {
        self.database.add_edge(EdgeData::back(head, tail))
    }

    /// Declare `a >> b >> c ...`
    pub fn chain(&mut self, ids: &[&str]) -> Result<()> {
        for pair in ids.windows(2) {
            self.edge(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Declare `a << b << c ...`
    pub fn back_chain(&mut self, ids: &[&str]) -> Result<()> {
        for pair in ids.windows(2) {
            self.back_edge(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Freeze the declaration
    pub fn finish(self) -> ArchitectureDiagram {
        debug!(
            title = %self.config.title,
            node_count = self.database.node_count(),
            edge_count = self.database.edge_count(),
            cluster_count = self.database.clusters().len(),
            "Diagram declared"
        );
        ArchitectureDiagram {
            config: self.config,
            database: self.database,
        }
    }
}

/// A fully declared, immutable architecture diagram
#[derive(Debug, Clone)]
pub struct ArchitectureDiagram {
    config: RenderConfig,
    database: DiagramDatabase,
}

impl ArchitectureDiagram {
    /// Rendering configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Declared nodes, clusters and edges
    pub fn database(&self) -> &DiagramDatabase {
        &self.database
    }

    /// Diagram title
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Number of declared nodes
    pub fn node_count(&self) -> usize {
        self.database.node_count()
    }

    /// Number of declared edges
    pub fn edge_count(&self) -> usize {
        self.database.edge_count()
    }

    /// Serialise to Graphviz DOT
    pub fn to_dot(&self) -> Result<String> {
        let dot_span = span!(Level::DEBUG, "to_dot", title = %self.config.title);
        let _enter = dot_span.enter();
        DotRenderer::new(self.config.clone()).render(&self.database)
    }

    /// Render as a text outline
    pub fn outline(&self) -> Result<String> {
        OutlineRenderer::new(self.config.title.clone()).render(&self.database)
    }

    /// Structural summary of the diagram
    pub fn summary(&self) -> DiagramSummary {
        DiagramSummary {
            name: self.config.filename.clone(),
            title: self.config.title.clone(),
            output: self.config.output_file_name(self.config.format),
            nodes: self.database.node_count(),
            edges: self.database.edge_count(),
            clusters: self
                .database
                .clusters()
                .iter()
                .map(|c| c.label.clone())
                .collect(),
        }
    }
}

/// Node, edge and cluster counts of a diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramSummary {
    /// Diagram name (the output file stem)
    pub name: String,
    /// Diagram title
    pub title: String,
    /// Default output file name
    pub output: String,
    /// Number of nodes
    pub nodes: usize,
    /// Number of edges
    pub edges: usize,
    /// Cluster labels in declaration order
    pub clusters: Vec<String>,
}
