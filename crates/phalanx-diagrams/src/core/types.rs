//! Core type definitions for architecture diagrams
//!
//! This module contains the fundamental types used throughout the crate:
//! node kinds and their categories, edge declarations, clusters and the
//! output formats Graphviz can produce.

use serde::Serialize;
use std::fmt;

/// Broad role a node plays in the pictured architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A person operating the system
    Actor,
    /// Compute or orchestration service
    Service,
    /// A secret object stored in the cluster
    Secret,
    /// A CLI or shell script invocation
    Script,
    /// A secret-storage backend
    Storage,
}

impl Category {
    /// Fill colour used for nodes of this category
    pub fn fill_color(&self) -> &'static str {
        match self {
            Category::Actor => "#FFFFFF",
            Category::Service => "#D6EAF8",
            Category::Secret => "#FDEBD0",
            Category::Script => "#E8F8F5",
            Category::Storage => "#F4ECF7",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Actor => write!(f, "actor"),
            Category::Service => write!(f, "service"),
            Category::Secret => write!(f, "secret"),
            Category::Script => write!(f, "script"),
            Category::Storage => write!(f, "storage"),
        }
    }
}

/// Concrete node kind, one per icon class the diagrams draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// On-premise client user
    User,
    /// Managed Kubernetes engine
    KubernetesEngine,
    /// Kubernetes `Secret` object
    Secret,
    /// Bash script
    Bash,
    /// Python program
    Python,
    /// HashiCorp Vault
    Vault,
    /// Generic rack-mounted compute
    Rack,
    /// Generic storage
    Storage,
}

impl NodeKind {
    /// The category this kind belongs to
    pub fn category(&self) -> Category {
        match self {
            NodeKind::User => Category::Actor,
            NodeKind::KubernetesEngine => Category::Service,
            NodeKind::Secret => Category::Secret,
            NodeKind::Bash | NodeKind::Python => Category::Script,
            NodeKind::Vault | NodeKind::Rack | NodeKind::Storage => Category::Storage,
        }
    }

    /// Graphviz shape used to draw this kind
    pub fn shape(&self) -> &'static str {
        match self {
            NodeKind::User => "box",
            NodeKind::KubernetesEngine => "box",
            NodeKind::Secret => "note",
            NodeKind::Bash | NodeKind::Python => "box",
            NodeKind::Vault => "box",
            NodeKind::Rack => "box3d",
            NodeKind::Storage => "cylinder",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::User => write!(f, "user"),
            NodeKind::KubernetesEngine => write!(f, "kubernetes-engine"),
            NodeKind::Secret => write!(f, "secret"),
            NodeKind::Bash => write!(f, "bash"),
            NodeKind::Python => write!(f, "python"),
            NodeKind::Vault => write!(f, "vault"),
            NodeKind::Rack => write!(f, "rack"),
            NodeKind::Storage => write!(f, "storage"),
        }
    }
}

/// How an edge was declared
///
/// A backward declaration (`a << b`) still means `b` feeds `a`, but Graphviz
/// receives it as `a -> b [dir=back]` so the ranking matches the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Declared as `from >> to`
    #[default]
    Forward,
    /// Declared as `to << from`
    Back,
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDirection::Forward => write!(f, ">>"),
            EdgeDirection::Back => write!(f, "<<"),
        }
    }
}

/// A node in the diagram with all its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    /// Unique handle for the node, used as the DOT node id
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon kind
    pub kind: NodeKind,
    /// Id of the owning cluster, if any
    pub cluster: Option<String>,
}

impl NodeData {
    /// Create a node outside of any cluster
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            cluster: None,
        }
    }

    /// Create a node owned by a cluster
    pub fn in_cluster(
        id: impl Into<String>,
        kind: NodeKind,
        label: impl Into<String>,
        cluster: impl Into<String>,
    ) -> Self {
        Self {
            cluster: Some(cluster.into()),
            ..Self::new(id, kind, label)
        }
    }

    /// Category of the node's kind
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

/// A directed edge between two nodes
///
/// `from` and `to` always carry the logical flow, whatever the declaration
/// direction was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeData {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Declaration direction
    pub direction: EdgeDirection,
}

impl EdgeData {
    /// Create a forward edge `from >> to`
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction: EdgeDirection::Forward,
        }
    }

    /// Create the edge declared as `head << tail`, meaning `tail` feeds `head`
    pub fn back(head: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            from: tail.into(),
            to: head.into(),
            direction: EdgeDirection::Back,
        }
    }

    /// Endpoints in the order Graphviz should receive them
    pub fn dot_endpoints(&self) -> (&str, &str) {
        match self.direction {
            EdgeDirection::Forward => (&self.from, &self.to),
            EdgeDirection::Back => (&self.to, &self.from),
        }
    }
}

/// A named visual grouping of nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterData {
    /// Unique identifier (`cluster_0`, `cluster_1`, ...)
    pub id: String,
    /// Title drawn on the cluster border
    pub label: String,
    /// Member node ids in declaration order
    pub members: Vec<String>,
}

impl ClusterData {
    /// Create an empty cluster
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            members: Vec::new(),
        }
    }
}

/// Output formats Graphviz is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpg,
    /// Raw DOT text, written without invoking Graphviz
    Dot,
}

impl OutputFormat {
    /// File extension, also the `-T` argument for `dot`
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Dot => "dot",
        }
    }

    /// Returns true if producing this format requires Graphviz
    pub fn needs_graphviz(&self) -> bool {
        !matches!(self, OutputFormat::Dot)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
