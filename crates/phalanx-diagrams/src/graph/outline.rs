//! Text outline renderer
//!
//! A terminal view of a diagram: the node hierarchy as a tree, followed by
//! the logical edges as an aligned arrow list.
//!
//! ```text
//! Starting point
//! ├── Administrator (actor)
//! ├── Kubernetes
//! │   ├── Vault token (secret)
//! │   └── Kubernetes secrets (secret)
//! └── Secret storage
//!     └── Vault (storage)
//!
//! Administrator ──▶ Vault token
//! Vault         ──▶ Vault token
//! ```

use anyhow::Result;
use std::fmt::Write;

use crate::core::{display_width, pad_right, NodeData, Renderer};

use super::DiagramDatabase;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";
const ARROW: &str = "──▶";

/// Renders a [`DiagramDatabase`] as an indented text outline
#[derive(Debug, Clone)]
pub struct OutlineRenderer {
    title: String,
}

/// One top-level entry of the outline tree
enum Entry<'a> {
    Node(&'a NodeData),
    Cluster(&'a str, Vec<&'a NodeData>),
}

impl OutlineRenderer {
    /// Create a renderer that heads the outline with `title`
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn node_line(node: &NodeData) -> String {
        format!("{} ({})", node.label, node.category())
    }
}

impl Renderer<DiagramDatabase> for OutlineRenderer {
    type Output = String;

    fn render(&self, database: &DiagramDatabase) -> Result<String> {
        let mut entries: Vec<Entry<'_>> = database.unclustered_nodes().map(Entry::Node).collect();
        entries.extend(database.clusters().iter().map(|cluster| {
            Entry::Cluster(
                cluster.label.as_str(),
                database.cluster_members(cluster).collect(),
            )
        }));

        let mut out = String::new();
        writeln!(out, "{}", self.title)?;

        let last_entry = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            let (branch, indent) = if i == last_entry {
                (LAST_BRANCH, SPACE)
            } else {
                (BRANCH, PIPE)
            };
            match entry {
                Entry::Node(node) => writeln!(out, "{branch}{}", Self::node_line(node))?,
                Entry::Cluster(label, members) => {
                    writeln!(out, "{branch}{label}")?;
                    let last_member = members.len().saturating_sub(1);
                    for (j, node) in members.iter().enumerate() {
                        let member_branch = if j == last_member { LAST_BRANCH } else { BRANCH };
                        writeln!(out, "{indent}{member_branch}{}", Self::node_line(node))?;
                    }
                }
            }
        }

        let edges = database.labeled_edges();
        if !edges.is_empty() {
            writeln!(out)?;
            let width = edges
                .iter()
                .map(|(from, _)| display_width(from))
                .max()
                .unwrap_or(0);
            for (from, to) in edges {
                writeln!(out, "{} {ARROW} {}", pad_right(from, width), to)?;
            }
        }

        Ok(out)
    }

    fn name(&self) -> &'static str {
        "outline"
    }

    fn format(&self) -> &'static str {
        "text"
    }
}
