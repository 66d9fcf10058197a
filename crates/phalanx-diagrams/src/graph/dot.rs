//! Graphviz DOT serialisation
//!
//! Emits a `digraph` with the configured graph/node/edge defaults, top-level
//! nodes first, one `cluster_N` subgraph per cluster, then edges in
//! declaration order. Backward edges are written head-first with
//! `dir=back`.

use anyhow::Result;
use std::fmt::Write;
use tracing::{debug, trace};

use crate::core::{
    quote_dot, Attributes, Database, EdgeDirection, NodeData, RenderConfig, Renderer,
};

use super::DiagramDatabase;

const INDENT: &str = "    ";

/// Renders a [`DiagramDatabase`] to DOT source
#[derive(Debug, Clone)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    /// Create a renderer for the given configuration
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn attr_list(attrs: &Attributes) -> String {
        attrs
            .iter()
            .map(|(k, v)| format!("{}={}", k, quote_dot(v)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn node_statement(node: &NodeData) -> String {
        let category = node.category();
        format!(
            "{} [label={}, shape={}, style=\"rounded,filled\", fillcolor={}]",
            quote_dot(&node.id),
            quote_dot(&node.label),
            quote_dot(node.kind.shape()),
            quote_dot(category.fill_color()),
        )
    }
}

impl Renderer<DiagramDatabase> for DotRenderer {
    type Output = String;

    fn render(&self, database: &DiagramDatabase) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "digraph {} {{", quote_dot(&self.config.title))?;
        writeln!(out, "{INDENT}graph [{}];", Self::attr_list(&self.config.graph_attrs))?;
        writeln!(out, "{INDENT}node [{}];", Self::attr_list(&self.config.node_attrs))?;
        writeln!(out, "{INDENT}edge [{}];", Self::attr_list(&self.config.edge_attrs))?;

        let top_level: Vec<_> = database.unclustered_nodes().collect();
        if !top_level.is_empty() {
            writeln!(out)?;
            for node in top_level {
                writeln!(out, "{INDENT}{};", Self::node_statement(node))?;
            }
        }

        for cluster in database.clusters() {
            trace!(cluster = %cluster.label, members = cluster.members.len(), "Writing cluster");
            let mut attrs = self.config.cluster_attrs.clone();
            attrs.insert("label".to_string(), cluster.label.clone());

            writeln!(out)?;
            writeln!(out, "{INDENT}subgraph {} {{", quote_dot(&cluster.id))?;
            writeln!(out, "{INDENT}{INDENT}graph [{}];", Self::attr_list(&attrs))?;
            for node in database.cluster_members(cluster) {
                writeln!(out, "{INDENT}{INDENT}{};", Self::node_statement(node))?;
            }
            writeln!(out, "{INDENT}}}")?;
        }

        if database.edge_count() > 0 {
            writeln!(out)?;
        }
        for edge in database.edges() {
            let (tail, head) = edge.dot_endpoints();
            write!(out, "{INDENT}{} -> {}", quote_dot(tail), quote_dot(head))?;
            if edge.direction == EdgeDirection::Back {
                write!(out, " [dir=\"back\"]")?;
            }
            writeln!(out, ";")?;
        }

        writeln!(out, "}}")?;

        debug!(bytes = out.len(), "DOT source generated");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "dot"
    }

    fn format(&self) -> &'static str {
        "dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeData, NodeKind};

    fn database() -> DiagramDatabase {
        let mut db = DiagramDatabase::new();
        db.add_node(NodeData::new("admin", NodeKind::User, "Administrator"))
            .unwrap();
        let phalanx = db.add_cluster("Phalanx installer");
        db.add_node(NodeData::in_cluster("update", NodeKind::Bash, "update_secrets.sh", &phalanx))
            .unwrap();
        let storage = db.add_cluster("Secret storage");
        db.add_node(NodeData::in_cluster("connect", NodeKind::Rack, "1Password Connect", &storage))
            .unwrap();
        db.add_edge(EdgeData::new("admin", "update")).unwrap();
        db.add_edge(EdgeData::back("update", "connect")).unwrap();
        db
    }

    fn render() -> String {
        DotRenderer::new(RenderConfig::phalanx("Starting point", "starting"))
            .render(&database())
            .unwrap()
    }

    #[test]
    fn test_header_and_defaults() {
        let dot = render();
        assert!(dot.starts_with("digraph \"Starting point\" {\n"));
        assert!(dot.contains("splines=\"spline\""));
        assert!(dot.contains("label=\"\""));
        assert!(dot.contains("fontsize=\"12.0\""));
        assert!(dot.contains("color=\"#7B8894\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_clusters_contain_their_nodes() {
        let dot = render();
        let start = dot.find("subgraph \"cluster_0\"").unwrap();
        let end = dot[start..].find("    }\n").unwrap() + start;
        let block = &dot[start..end];
        assert!(block.contains("label=\"Phalanx installer\""));
        assert!(block.contains("\"update\" [label=\"update_secrets.sh\""));
        assert!(!block.contains("1Password Connect"));
        assert!(dot.contains("subgraph \"cluster_1\""));
    }

    #[test]
    fn test_edges() {
        let dot = render();
        assert!(dot.contains("    \"admin\" -> \"update\";\n"));
        assert!(dot.contains("    \"update\" -> \"connect\" [dir=\"back\"];\n"));
    }

    #[test]
    fn test_deterministic_output() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_renderer_metadata() {
        let renderer = DotRenderer::new(RenderConfig::new("x", "x"));
        assert_eq!(renderer.name(), "dot");
        assert_eq!(renderer.format(), "dot");
    }
}
