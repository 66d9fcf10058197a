//! Rendering configuration
//!
//! A [`RenderConfig`] carries everything a diagram needs besides its nodes and
//! edges: the title, the output file stem and format, and the Graphviz
//! attribute maps for the graph, nodes, edges and clusters.
//!
//! Attribute maps are `BTreeMap`s so serialised DOT is deterministic.

use std::collections::BTreeMap;

use super::OutputFormat;

/// Graphviz attributes, ordered by name
pub type Attributes = BTreeMap<String, String>;

/// Background colour of first-level clusters
pub const CLUSTER_BACKGROUND: &str = "#E5F5FD";

/// Rendering configuration for a single diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Diagram title
    pub title: String,
    /// Output file stem, without extension
    pub filename: String,
    /// Default output format
    pub format: OutputFormat,
    /// Graph-level attributes
    pub graph_attrs: Attributes,
    /// Default node attributes
    pub node_attrs: Attributes,
    /// Default edge attributes
    pub edge_attrs: Attributes,
    /// Attributes applied to every cluster subgraph
    pub cluster_attrs: Attributes,
}

fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl RenderConfig {
    /// Create a configuration with the diagramming defaults
    ///
    /// Left-to-right layout, orthogonal splines, rounded fixed-size node boxes
    /// and the title used as the graph label.
    pub fn new(title: impl Into<String>, filename: impl Into<String>) -> Self {
        let title = title.into();
        let mut graph_attrs = attrs(&[
            ("pad", "2.0"),
            ("splines", "ortho"),
            ("nodesep", "0.60"),
            ("ranksep", "0.75"),
            ("fontname", "Sans-Serif"),
            ("fontsize", "15"),
            ("fontcolor", "#2D3436"),
            ("rankdir", "LR"),
        ]);
        graph_attrs.insert("label".to_string(), title.clone());

        Self {
            title,
            filename: filename.into(),
            format: OutputFormat::Png,
            graph_attrs,
            node_attrs: attrs(&[
                ("shape", "box"),
                ("style", "rounded"),
                ("fixedsize", "true"),
                ("width", "1.4"),
                ("height", "1.4"),
                ("labelloc", "b"),
                ("fontname", "Sans-Serif"),
                ("fontsize", "13"),
                ("fontcolor", "#2D3436"),
            ]),
            edge_attrs: attrs(&[("color", "#7B8894")]),
            cluster_attrs: attrs(&[
                ("style", "rounded"),
                ("labeljust", "l"),
                ("pencolor", "#AEB6BE"),
                ("fontname", "Sans-Serif"),
                ("fontsize", "12"),
                ("bgcolor", CLUSTER_BACKGROUND),
            ]),
        }
    }

    /// Configuration shared by the Phalanx secret installation diagrams
    ///
    /// Suppresses the title label, tightens node spacing and padding, routes
    /// edges as splines and fixes the node font size.
    pub fn phalanx(title: impl Into<String>, filename: impl Into<String>) -> Self {
        Self::new(title, filename)
            .with_graph_attrs(&[
                ("label", ""),
                ("labelloc", "ttc"),
                ("nodesep", "0.2"),
                ("pad", "0.2"),
                ("ranksep", "0.75"),
                ("splines", "spline"),
            ])
            .with_node_attrs(&[("fontsize", "12.0")])
    }

    /// Override graph attributes
    pub fn with_graph_attrs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.graph_attrs.extend(attrs(pairs));
        self
    }

    /// Override default node attributes
    pub fn with_node_attrs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.node_attrs.extend(attrs(pairs));
        self
    }

    /// Override default edge attributes
    pub fn with_edge_attrs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.edge_attrs.extend(attrs(pairs));
        self
    }

    /// Output file name for the given format (`<filename>.<ext>`)
    pub fn output_file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.filename, format.extension())
    }
}
