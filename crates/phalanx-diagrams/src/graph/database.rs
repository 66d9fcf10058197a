//! Diagram database implementation
//!
//! Stores the nodes, clusters and edges of one architecture diagram in
//! declaration order. Edges may only reference nodes that are already stored.

use anyhow::Result;
use std::collections::HashMap;
use tracing::trace;

use crate::core::{ClusterData, Database, DiagramError, EdgeData, NodeData};

/// Diagram database implementation
///
/// Maintains insertion order for deterministic output.
#[derive(Debug, Clone, Default)]
pub struct DiagramDatabase {
    /// Nodes indexed by ID
    nodes: HashMap<String, NodeData>,
    /// Node IDs in insertion order
    node_order: Vec<String>,
    /// Edges in insertion order
    edges: Vec<EdgeData>,
    /// Clusters in insertion order
    clusters: Vec<ClusterData>,
}

impl DiagramDatabase {
    /// Create a new empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cluster and return its generated id
    pub fn add_cluster(&mut self, label: impl Into<String>) -> String {
        let id = format!("cluster_{}", self.clusters.len());
        let cluster = ClusterData::new(id.clone(), label);
        trace!(id = %cluster.id, label = %cluster.label, "Added cluster");
        self.clusters.push(cluster);
        id
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All clusters in declaration order
    pub fn clusters(&self) -> &[ClusterData] {
        &self.clusters
    }

    /// Get a cluster by id
    pub fn get_cluster(&self, id: &str) -> Option<&ClusterData> {
        self.clusters.iter().find(|c| c.id == id)
    }

    /// Get a cluster by its label
    pub fn cluster_by_label(&self, label: &str) -> Option<&ClusterData> {
        self.clusters.iter().find(|c| c.label == label)
    }

    /// Label of the cluster owning a node, if any
    pub fn cluster_label_of(&self, node_id: &str) -> Option<&str> {
        let cluster_id = self.nodes.get(node_id)?.cluster.as_deref()?;
        self.get_cluster(cluster_id).map(|c| c.label.as_str())
    }

    /// Nodes that are not owned by any cluster, in declaration order
    pub fn unclustered_nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes().filter(|n| n.cluster.is_none())
    }

    /// Member nodes of a cluster, in declaration order
    pub fn cluster_members<'a>(
        &'a self,
        cluster: &'a ClusterData,
    ) -> impl Iterator<Item = &'a NodeData> + 'a {
        cluster.members.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Returns true if an edge with this logical direction exists
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    /// Get IDs of nodes that this node feeds
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.from == node_id)
            .map(|e| e.to.as_str())
            .collect()
    }

    /// Get IDs of nodes that feed this node
    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.to == node_id)
            .map(|e| e.from.as_str())
            .collect()
    }

    /// Logical edges as `(from label, to label)` pairs
    pub fn labeled_edges(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .filter_map(|e| {
                let from = self.nodes.get(&e.from)?;
                let to = self.nodes.get(&e.to)?;
                Some((from.label.as_str(), to.label.as_str()))
            })
            .collect()
    }
}

impl Database for DiagramDatabase {
    type Node = NodeData;
    type Edge = EdgeData;

    fn add_node(&mut self, node: NodeData) -> Result<()> {
        if self.has_node(&node.id) {
            return Err(DiagramError::duplicate_node(&node.id).into());
        }

        if let Some(cluster_id) = node.cluster.as_deref() {
            let cluster = self
                .clusters
                .iter_mut()
                .find(|c| c.id == cluster_id)
                .ok_or_else(|| DiagramError::UnknownCluster {
                    id: cluster_id.to_string(),
                })?;
            cluster.members.push(node.id.clone());
        }

        trace!(id = %node.id, label = %node.label, kind = %node.kind, "Added node");
        self.node_order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    fn add_edge(&mut self, edge: EdgeData) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.has_node(endpoint) {
                return Err(DiagramError::unknown_node(endpoint, &edge.from, &edge.to).into());
            }
        }

        trace!(from = %edge.from, to = %edge.to, direction = %edge.direction, "Added edge");
        self.edges.push(edge);
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
