//! Core error types for diagram processing
//!
//! This module defines the error types used while declaring a diagram and
//! handing it to Graphviz.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Unknown node '{id}' referenced by edge {from} -> {to}")]
    UnknownNode { id: String, from: String, to: String },

    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("Unknown cluster: {id}")]
    UnknownCluster { id: String },

    #[error("Cluster '{inner}' opened inside cluster '{outer}'")]
    NestedCluster { outer: String, inner: String },

    #[error("Unknown diagram: {name}")]
    UnknownDiagram { name: String },

    #[error("Graphviz error: {message}")]
    Graphviz { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new unknown node error for the edge `from -> to`
    pub fn unknown_node(id: &str, from: &str, to: &str) -> Self {
        Self::UnknownNode {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a new duplicate node error
    pub fn duplicate_node(id: &str) -> Self {
        Self::DuplicateNode { id: id.to_string() }
    }

    /// Create a new Graphviz error
    pub fn graphviz_error(message: String) -> Self {
        Self::Graphviz { message }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_error() {
        let error = DiagramError::unknown_node("vault", "update", "vault");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown node 'vault'"));
        assert!(error_msg.contains("update -> vault"));
    }

    #[test]
    fn test_graphviz_error() {
        let error = DiagramError::graphviz_error("dot exited with status 1".to_string());
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Graphviz error"));
        assert!(error_msg.contains("status 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error: DiagramError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("read-only"));
    }
}
