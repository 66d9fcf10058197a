//! Integration tests for the public API

use phalanx_diagrams::prelude::*;
use phalanx_diagrams::{build, to_dot};

#[test]
fn test_build_both_diagrams() {
    assert_eq!(build("starting").unwrap().title(), "Starting point");
    assert_eq!(build("proposed").unwrap().title(), "Proposed design");
    assert!(build("final").is_err());
}

#[test]
fn test_dot_for_starting_point() {
    let dot = to_dot("starting").unwrap();
    assert!(dot.starts_with("digraph \"Starting point\" {"));
    assert!(dot.contains("\"admin\" -> \"installer\";"));
    assert!(dot.contains("\"installer\" -> \"token\";"));
    assert!(dot.contains("\"update\" -> \"connect\" [dir=\"back\"];"));
    assert!(dot.contains("\"connect\" -> \"onepassword\" [dir=\"back\"];"));
    assert!(dot.contains("\"vso\" -> \"vault\" [dir=\"back\"];"));
    assert_eq!(dot.matches(" -> ").count(), 10);
    assert_eq!(dot.matches("subgraph ").count(), 3);
}

#[test]
fn test_dot_for_proposed_design() {
    let dot = to_dot("proposed").unwrap();
    assert!(dot.contains("label=\"Phalanx CLI\""));
    assert!(dot.contains("\"generate\" -> \"connect\" [dir=\"back\"];"));
    assert!(!dot.contains("install.sh"));
    assert_eq!(dot.matches(" -> ").count(), 11);
}

#[test]
fn test_title_is_not_drawn() {
    // the graph label is overridden with an empty string
    let dot = to_dot("starting").unwrap();
    let graph_line = dot.lines().nth(1).unwrap();
    assert!(graph_line.trim_start().starts_with("graph ["));
    assert!(graph_line.contains("label=\"\""));
    assert!(!graph_line.contains("Starting point"));
}

#[test]
fn test_outline() {
    let outline = StartingPoint.build().unwrap().outline().unwrap();
    assert!(outline.starts_with("Starting point\n├── Administrator (actor)\n"));
    assert!(outline.contains("├── Phalanx installer\n│   ├── install.sh (script)\n"));
    assert!(outline.contains("└── Secret storage\n"));
    assert!(outline.contains("Administrator          ──▶ install.sh\n"));
}

#[test]
fn test_custom_diagram_through_builder() {
    let config = RenderConfig::phalanx("Custom", "custom").with_edge_attrs(&[("penwidth", "2")]);
    let mut builder = DiagramBuilder::new(config);
    builder.node("a", NodeKind::User, "Operator").unwrap();
    builder
        .cluster("Storage", |c| c.node("b", NodeKind::Storage, "Bucket"))
        .unwrap();
    builder.edge("a", "b").unwrap();

    let diagram = builder.finish();
    let dot = diagram.to_dot().unwrap();
    assert!(dot.contains("penwidth=\"2\""));
    assert!(dot.contains("\"a\" -> \"b\";"));
}

#[test]
fn test_renderers_through_trait() {
    let diagram = ProposedDesign.build().unwrap();
    let dot = DotRenderer::new(diagram.config().clone())
        .render(diagram.database())
        .unwrap();
    assert_eq!(dot, diagram.to_dot().unwrap());

    let outline = OutlineRenderer::new("Proposed design")
        .render(diagram.database())
        .unwrap();
    assert_eq!(outline, diagram.outline().unwrap());
}
