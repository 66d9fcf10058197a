//! Property tests for DOT quoting
//!
//! Labels end up inside double-quoted DOT strings; whatever they contain,
//! the quoted form must stay a single well-formed token.

use phalanx_diagrams::core::{quote_dot, NodeKind, RenderConfig};
use phalanx_diagrams::graph::DiagramBuilder;
use proptest::prelude::*;

/// Undo `quote_dot`, returning None if the token is malformed
fn unquote(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'n' => out.push('\n'),
                _ => return None,
            },
            '"' => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}

proptest! {
    #[test]
    fn quoted_labels_round_trip(label in "[^\r]*") {
        let quoted = quote_dot(&label);
        prop_assert_eq!(unquote(&quoted), Some(label));
    }

    #[test]
    fn arbitrary_labels_stay_inside_their_statement(label in "\\PC{0,40}") {
        let mut builder = DiagramBuilder::new(RenderConfig::phalanx("Escaping", "escaping"));
        builder.node("n", NodeKind::Rack, &label).unwrap();
        let dot = builder.finish().to_dot().unwrap();

        let line = dot
            .lines()
            .find(|l| l.trim_start().starts_with("\"n\" [label="))
            .unwrap();
        let expected = format!("[label={},", quote_dot(&label));
        prop_assert!(line.contains(&expected), "label statement was {:?}", line);
        prop_assert!(dot.trim_end().ends_with('}'), "digraph not closed");
    }
}

#[test]
fn test_carriage_returns_are_dropped() {
    assert_eq!(quote_dot("a\r\nb"), "\"a\\nb\"");
}
