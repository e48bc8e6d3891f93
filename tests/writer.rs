//! Integration tests for end-to-end DOT emission.
//!
//! These exercise the full writer lifecycle against in-memory and file sinks
//! and pin down the exact line format of the emitted statements.

use std::io::{self, Write};

use dotemit::{AttributeMap, Error, GraphType, GraphWriter, Result};

fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_directed_graph_basic() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
        writer.write_node("a", None)?;
        writer.write_node("b", None)?;
        writer.write_edge("a", "b", None)?;
        writer.close()?;
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "digraph G {\n    a;\n    b;\n    a -> b;\n}\n"
    );
    Ok(())
}

#[test]
fn test_undirected_graph_quoted_name() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "my graph", GraphType::Undirected)?;
        writer.write_edge("a", "b", None)?;
        writer.close()?;
    }

    let dot = String::from_utf8(buffer).unwrap();
    let mut lines = dot.lines();
    assert_eq!(lines.next(), Some("graph \"my graph\" {"));
    assert_eq!(lines.next(), Some("    a -- b;"));
    assert_eq!(lines.next(), Some("}"));
    assert_eq!(lines.next(), None);
    Ok(())
}

#[test]
fn test_attributes_on_nodes_and_edges() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "styled", GraphType::Directed)?;
        writer.write_node("a", Some(&attrs(&[("color", "red"), ("label", "hello world")])))?;
        writer.write_node("b", Some(&attrs(&[])))?;
        writer.write_edge("a", "b", Some(&attrs(&[("weight", "2")])))?;
        writer.close()?;
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "digraph styled {\n    \
         a[color=red, label=\"hello world\"];\n    \
         b;\n    \
         a -> b[weight=2];\n\
         }\n"
    );
    Ok(())
}

#[test]
fn test_empty_attribute_map_omits_brackets() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
        writer.write_node("a", Some(&AttributeMap::new()))?;
        writer.write_node("b", None)?;
        writer.close()?;
    }

    let dot = String::from_utf8(buffer).unwrap();
    assert!(!dot.contains('['));
    assert!(dot.contains("    a;\n"));
    assert!(dot.contains("    b;\n"));
    Ok(())
}

#[test]
fn test_write_after_close_fails() -> Result<()> {
    let mut buffer = Vec::new();
    let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
    writer.close()?;

    assert!(matches!(
        writer.write_node("a", None),
        Err(Error::WriterClosed { .. })
    ));
    assert!(matches!(
        writer.write_edge("a", "b", None),
        Err(Error::WriterClosed { .. })
    ));
    match writer.close() {
        Err(Error::WriterClosed { graph }) => assert_eq!(graph, "G"),
        other => panic!("expected WriterClosed, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_drop_emits_closing_brace() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
        writer.write_node("a", None)?;
        // No close; the writer is dropped while still open.
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "digraph G {\n    a;\n}\n"
    );
    Ok(())
}

#[test]
fn test_empty_graph_name_rejected() {
    let mut buffer = Vec::new();
    assert!(matches!(
        GraphWriter::new(&mut buffer, "", GraphType::Directed),
        Err(Error::EmptyIdentifier)
    ));
}

#[test]
fn test_custom_indent() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::with_indent(&mut buffer, "G", GraphType::Directed, "\t")?;
        writer.write_node("a", None)?;
        writer.close()?;
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "digraph G {\n\ta;\n}\n"
    );
    Ok(())
}

#[test]
fn test_statement_order_matches_call_order() -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = GraphWriter::new(&mut buffer, "ordered", GraphType::Directed)?;
        writer.write_edge("a", "b", None)?;
        writer.write_node("a", None)?;
        writer.write_node("b", None)?;
        writer.close()?;
    }

    let dot = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = dot.lines().collect();
    assert_eq!(lines[1], "    a -> b;");
    assert_eq!(lines[2], "    a;");
    assert_eq!(lines[3], "    b;");
    Ok(())
}

#[test]
fn test_create_writes_file() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.dot");

    let mut writer = GraphWriter::create(&path, "deps", GraphType::Directed)?;
    writer.write_node("app", None)?;
    writer.write_edge("app", "core", None)?;
    writer.close()?;
    drop(writer);

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "digraph deps {\n    app;\n    app -> core;\n}\n"
    );
    Ok(())
}

/// Sink that rejects every write, for error-path coverage.
struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "sink rejected write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_surfaces_error() {
    // The header write happens inside the constructor, so the failure shows
    // up before any statement is issued.
    assert!(matches!(
        GraphWriter::new(FailingSink, "G", GraphType::Directed),
        Err(Error::WriteFailed(_))
    ));
}
