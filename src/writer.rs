//! Line-oriented emission of DOT graph files.
//!
//! This module provides the [`crate::GraphWriter`] type for serializing node and
//! edge declarations into the GraphViz DOT text format, one statement per line.
//! It owns the output sink for its lifetime and tracks an explicit open/closed
//! lifecycle so nothing can be appended after the closing brace.
//!
//! # Key Components
//!
//! - [`crate::GraphType`] - Directedness of the emitted graph, fixed at construction
//! - [`crate::GraphWriter`] - Stateful line sequencer over any [`std::io::Write`] sink
//!
//! # Architecture
//!
//! The writer is a thin mechanical layer over the quoting and attribute
//! formatting in [`crate::quote_id`] and [`crate::format_attribute_bracket`]:
//! every operation builds exactly one statement line and appends it to the sink.
//! Control flow is one-directional, caller to writer to sink; nothing is ever
//! read back.
//!
//! ## Lifecycle
//! The header line is emitted by the constructor, statement lines by
//! [`crate::GraphWriter::write_node`] and [`crate::GraphWriter::write_edge`], and
//! the closing brace by [`crate::GraphWriter::close`], which flushes the sink and
//! moves the writer into its terminal state. A writer dropped while still open
//! emits the closing brace on a best-effort basis so the file is left
//! syntactically complete.
//!
//! # Thread Safety
//!
//! A [`crate::GraphWriter`] has a single owner and is used from one thread at a
//! time; statement order in the output matches call order exactly.
//!
//! # Usage Examples
//!
//! ```rust
//! use dotemit::{GraphType, GraphWriter};
//!
//! let mut buffer = Vec::new();
//! let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
//! writer.write_node("a", None)?;
//! writer.write_edge("a", "b", None)?;
//! writer.close()?;
//! # Ok::<(), dotemit::Error>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use strum::{EnumCount, EnumIter};

use crate::{
    attributes::{format_attribute_bracket, AttributeMap},
    identifier::quote_id,
    Error, Result,
};

/// Statement indentation used unless the caller picks another string.
const DEFAULT_INDENT: &str = "    ";

/// Whether a graph is directed or undirected.
///
/// Fixed for the lifetime of a [`GraphWriter`]; it determines the keyword of the
/// header line and the operator of every edge statement.
///
/// # Examples
///
/// ```rust
/// use dotemit::GraphType;
///
/// assert_eq!(GraphType::Directed.keyword(), "digraph");
/// assert_eq!(GraphType::Undirected.edge_operator(), "--");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumIter, EnumCount)]
pub enum GraphType {
    /// An undirected graph: `graph` keyword, `--` edge operator.
    Undirected,
    /// A directed graph: `digraph` keyword, `->` edge operator.
    Directed,
}

impl GraphType {
    /// The keyword that introduces the graph in the header line.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            GraphType::Undirected => "graph",
            GraphType::Directed => "digraph",
        }
    }

    /// The operator joining the endpoints of an edge statement.
    #[must_use]
    pub const fn edge_operator(&self) -> &'static str {
        match self {
            GraphType::Undirected => "--",
            GraphType::Directed => "->",
        }
    }
}

/// Lifecycle state of a [`GraphWriter`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WriterState {
    /// Statements may be appended.
    Open,
    /// The closing brace has been emitted; terminal.
    Closed,
}

/// Generator for DOT graph files. Every declaration is emitted as a single line.
///
/// The writer exclusively owns its sink and appends UTF-8 encoded lines to it in
/// call order: the header at construction, one line per node or edge statement,
/// and the closing brace at [`GraphWriter::close`]. Previously written content is
/// never touched again.
///
/// The graph name is the only identifier the writer quotes itself (via
/// [`crate::quote_id`]). Node and edge identifiers are emitted verbatim, so
/// callers pass pre-quoted fragments where the raw name is not a bare DOT
/// identifier; attribute lists, in contrast, are fully owned by the writer.
///
/// # Features
///
/// - **Checked lifecycle**: every operation on a closed writer fails with
///   [`Error::WriterClosed`] instead of corrupting the file
/// - **Sink-agnostic**: emits into any [`std::io::Write`], from `Vec<u8>` to a
///   buffered file handle
/// - **Deterministic output**: attribute lists serialize in sorted key order
/// - **Guaranteed completion**: dropping an open writer emits the closing brace
///   on a best-effort basis
///
/// # Examples
///
/// ```rust
/// use dotemit::{AttributeMap, GraphType, GraphWriter};
///
/// let mut buffer = Vec::new();
/// let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("label".to_string(), "start here".to_string());
/// writer.write_node("a", Some(&attrs))?;
/// writer.write_node("b", None)?;
/// writer.write_edge("a", "b", None)?;
/// writer.close()?;
///
/// drop(writer);
/// let dot = String::from_utf8(buffer).unwrap();
/// assert!(dot.starts_with("digraph G {\n"));
/// assert!(dot.ends_with("}\n"));
/// # Ok::<(), dotemit::Error>(())
/// ```
pub struct GraphWriter<W: Write> {
    /// The output sink, exclusively owned for the writer's lifetime
    sink: W,

    /// Unquoted graph name, kept for error context
    name: String,

    /// Directedness, fixed at construction
    graph_type: GraphType,

    /// Current lifecycle state
    state: WriterState,

    /// Indentation prefix of every statement line
    indent: String,
}

impl<W: Write> GraphWriter<W> {
    /// Creates a writer over `sink` and emits the header line.
    ///
    /// The header reads `<keyword> <name> {` where the keyword comes from
    /// `graph_type` and `name` is quoted via [`crate::quote_id`] when it is not
    /// a bare DOT identifier. Statements are indented with four spaces; use
    /// [`GraphWriter::with_indent`] to pick another prefix.
    ///
    /// # Arguments
    ///
    /// * `sink` - The output sink; the writer takes exclusive ownership
    /// * `name` - The raw, unquoted graph name
    /// * `graph_type` - Whether edges are directed
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] if `name` is empty, or
    /// [`Error::WriteFailed`] if emitting the header fails.
    pub fn new(sink: W, name: &str, graph_type: GraphType) -> Result<Self> {
        Self::with_indent(sink, name, graph_type, DEFAULT_INDENT)
    }

    /// Creates a writer with a caller-chosen statement indentation string.
    ///
    /// Behaves like [`GraphWriter::new`] otherwise; the indentation prefix is
    /// applied to every node and edge statement but not to the header or the
    /// closing brace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] if `name` is empty, or
    /// [`Error::WriteFailed`] if emitting the header fails.
    pub fn with_indent(
        sink: W,
        name: &str,
        graph_type: GraphType,
        indent: impl Into<String>,
    ) -> Result<Self> {
        let mut writer = GraphWriter {
            sink,
            name: name.to_string(),
            graph_type,
            state: WriterState::Open,
            indent: indent.into(),
        };

        writer.write_header()?;
        Ok(writer)
    }

    /// The raw, unquoted name the graph was constructed with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directedness of the graph being written.
    #[must_use]
    pub const fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns `true` once [`GraphWriter::close`] has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == WriterState::Closed
    }

    /// Writes a node statement.
    ///
    /// Emits one line of the form `<indent><id><attrs>;`. The identifier is
    /// used as given; callers quote raw names via [`crate::quote_id`] first
    /// where needed. The attribute bracket is omitted entirely when
    /// `attributes` is absent or empty.
    ///
    /// # Arguments
    ///
    /// * `id` - The node identifier, emitted verbatim
    /// * `attributes` - Optional attribute map for the node
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriterClosed`] if the graph has been closed, or
    /// [`Error::WriteFailed`] if the sink rejects the line.
    pub fn write_node(&mut self, id: &str, attributes: Option<&AttributeMap>) -> Result<()> {
        let bracket = format_attribute_bracket(attributes);
        let line = format!("{}{id}{bracket};", self.indent);

        self.write_line(&line)
    }

    /// Writes an edge statement.
    ///
    /// Emits one line of the form `<indent><source> <op> <target><attrs>;`,
    /// where the operator is `--` for undirected and `->` for directed graphs.
    /// Endpoint identifiers are used as given, like in
    /// [`GraphWriter::write_node`].
    ///
    /// # Arguments
    ///
    /// * `source` - The source node identifier, emitted verbatim
    /// * `target` - The target node identifier, emitted verbatim
    /// * `attributes` - Optional attribute map for the edge
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriterClosed`] if the graph has been closed, or
    /// [`Error::WriteFailed`] if the sink rejects the line.
    pub fn write_edge(
        &mut self,
        source: &str,
        target: &str,
        attributes: Option<&AttributeMap>,
    ) -> Result<()> {
        let bracket = format_attribute_bracket(attributes);
        let operator = self.graph_type.edge_operator();
        let line = format!("{}{source} {operator} {target}{bracket};", self.indent);

        self.write_line(&line)
    }

    /// Closes the graph.
    ///
    /// Emits the unindented closing `}`, flushes the sink, and moves the writer
    /// into its terminal state. Every subsequent operation, including a second
    /// `close`, fails with [`Error::WriterClosed`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriterClosed`] if the writer is already closed, or
    /// [`Error::WriteFailed`] if emitting the brace or flushing fails.
    pub fn close(&mut self) -> Result<()> {
        self.write_line("}")?;
        self.state = WriterState::Closed;
        self.sink.flush()?;

        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let quoted_name = quote_id(&self.name)?;
        let keyword = self.graph_type.keyword();

        self.write_line(&format!("{keyword} {quoted_name} {{"))
    }

    /// Appends one statement line plus the trailing newline to the sink.
    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.state == WriterState::Closed {
            return Err(Error::WriterClosed {
                graph: self.name.clone(),
            });
        }

        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;

        Ok(())
    }
}

impl GraphWriter<BufWriter<File>> {
    /// Creates the file at `path` and opens a buffered writer over it.
    ///
    /// Convenience constructor for the common file-sink case; an existing file
    /// at `path` is truncated. The header is emitted before this returns, like
    /// in [`GraphWriter::new`].
    ///
    /// # Arguments
    ///
    /// * `path` - The path where the `.dot` file should be created
    /// * `name` - The raw, unquoted graph name
    /// * `graph_type` - Whether edges are directed
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailed`] if the file cannot be created or the
    /// header cannot be written, and [`Error::EmptyIdentifier`] if `name` is
    /// empty.
    pub fn create<P: AsRef<Path>>(path: P, name: &str, graph_type: GraphType) -> Result<Self> {
        let file = File::create(path)?;

        Self::new(BufWriter::new(file), name, graph_type)
    }
}

impl<W: Write> Drop for GraphWriter<W> {
    fn drop(&mut self) {
        // Leave the file syntactically complete if the caller forgot to close.
        // Errors cannot be surfaced from here; an explicit close reports them.
        if self.state == WriterState::Open {
            self.state = WriterState::Closed;
            let _ = self.sink.write_all(b"}\n");
            let _ = self.sink.flush();
        }
    }
}
