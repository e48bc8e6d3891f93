use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all failure modes of DOT emission. The set is small on purpose: the
/// formatter itself is pure and cannot fail beyond input validation, so everything else
/// is either an API misuse surfaced as an explicit error or an I/O failure from the
/// output sink.
///
/// # Error Categories
///
/// ## Input Validation
/// - [`Error::EmptyIdentifier`] - Empty string supplied where a DOT identifier was expected
///
/// ## Lifecycle
/// - [`Error::WriterClosed`] - Statement issued against an already-closed writer
///
/// ## I/O and External Errors
/// - [`Error::WriteFailed`] - Underlying sink write or flush failure
///
/// # Examples
///
/// ```rust
/// use dotemit::{Error, GraphType, GraphWriter};
///
/// let mut buffer = Vec::new();
/// let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
/// writer.close()?;
///
/// match writer.write_node("a", None) {
///     Err(Error::WriterClosed { graph }) => {
///         eprintln!("graph '{}' already closed", graph);
///     }
///     other => panic!("expected WriterClosed, got {:?}", other),
/// }
/// # Ok::<(), dotemit::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An empty string was supplied where a DOT identifier was expected.
    ///
    /// The supported subset of the DOT grammar has no empty-identifier production,
    /// neither bare nor quoted. This error indicates a misuse of the API contract
    /// rather than an environmental condition.
    #[error("DOT identifiers can not be empty")]
    EmptyIdentifier,

    /// A statement was issued against a writer whose graph has already been closed.
    ///
    /// Once [`crate::GraphWriter::close`] has emitted the closing brace, the writer is in
    /// its terminal state and every further operation fails with this error, including a
    /// second `close`. The emitted file is complete; nothing may be appended after the
    /// closing `}` without producing invalid DOT.
    ///
    /// # Fields
    ///
    /// * `graph` - The (unquoted) name of the graph the writer was emitting
    #[error("Writer for graph '{graph}' is closed")]
    WriterClosed {
        /// The unquoted name of the graph whose writer was closed
        graph: String,
    },

    /// Writing to the underlying output sink failed.
    ///
    /// This wraps errors from the sink itself, such as a full disk or a stream that
    /// was torn down externally. These are environmental conditions, surfaced to the
    /// caller rather than swallowed, so no statement can be lost silently.
    #[error("Failed to write to the output sink")]
    WriteFailed(#[from] std::io::Error),
}
