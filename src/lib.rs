// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # dotemit
//!
//! [![Crates.io](https://img.shields.io/crates/v/dotemit.svg)](https://crates.io/crates/dotemit)
//! [![Documentation](https://docs.rs/dotemit/badge.svg)](https://docs.rs/dotemit)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/dotemit/blob/main/LICENSE-APACHE)
//!
//! A small, sink-agnostic writer for GraphViz DOT graph description files. `dotemit`
//! turns a sequence of node and edge declarations into a `.dot` text stream that
//! external GraphViz tooling can lay out and render, taking care of the lexical rules
//! of the format - identifier classification, selective quoting and escaping, and
//! attribute-list serialization - so callers never have to.
//!
//! The crate is write-only by design: it never parses DOT, never reads back what it
//! wrote, and performs no layout. Statements appear in the output in exactly the
//! order they were issued.
//!
//! ## Features
//!
//! - **🖋 Line-oriented emission** - One DOT statement per line, appended in call order
//! - **🔤 Identifier quoting** - Bare identifiers pass through untouched, everything else is quoted with embedded quotes escaped
//! - **🏷 Attribute lists** - Deterministic `[key=value, ...]` serialization with per-value quoting
//! - **🛡 Checked lifecycle** - Writing to a closed graph is an explicit error, not a corrupted file
//! - **📦 Sink-agnostic** - Emits into any [`std::io::Write`]: files, buffers, sockets
//!
//! ## Quick Start
//!
//! Add `dotemit` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dotemit = "0.1"
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use dotemit::{AttributeMap, GraphType, GraphWriter};
//!
//! let mut buffer = Vec::new();
//! let mut writer = GraphWriter::new(&mut buffer, "G", GraphType::Directed)?;
//!
//! let mut attrs = AttributeMap::new();
//! attrs.insert("label".to_string(), "hello world".to_string());
//!
//! writer.write_node("a", Some(&attrs))?;
//! writer.write_node("b", None)?;
//! writer.write_edge("a", "b", None)?;
//! writer.close()?;
//!
//! drop(writer);
//! let dot = String::from_utf8(buffer).unwrap();
//! assert_eq!(
//!     dot,
//!     "digraph G {\n    a[label=\"hello world\"];\n    b;\n    a -> b;\n}\n"
//! );
//! # Ok::<(), dotemit::Error>(())
//! ```
//!
//! ### Writing to a File
//!
//! ```rust,no_run
//! use dotemit::{GraphType, GraphWriter};
//!
//! let mut writer = GraphWriter::create("graph.dot", "deps", GraphType::Directed)?;
//! writer.write_edge("app", "core", None)?;
//! writer.close()?;
//! # Ok::<(), dotemit::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `dotemit` is organized into three layers, in dependency order:
//!
//! - [`quote_id`] / [`is_regular_id`] - identifier classification and quoting
//! - [`format_attributes`] / [`format_attribute_bracket`] - attribute-list serialization
//! - [`GraphWriter`] - the stateful line sequencer composing the two over an owned sink
//!
//! ## Output Format
//!
//! The emitted subset of DOT is textual UTF-8, one statement per line:
//!
//! ```text
//! digraph G {
//!     a[label="hello world"];
//!     b;
//!     a -> b;
//! }
//! ```
//!
//! Only the bare-identifier and quoted-string forms of DOT identifiers are
//! produced; the numeral and HTML (`<...>`) forms are out of scope, as is any
//! validation that an attribute is semantically meaningful to GraphViz.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Misuse of the
//! lifecycle (an empty graph name, a statement after [`GraphWriter::close`])
//! and sink failures are reported as explicit [`Error`] values; nothing is
//! silently dropped.

pub(crate) mod attributes;
pub(crate) mod error;
pub(crate) mod identifier;
pub(crate) mod writer;

/// `dotemit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust
/// use dotemit::{GraphType, GraphWriter, Result};
///
/// fn write_empty(buffer: &mut Vec<u8>) -> Result<()> {
///     let mut writer = GraphWriter::new(buffer, "empty", GraphType::Undirected)?;
///     writer.close()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotemit` Error type
///
/// The main error type for all operations in this crate. Covers input validation,
/// lifecycle misuse, and sink write failures.
///
/// # Examples
///
/// ```rust
/// use dotemit::{quote_id, Error};
///
/// match quote_id("") {
///     Err(Error::EmptyIdentifier) => {}
///     other => panic!("expected EmptyIdentifier, got {:?}", other),
/// }
/// ```
pub use error::Error;

/// Stateful writer emitting one DOT statement per line into an owned sink.
///
/// See [`writer::GraphWriter`] for the full lifecycle contract.
pub use writer::GraphWriter;

/// Directedness of an emitted graph: `graph`/`--` or `digraph`/`->`.
pub use writer::GraphType;

/// Mapping of attribute names to raw values with deterministic iteration order.
pub use attributes::AttributeMap;

/// Serializes an attribute map into DOT attribute-list form, without brackets.
pub use attributes::format_attributes;

/// Serializes an attribute map into a bracketed DOT attribute list, or nothing.
pub use attributes::format_attribute_bracket;

/// Classifies a string as a bare DOT identifier.
pub use identifier::is_regular_id;

/// Quotes and escapes an identifier for use in a DOT statement, if needed.
pub use identifier::quote_id;
