// Copyright 2025 The projscope authors
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
#![allow(dead_code)]

//! # projscope
//!
//! A framework for resolving and analyzing the reference graph of MSBuild project files.
//! Given a batch of `.csproj`/`.fsproj`/`.vbproj`/`.proj` sources, `projscope` parses
//! each one, resolves the declared `ProjectReference` paths into actual edges between
//! the loaded files, and answers closure queries over the resulting graph - which files
//! a project depends on, which projects depend on it, and which top-level roots sit
//! above it - without ever touching the filesystem or a build toolchain.
//!
//! ## Features
//!
//! - **Batch parsing** - every source parses as an independent unit of work, in
//!   parallel; one malformed file never takes its siblings down
//! - **Suffix-match resolution** - declared reference paths resolve against the loaded
//!   set by trailing-segment identity, tolerant of mixed separators and `..` traversal
//! - **Conservative ambiguity handling** - a reference matching zero or several loaded
//!   files produces no edge; the engine never guesses
//! - **Cycle-safe traversal** - reference graphs may contain cycles; every closure
//!   query terminates regardless
//! - **Pure derivation** - the graph is recomputed in full from the loaded set, so
//!   there is no incremental state to grow stale
//!
//! ## Quick Start
//!
//! Add `projscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! projscope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use projscope::prelude::*;
//!
//! let result = WorkspaceLoader::new()
//!     .add_source(
//!         "App.csproj",
//!         "src/App/App.csproj",
//!         r#"<Project><ItemGroup><ProjectReference Include="..\Lib\Lib.csproj"/></ItemGroup></Project>"#,
//!     )
//!     .add_source("Lib.csproj", "src/Lib/Lib.csproj", "<Project/>")
//!     .load()?;
//!
//! let graph = result.workspace.build_graph();
//! let lib = graph.get("src/Lib/Lib.csproj").unwrap();
//! assert_eq!(lib.referenced_by[0].path.name(), "App.csproj");
//! # Ok::<(), projscope::Error>(())
//! ```
//!
//! ### Closure Queries
//!
//! ```rust
//! use projscope::prelude::*;
//!
//! # let result = WorkspaceLoader::new()
//! #     .add_source("App.csproj", "src/App/App.csproj",
//! #         r#"<Project><ItemGroup><ProjectReference Include="..\Lib\Lib.csproj"/></ItemGroup></Project>"#)
//! #     .add_source("Lib.csproj", "src/Lib/Lib.csproj", "<Project/>")
//! #     .load()?;
//! let graph = result.workspace.build_graph();
//!
//! // Everything the app pulls in, the app itself included
//! let descendants = graph.subgraph("src/App/App.csproj", Direction::Descend).unwrap();
//! assert_eq!(descendants.len(), 2);
//!
//! // The top-level projects that (transitively) depend on the library
//! let roots = graph.top_level_dependants("src/Lib/Lib.csproj").unwrap();
//! assert_eq!(roots[0].path.raw(), "src/App/App.csproj");
//! # Ok::<(), projscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `projscope` is organized into a small set of modules, leaf-first:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`identity`] - Path identity and the trailing-segment match predicates
//! - [`document`] - The parsed project-document model and its quick-xml parser
//! - [`graph`] - Reference resolution, two-pass graph construction, closure traversal
//! - [`workspace`] - The loaded-file container and the parallel batch loader
//! - [`Error`] and [`Result`] - Crate-wide error handling
//!
//! Reading files from disk, rendering the graph, and UI concerns are deliberately not
//! part of this crate; sources arrive as in-memory text and results leave as plain data.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Only genuinely broken input is
//! an error: text that is not a well-formed project document. A reference that cannot
//! be resolved inside the loaded set is an expected outcome and simply contributes no
//! edge.
//!
//! ```rust
//! use projscope::{document::ProjectDocument, Error};
//!
//! match ProjectDocument::parse("<Project><ItemGroup></Project>") {
//!     Ok(document) => println!("{} references", document.project_references().len()),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types from
/// across the projscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use projscope::prelude::*;
///
/// let result = WorkspaceLoader::new()
///     .add_source("A.csproj", "A.csproj", "<Project/>")
///     .load()?;
/// assert!(result.is_complete_success());
/// # Ok::<(), projscope::Error>(())
/// ```
pub mod prelude;

/// Structured representation of MSBuild-style project files.
///
/// Converts raw project-file XML text into the loosely-structured
/// [`document::ProjectDocument`] model and answers the queries the engine needs from
/// it: declared reference paths and declared target frameworks.
///
/// # Key Types
///
/// - [`document::ProjectDocument`] - One parsed project file
/// - [`document::ItemGroup`] / [`document::ProjectReference`] - Declared references
/// - [`document::PropertyGroup`] - Captured display properties
pub mod document;

/// Path identity and suffix matching for loaded project files.
///
/// Provides [`identity::ProjectPath`], the canonical per-file identity: raw path,
/// display name, containing directory, and the trailing-segment predicates used to
/// resolve declared references against the loaded set.
pub mod identity;

/// Reference-graph construction and traversal - the core of the crate.
///
/// # Key Types
///
/// - [`graph::ProjectGraph`] - The complete graph over one batch of loaded files
/// - [`graph::ProjectNode`] - One file with its `references`/`referenced_by` edges
/// - [`graph::Direction`] - Edge set selector for closure traversals
///
/// # Main Functions
///
/// - [`graph::ProjectGraph::build`] - Two-pass construction from the loaded set
/// - [`graph::ProjectGraph::subgraph`] - Ancestor/descendant closure of a focus file
/// - [`graph::ProjectGraph::top_level_dependants`] - Roots above a focus file
/// - [`graph::resolve_reference`] - The suffix-match resolution rule
pub mod graph;

/// Loaded-file container and parallel batch loading.
///
/// # Key Types
///
/// - [`workspace::ProjectWorkspace`] - The current loaded-file set, keyed by raw path
/// - [`workspace::WorkspaceLoader`] - Builder running one parse-and-join batch
/// - [`workspace::LoadResult`] - Batch statistics: loaded, failed, skipped
pub mod workspace;

/// `projscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust
/// use projscope::{document::ProjectDocument, Result};
///
/// fn parse(content: &str) -> Result<ProjectDocument> {
///     ProjectDocument::parse(content)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `projscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for document parsing and batch loading.
///
/// # Examples
///
/// ```rust
/// use projscope::{document::ProjectDocument, Error};
///
/// match ProjectDocument::parse("") {
///     Ok(_) => println!("parsed"),
///     Err(Error::Empty) => println!("empty input"),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
pub use error::Error;

/// The complete reference graph over one batch of loaded project files.
///
/// See [`graph::ProjectGraph`] for construction and the closure queries.
///
/// # Example
///
/// ```rust
/// use projscope::{graph::ProjectFile, ProjectGraph};
/// use std::sync::Arc;
///
/// let file = Arc::new(ProjectFile::parse("A.csproj", "A.csproj", "<Project/>")?);
/// let graph = ProjectGraph::build(&[file]);
/// assert_eq!(graph.project_count(), 1);
/// # Ok::<(), projscope::Error>(())
/// ```
pub use graph::ProjectGraph;
