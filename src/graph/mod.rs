//! Project reference-graph construction and traversal.
//!
//! This is the core of the crate: given the batch of loaded project files, it resolves
//! every declared cross-reference into an actual directed edge between loaded files,
//! derives the bidirectional edge sets (who each file depends on, who depends on each
//! file), and answers closure queries over the result.
//!
//! # Architecture
//!
//! Construction is a pure, synchronous, two-pass function over the complete batch:
//!
//! 1. **Forward pass** - every file's declared reference paths are resolved through the
//!    suffix matcher against the full loaded set, producing its `references` list in
//!    declaration order. References that match no loaded file, or more than one, are
//!    dropped silently; ambiguity is never guessed.
//! 2. **Backward pass** - once every forward edge exists, each file's `referenced_by`
//!    list is derived by scanning the forward-edge table for its raw path. Backward
//!    edges are never re-matched through the suffix rule, so forward and backward edges
//!    cannot disagree.
//!
//! The graph may contain cycles (including self-edges); every traversal in this module
//! terminates regardless, using an explicit visited set keyed by raw path.
//!
//! # Key Components
//!
//! - [`ProjectFile`] - One loaded, parsed project file (shared as [`ProjectFileRc`])
//! - [`ProjectNode`] - A file plus its derived `references`/`referenced_by` edge lists
//! - [`ProjectGraph`] - The complete graph with a canonical raw-path index
//! - [`Direction`] - Which edge set a closure traversal follows
//! - [`resolve_reference`] - The suffix-match resolution rule, usable standalone
//!
//! # Usage Examples
//!
//! ```rust
//! use projscope::graph::{Direction, ProjectFile, ProjectGraph};
//! use std::sync::Arc;
//!
//! let app = Arc::new(ProjectFile::parse(
//!     "App.csproj",
//!     "src/App/App.csproj",
//!     r#"<Project><ItemGroup>
//!         <ProjectReference Include="..\Lib\Lib.csproj"/>
//!     </ItemGroup></Project>"#,
//! )?);
//! let lib = Arc::new(ProjectFile::parse(
//!     "Lib.csproj",
//!     "src/Lib/Lib.csproj",
//!     "<Project/>",
//! )?);
//!
//! let graph = ProjectGraph::build(&[app, lib]);
//! let node = graph.get("src/App/App.csproj").unwrap();
//! assert_eq!(node.references[0].path.raw(), "src/Lib/Lib.csproj");
//!
//! let closure = graph.subgraph("src/App/App.csproj", Direction::Descend).unwrap();
//! assert_eq!(closure.len(), 2);
//! # Ok::<(), projscope::Error>(())
//! ```

pub use builder::ProjectGraph;
pub use matcher::resolve_reference;
pub use traversal::Direction;
pub use types::{ProjectFile, ProjectFileRc, ProjectNode};

mod builder;
mod matcher;
mod traversal;
mod types;
