//! Path identity for loaded project files.
//!
//! This module provides the identity type used to key and compare loaded project files.
//! A [`ProjectPath`] wraps the exact path string a file was loaded under and exposes the
//! derived display name, containing directory, and the trailing-segment predicates that
//! drive reference resolution across the loaded set.
//!
//! Matching is purely textual: no filesystem access is ever performed, forward and back
//! slashes are treated interchangeably, and missing drive letters or differing path roots
//! do not prevent two paths from matching on their trailing segments.
//!
//! # Key Components
//!
//! - [`ProjectPath`] - Path identity with suffix-match predicates
//!
//! # Usage Examples
//!
//! ```rust
//! use projscope::identity::ProjectPath;
//!
//! let path = ProjectPath::new("Solution/Lib/Core.csproj");
//! assert_eq!(path.name(), "Core.csproj");
//! assert_eq!(path.directory(), "Solution/Lib");
//!
//! // A reference declared as "..\Lib\Core.csproj" resolves against this path
//! assert!(path.is_sub_path_for(&["..", "Lib", "Core.csproj"]));
//! ```
//!
//! # Integration
//!
//! [`ProjectPath`] serves as the canonical key throughout the crate:
//! - **Reference resolution** in [`crate::graph`] tests candidate segments against it
//! - **Graph nodes** are indexed by its raw string in [`crate::graph::ProjectGraph`]
//! - **Workspace storage** in [`crate::workspace::ProjectWorkspace`] keys records by it

pub use path::ProjectPath;

mod path;
