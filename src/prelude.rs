//! # projscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! projscope library. Import this module to get quick access to the essential types for
//! project reference-graph analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all projscope operations
pub use crate::Error;

/// The result type used throughout projscope
pub use crate::Result;

// ================================================================================================
// Documents
// ================================================================================================

/// Parsed project-document model
pub use crate::document::{ItemGroup, ProjectDocument, ProjectReference, PropertyGroup};

// ================================================================================================
// Identity
// ================================================================================================

/// Path identity with suffix-match predicates
pub use crate::identity::ProjectPath;

// ================================================================================================
// Reference Graph
// ================================================================================================

/// Graph construction, nodes, and closure traversal
pub use crate::graph::{resolve_reference, Direction, ProjectGraph, ProjectNode};

/// Loaded file records
pub use crate::graph::{ProjectFile, ProjectFileRc};

// ================================================================================================
// Workspace and Loading
// ================================================================================================

/// Loaded-file container and batch loading
pub use crate::workspace::{LoadResult, ProjectKind, ProjectSource, ProjectWorkspace, WorkspaceLoader};
