//! Node and file-record types for the reference graph.

use std::sync::Arc;

use crate::{document::ProjectDocument, identity::ProjectPath, Result};

/// Reference-counted handle to a loaded project file.
///
/// Files are shared between the workspace, the graph nodes, and traversal results, so
/// they are handed out behind an [`Arc`] and never copied.
pub type ProjectFileRc = Arc<ProjectFile>;

/// One loaded project file: identity, raw text, and parsed document.
///
/// Immutable once created. The [`path`](Self::path) raw string is the unique key of the
/// file everywhere in the crate; `name` is carried separately because the loading
/// collaborator may supply a display name that differs from the path's final segment.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    /// Display name of the file, as supplied by the loading collaborator.
    pub name: String,

    /// Path identity the file was loaded under.
    pub path: ProjectPath,

    /// The raw text content the document was parsed from.
    pub xml: String,

    /// The parsed document.
    pub document: ProjectDocument,
}

impl ProjectFile {
    /// Create a file record from an already-parsed document.
    #[must_use]
    pub fn new(name: &str, raw_path: &str, xml: &str, document: ProjectDocument) -> Self {
        Self {
            name: name.to_string(),
            path: ProjectPath::new(raw_path),
            xml: xml.to_string(),
            document,
        }
    }

    /// Parse raw project-file text and create the file record in one step.
    ///
    /// # Arguments
    /// * `name` - Display name for the file
    /// * `raw_path` - Path string the file was loaded under
    /// * `content` - Raw text content to parse
    ///
    /// # Errors
    /// Propagates [`crate::Error::Empty`] and [`crate::Error::Malformed`] from document
    /// parsing; a file that fails here is simply not part of the loaded set.
    pub fn parse(name: &str, raw_path: &str, content: &str) -> Result<Self> {
        let document = ProjectDocument::parse(content)?;
        Ok(Self::new(name, raw_path, content, document))
    }
}

/// A project file together with its resolved edge sets.
///
/// Derived by [`super::ProjectGraph::build`]; both lists hold only files that are part
/// of the same loaded set, and both are ordered (declaration order for `references`,
/// batch order for `referenced_by`).
#[derive(Debug, Clone)]
pub struct ProjectNode {
    /// The file this node represents.
    pub file: ProjectFileRc,

    /// Outgoing edges: the loaded files this one declares references to.
    pub references: Vec<ProjectFileRc>,

    /// Incoming edges: the loaded files that declare a reference to this one.
    pub referenced_by: Vec<ProjectFileRc>,
}

impl ProjectNode {
    /// `true` when nothing in the loaded set depends on this file.
    ///
    /// Top-level files are the roots of the dependency forest; see
    /// [`super::ProjectGraph::top_level_projects`] and
    /// [`super::ProjectGraph::top_level_dependants`].
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.referenced_by.is_empty()
    }
}
