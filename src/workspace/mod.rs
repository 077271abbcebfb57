//! Loaded-file container and batch loading.
//!
//! This module provides the [`ProjectWorkspace`] container for the set of currently
//! loaded project files, the [`WorkspaceLoader`] builder that fills one from a batch of
//! raw sources, and the [`LoadResult`] statistics object describing how the batch went.
//!
//! # Architecture
//!
//! - **Storage**: files keyed by raw path in a concurrent map; re-adding a path
//!   supersedes the old record, removing one shrinks the set.
//! - **Loading**: each source is parsed as an independent unit of work; the whole batch
//!   is joined - every success and every failure known - before any graph can be built,
//!   because incoming edges require the complete file set up front.
//! - **Derivation**: [`ProjectWorkspace::build_graph`] recomputes the full
//!   [`ProjectGraph`](crate::graph::ProjectGraph) from the current set on every call.
//!   There is no incremental update path, so there is no staleness to manage: change
//!   the set, derive again.
//!
//! # Usage Examples
//!
//! ```rust
//! use projscope::workspace::WorkspaceLoader;
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
//! assert!(result.is_complete_success());
//! let graph = result.workspace.build_graph();
//! assert_eq!(graph.project_count(), 2);
//! # Ok::<(), projscope::Error>(())
//! ```

use dashmap::DashMap;

use crate::graph::{ProjectFile, ProjectFileRc, ProjectGraph};

pub use loader::{ProjectKind, ProjectSource, WorkspaceLoader};
pub use result::LoadResult;

mod loader;
mod result;

/// Container for the currently loaded set of project files.
///
/// Files are keyed by their raw path. The container itself is unordered and safe to
/// share across threads; every derived view is produced through
/// [`projects`](Self::projects) / [`build_graph`](Self::build_graph), which snapshot
/// the set sorted by raw path so repeated derivations from the same set are identical.
///
/// # Lifecycle
///
/// The workspace is the mutable half of the system: files are added and removed as the
/// user imports or discards them, and after every change the graph is derived fresh.
/// Nothing in the workspace caches graph state.
///
/// # Examples
///
/// ```rust
/// use projscope::{graph::ProjectFile, workspace::ProjectWorkspace};
///
/// let workspace = ProjectWorkspace::new();
/// workspace.add_project(ProjectFile::parse("A.csproj", "A/A.csproj", "<Project/>")?);
/// assert_eq!(workspace.project_count(), 1);
///
/// workspace.remove_project("A/A.csproj");
/// assert!(workspace.is_empty());
/// # Ok::<(), projscope::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ProjectWorkspace {
    /// Loaded files, keyed by raw path.
    projects: DashMap<String, ProjectFileRc>,
}

impl ProjectWorkspace {
    /// Create a new empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: DashMap::new(),
        }
    }

    /// Add a file to the workspace, superseding any record loaded under the same raw
    /// path. Returns the shared handle now stored.
    pub fn add_project(&self, project: ProjectFile) -> ProjectFileRc {
        let handle = ProjectFileRc::new(project);
        self.projects
            .insert(handle.path.raw().to_string(), handle.clone());
        handle
    }

    /// Remove a file by raw path, returning its handle when it was present.
    pub fn remove_project(&self, raw_path: &str) -> Option<ProjectFileRc> {
        self.projects.remove(raw_path).map(|(_, handle)| handle)
    }

    /// Look up a file by raw path.
    #[must_use]
    pub fn get(&self, raw_path: &str) -> Option<ProjectFileRc> {
        self.projects.get(raw_path).map(|entry| entry.value().clone())
    }

    /// Check whether a file with the given raw path is loaded.
    #[must_use]
    pub fn contains_project(&self, raw_path: &str) -> bool {
        self.projects.contains_key(raw_path)
    }

    /// Number of loaded files.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Check whether the workspace holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Remove all files.
    pub fn clear(&self) {
        self.projects.clear();
    }

    /// Snapshot of all loaded files, sorted by raw path.
    ///
    /// The sort pins down an order for a container that has none, so every derivation
    /// from the same set comes out the same.
    #[must_use]
    pub fn projects(&self) -> Vec<ProjectFileRc> {
        let mut snapshot: Vec<ProjectFileRc> = self
            .projects
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        snapshot.sort_by(|a, b| a.path.raw().cmp(b.path.raw()));
        snapshot
    }

    /// Derive the complete reference graph from the current set.
    ///
    /// Pure derivation over a sorted snapshot: calling this twice without changing the
    /// workspace yields identical graphs, and after any add/remove it reflects the new
    /// set entirely - no incremental patching.
    #[must_use]
    pub fn build_graph(&self) -> ProjectGraph {
        ProjectGraph::build(&self.projects())
    }
}
