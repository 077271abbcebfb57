//! Two-pass construction of the complete reference graph.

use std::collections::HashMap;

use crate::graph::{matcher::resolve_reference, ProjectFileRc, ProjectNode};

/// The complete reference graph over one batch of loaded project files.
///
/// Holds one [`ProjectNode`] per loaded file plus a canonical raw-path index built once
/// at construction and reused by every lookup and traversal. The graph is a pure
/// derivation of the batch: it is never patched incrementally, and rebuilding it from
/// the same batch yields the same result.
///
/// # Construction
///
/// [`build`](Self::build) runs two passes over the batch. The first resolves every
/// file's declared references into forward edges; the second derives each file's
/// incoming edges by scanning the completed forward-edge table. The split is required:
/// no file's incoming edges can be known until every file's outgoing edges exist.
///
/// # Ordering
///
/// Nodes keep the order of the input batch. Within a node, `references` keeps
/// declaration order and `referenced_by` keeps batch order. Callers that need
/// deterministic output across rebuilds feed the batch in a deterministic order
/// (see [`crate::workspace::ProjectWorkspace::build_graph`]).
///
/// # Examples
///
/// ```rust
/// use projscope::graph::{ProjectFile, ProjectGraph};
/// use std::sync::Arc;
///
/// let a = Arc::new(ProjectFile::parse(
///     "A.csproj",
///     "A/A.csproj",
///     r#"<Project><ItemGroup><ProjectReference Include="B\B.csproj"/></ItemGroup></Project>"#,
/// )?);
/// let b = Arc::new(ProjectFile::parse("B.csproj", "B/B.csproj", "<Project/>")?);
///
/// let graph = ProjectGraph::build(&[a, b]);
/// assert_eq!(graph.project_count(), 2);
/// assert_eq!(graph.reference_count(), 1);
/// assert!(graph.get("B/B.csproj").unwrap().referenced_by[0].path.raw() == "A/A.csproj");
/// # Ok::<(), projscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    /// One node per loaded file, in batch order.
    nodes: Vec<ProjectNode>,

    /// Canonical lookup: raw path -> index into `nodes`.
    index: HashMap<String, usize>,
}

impl ProjectGraph {
    /// Build the complete graph for a batch of loaded files.
    ///
    /// Input entries whose raw path repeats an earlier entry are ignored, so every file
    /// appears in exactly one node keyed by its raw path. Declared references that
    /// resolve to no loaded file, or ambiguously to several, contribute no edge.
    ///
    /// # Arguments
    /// * `files` - The complete loaded file set; the whole batch must be known up front
    #[must_use]
    pub fn build(files: &[ProjectFileRc]) -> Self {
        let mut index = HashMap::with_capacity(files.len());
        let mut records: Vec<ProjectFileRc> = Vec::with_capacity(files.len());
        for file in files {
            if !index.contains_key(file.path.raw()) {
                index.insert(file.path.raw().to_string(), records.len());
                records.push(file.clone());
            }
        }

        // Pass 1: forward edges, declaration order, unresolved references dropped.
        let references: Vec<Vec<ProjectFileRc>> = records
            .iter()
            .map(|file| {
                file.document
                    .project_references()
                    .iter()
                    .filter_map(|reference| resolve_reference(reference, &records))
                    .collect()
            })
            .collect();

        // Pass 2: incoming edges, derived from the completed forward-edge table by
        // raw-path key so both directions always agree.
        let nodes = records
            .iter()
            .enumerate()
            .map(|(target, file)| {
                let referenced_by = records
                    .iter()
                    .enumerate()
                    .filter(|(source, _)| {
                        references[*source]
                            .iter()
                            .any(|edge| edge.path.raw() == file.path.raw())
                    })
                    .map(|(_, source_file)| source_file.clone())
                    .collect();

                ProjectNode {
                    file: file.clone(),
                    references: references[target].clone(),
                    referenced_by,
                }
            })
            .collect();

        Self { nodes, index }
    }

    /// Look up the node of a file by its raw path.
    #[must_use]
    pub fn get(&self, raw_path: &str) -> Option<&ProjectNode> {
        self.index.get(raw_path).map(|&i| &self.nodes[i])
    }

    /// Check whether a file with the given raw path is part of this graph.
    #[must_use]
    pub fn contains_project(&self, raw_path: &str) -> bool {
        self.index.contains_key(raw_path)
    }

    /// All nodes of the graph, in batch order.
    #[must_use]
    pub fn nodes(&self) -> &[ProjectNode] {
        &self.nodes
    }

    /// Iterate over all nodes in batch order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectNode> {
        self.nodes.iter()
    }

    /// Number of files in the graph.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of resolved reference edges in the graph.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.nodes.iter().map(|node| node.references.len()).sum()
    }

    /// Check if the graph contains no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All top-level nodes: files nothing else depends on, in batch order.
    #[must_use]
    pub fn top_level_projects(&self) -> Vec<&ProjectNode> {
        self.nodes.iter().filter(|node| node.is_top_level()).collect()
    }

    /// Internal: index of a node by raw path.
    pub(crate) fn index_of(&self, raw_path: &str) -> Option<usize> {
        self.index.get(raw_path).copied()
    }

    /// Internal: node by index.
    pub(crate) fn node_at(&self, index: usize) -> &ProjectNode {
        &self.nodes[index]
    }
}
