//! Closure traversals over the reference graph.
//!
//! Both operations here walk a possibly-cyclic graph, so they share the same shape: an
//! iterative breadth-first worklist with a membership set keyed by raw path. A node
//! already collected is never expanded again, which bounds every traversal to at most
//! one visit per loaded file no matter how the edges loop.

use std::collections::{HashSet, VecDeque};

use crate::graph::{ProjectFileRc, ProjectGraph};

/// Which edge set a closure traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow `referenced_by` edges: collect the files that (transitively) depend on
    /// the focus - its ancestors.
    Ascend,

    /// Follow `references` edges: collect the files the focus (transitively) depends
    /// on - its descendants.
    Descend,
}

impl ProjectGraph {
    /// Extract the bounded sub-graph reachable from one focus file.
    ///
    /// Performs a breadth-first walk from the focus node, following the edge set picked
    /// by `direction`, and returns the closure including the focus itself. Every file
    /// appears at most once; cycles terminate because a file already in the result is
    /// never expanded again. The focus node's own edges are visited before deeper ones;
    /// order beyond that is stable but not contractual.
    ///
    /// # Arguments
    /// * `focus` - Raw path of the file to start from
    /// * `direction` - Which edge set to follow
    ///
    /// # Returns
    /// The closure as a list of files, or `None` when `focus` is not part of this
    /// graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use projscope::graph::{Direction, ProjectFile, ProjectGraph};
    /// use std::sync::Arc;
    ///
    /// let a = Arc::new(ProjectFile::parse(
    ///     "A.csproj",
    ///     "A/A.csproj",
    ///     r#"<Project><ItemGroup><ProjectReference Include="B\B.csproj"/></ItemGroup></Project>"#,
    /// )?);
    /// let b = Arc::new(ProjectFile::parse("B.csproj", "B/B.csproj", "<Project/>")?);
    /// let graph = ProjectGraph::build(&[a, b]);
    ///
    /// let descendants = graph.subgraph("A/A.csproj", Direction::Descend).unwrap();
    /// assert_eq!(descendants.len(), 2);
    ///
    /// let ancestors = graph.subgraph("B/B.csproj", Direction::Ascend).unwrap();
    /// assert_eq!(ancestors.len(), 2);
    /// # Ok::<(), projscope::Error>(())
    /// ```
    #[must_use]
    pub fn subgraph(&self, focus: &str, direction: Direction) -> Option<Vec<ProjectFileRc>> {
        let start = self.index_of(focus)?;

        let mut visited: HashSet<&str> = HashSet::new();
        let mut result: Vec<ProjectFileRc> = Vec::new();
        let mut worklist: VecDeque<usize> = VecDeque::new();

        let focus_node = self.node_at(start);
        visited.insert(focus_node.file.path.raw());
        result.push(focus_node.file.clone());
        worklist.push_back(start);

        while let Some(current) = worklist.pop_front() {
            let node = self.node_at(current);
            let edges = match direction {
                Direction::Ascend => &node.referenced_by,
                Direction::Descend => &node.references,
            };

            for neighbor in edges {
                if visited.insert(neighbor.path.raw()) {
                    result.push(neighbor.clone());
                    if let Some(next) = self.index_of(neighbor.path.raw()) {
                        worklist.push_back(next);
                    }
                }
            }
        }

        Some(result)
    }

    /// The top-level files that transitively depend on one focus file.
    ///
    /// Walks upward through `referenced_by`. Parents that are themselves top-level join
    /// the result directly; parents that are not are expanded in turn. Each root is
    /// listed exactly once even when it is reachable through several intermediate
    /// paths, and a file already expanded is never expanded again, so cycles above the
    /// focus terminate.
    ///
    /// A focus that is itself top-level has no dependants and yields an empty list, as
    /// does a focus whose every ancestor path loops without reaching a root.
    ///
    /// # Arguments
    /// * `focus` - Raw path of the file whose root dependants to compute
    ///
    /// # Returns
    /// The deduplicated list of top-level files, or `None` when `focus` is not part of
    /// this graph.
    #[must_use]
    pub fn top_level_dependants(&self, focus: &str) -> Option<Vec<ProjectFileRc>> {
        let start = self.index_of(focus)?;

        let mut expanded: HashSet<&str> = HashSet::new();
        let mut roots: Vec<ProjectFileRc> = Vec::new();
        let mut seen_roots: HashSet<&str> = HashSet::new();
        let mut worklist: VecDeque<usize> = VecDeque::new();

        expanded.insert(self.node_at(start).file.path.raw());
        worklist.push_back(start);

        while let Some(current) = worklist.pop_front() {
            for parent in &self.node_at(current).referenced_by {
                let Some(parent_index) = self.index_of(parent.path.raw()) else {
                    continue;
                };
                let parent_node = self.node_at(parent_index);

                if parent_node.is_top_level() {
                    if seen_roots.insert(parent_node.file.path.raw()) {
                        roots.push(parent_node.file.clone());
                    }
                } else if expanded.insert(parent_node.file.path.raw()) {
                    worklist.push_back(parent_index);
                }
            }
        }

        Some(roots)
    }
}
