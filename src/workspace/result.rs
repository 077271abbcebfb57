//! Batch loading result type and statistics.
//!
//! [`LoadResult`] is the only failure-reporting surface of the loading pipeline: a
//! malformed source never aborts its siblings, it lands here as one recorded failure.

use crate::workspace::ProjectWorkspace;

/// Result of one batch loading operation.
///
/// Carries the populated workspace together with what happened to every submitted
/// source: loaded, failed (with the parse error message), or skipped by the accept
/// filter. All lists keep submission order.
///
/// # Usage
///
/// ```rust
/// use projscope::workspace::WorkspaceLoader;
///
/// let result = WorkspaceLoader::new()
///     .add_source("App.csproj", "App.csproj", "<Project/>")
///     .add_source("Broken.csproj", "Broken.csproj", "<<<")
///     .load()?;
///
/// if !result.is_complete_success() {
///     for (path, message) in &result.failed_loads {
///         eprintln!("failed to load {}: {}", path, message);
///     }
/// }
/// assert_eq!(result.success_count(), 1);
/// assert_eq!(result.failure_count(), 1);
/// # Ok::<(), projscope::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct LoadResult {
    /// The workspace holding all successfully loaded files.
    pub workspace: ProjectWorkspace,

    /// Raw paths of successfully loaded files, in submission order.
    pub loaded_projects: Vec<String>,

    /// Per-file failures: raw path and the parse error message.
    pub failed_loads: Vec<(String, String)>,

    /// Paths rejected by the accept filter. Skips are not failures.
    pub skipped_files: Vec<String>,

    /// Total number of successfully loaded files.
    pub loaded_count: usize,

    /// Total number of failed loads.
    pub failed_count: usize,
}

impl LoadResult {
    /// Create a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the batch loaded without any failures.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed_count == 0
    }

    /// Check if any source failed to load.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count > 0
    }

    /// Number of successfully loaded files.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.loaded_count
    }

    /// Number of failed loads.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed_count
    }

    /// Record a successful load.
    pub(crate) fn record_success(&mut self, raw_path: String) {
        self.loaded_projects.push(raw_path);
        self.loaded_count += 1;
    }

    /// Record a failed load.
    pub(crate) fn record_failure(&mut self, raw_path: String, message: String) {
        self.failed_loads.push((raw_path, message));
        self.failed_count += 1;
    }

    /// Record a source skipped by the accept filter.
    pub(crate) fn record_skip(&mut self, raw_path: String) {
        self.skipped_files.push(raw_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_records() {
        let mut result = LoadResult::new();
        assert!(result.is_complete_success());

        result.record_success("a.csproj".to_string());
        result.record_success("b.csproj".to_string());
        result.record_failure("c.csproj".to_string(), "bad xml".to_string());
        result.record_skip("d.txt".to_string());

        assert_eq!(result.success_count(), 2);
        assert_eq!(result.failure_count(), 1);
        assert!(result.has_failures());
        assert!(!result.is_complete_success());
        assert_eq!(result.skipped_files, vec!["d.txt"]);
    }
}
