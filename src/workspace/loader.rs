//! WorkspaceLoader builder API for batch project loading.
//!
//! This module provides the `WorkspaceLoader` builder-style API for turning a batch of
//! raw project-file sources into a populated [`ProjectWorkspace`](crate::workspace::ProjectWorkspace), with per-file
//! failure isolation, an extension filter, and an optional strict mode.

use rayon::prelude::*;
use strum::{EnumIter, IntoEnumIterator};

use crate::{document::ProjectDocument, graph::ProjectFile, workspace::LoadResult, Error, Result};

/// Recognized project-file kinds, identified by file extension.
///
/// Drives the loader's default accept filter: a source whose path carries none of these
/// extensions is skipped (not failed) unless the filter is overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProjectKind {
    /// C# project (`.csproj`)
    CSharp,
    /// F# project (`.fsproj`)
    FSharp,
    /// Visual Basic project (`.vbproj`)
    VisualBasic,
    /// Language-agnostic MSBuild project (`.proj`)
    Generic,
}

impl ProjectKind {
    /// The file extension of this kind, without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ProjectKind::CSharp => "csproj",
            ProjectKind::FSharp => "fsproj",
            ProjectKind::VisualBasic => "vbproj",
            ProjectKind::Generic => "proj",
        }
    }

    /// Classify a path by its extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use projscope::workspace::ProjectKind;
    ///
    /// assert_eq!(ProjectKind::from_path("src/App/App.csproj"), Some(ProjectKind::CSharp));
    /// assert_eq!(ProjectKind::from_path(r"Build\Pack.PROJ"), Some(ProjectKind::Generic));
    /// assert_eq!(ProjectKind::from_path("readme.md"), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit(|c| c == '/' || c == '\\').next()?;
        let (_, extension) = name.rsplit_once('.')?;
        Self::iter().find(|kind| kind.extension().eq_ignore_ascii_case(extension))
    }
}

/// One raw project-file source handed to the loader.
///
/// Produced by the external file-reading collaborator; the loader itself never touches
/// the filesystem.
#[derive(Debug, Clone)]
pub struct ProjectSource {
    /// Display name for the file.
    pub name: String,
    /// Path string the file was read under. Becomes the raw-path key of the record.
    pub path: String,
    /// Raw text content of the file.
    pub content: String,
}

impl ProjectSource {
    /// Create a source from its three parts.
    #[must_use]
    pub fn new(name: &str, path: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            content: content.to_string(),
        }
    }
}

/// Builder for loading a batch of project sources into a workspace.
///
/// The batch model matches how the engine consumes files: every source is parsed as an
/// independent unit of work, the units run in parallel, and the loader joins the entire
/// batch - all successes and all failures known - before returning. A malformed source
/// excludes only itself; its siblings load normally. There is no cancellation and no
/// timeout: each unit resolves or fails on its own, and the join observes all outcomes.
///
/// # Usage Examples
///
/// ## Basic Loading
/// ```rust,ignore
/// let result = WorkspaceLoader::new()
///     .add_source("App.csproj", "src/App/App.csproj", &app_xml)
///     .add_source("Lib.csproj", "src/Lib/Lib.csproj", &lib_xml)
///     .load()?;
/// ```
///
/// ## Custom Accept Filter
/// ```rust,ignore
/// let result = WorkspaceLoader::new()
///     .accept(&["csproj"])
///     .add_source("Lib.fsproj", "Lib/Lib.fsproj", &fsproj_xml) // skipped, not failed
///     .load()?;
/// ```
///
/// ## Strict Mode
/// ```rust,ignore
/// // Any malformed source aborts the whole batch with an error.
/// let result = WorkspaceLoader::new()
///     .strict_mode(true)
///     .add_source("App.csproj", "App.csproj", &xml)
///     .load()?;
/// ```
#[derive(Debug, Default)]
pub struct WorkspaceLoader {
    /// Sources queued for the batch, in submission order.
    sources: Vec<ProjectSource>,
    /// Extension filter override; `None` accepts every [`ProjectKind`] extension.
    accept: Option<Vec<String>>,
    /// Whether a single parse failure aborts the whole batch.
    strict_mode: bool,
}

impl WorkspaceLoader {
    /// Create a new loader with an empty batch and the default accept filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            accept: None,
            strict_mode: false,
        }
    }

    /// Queue one source for the batch.
    ///
    /// # Arguments
    /// * `name` - Display name for the file
    /// * `path` - Path string the file was read under
    /// * `content` - Raw text content
    #[must_use]
    pub fn add_source(mut self, name: &str, path: &str, content: &str) -> Self {
        self.sources.push(ProjectSource::new(name, path, content));
        self
    }

    /// Queue an already-constructed source for the batch.
    #[must_use]
    pub fn with_source(mut self, source: ProjectSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Override the accept filter with an explicit extension list (without dots).
    ///
    /// Sources whose path extension is not in the list are skipped and recorded as
    /// such, never failed. An empty list disables filtering entirely and accepts every
    /// source.
    #[must_use]
    pub fn accept(mut self, extensions: &[&str]) -> Self {
        self.accept = Some(extensions.iter().map(|e| (*e).to_lowercase()).collect());
        self
    }

    /// Enable or disable strict mode.
    ///
    /// In strict mode any parse failure aborts the batch with an error. In non-strict
    /// mode (default) failures are recorded per file in the [`LoadResult`] and the rest
    /// of the batch loads normally.
    #[must_use]
    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Run the batch: filter, parse every accepted source in parallel, join all
    /// outcomes, and fill a workspace with the successes.
    ///
    /// # Returns
    /// A [`LoadResult`] carrying the populated [`ProjectWorkspace`](crate::workspace::ProjectWorkspace) and the batch
    /// statistics (loaded paths, per-file failures, skipped files).
    ///
    /// # Errors
    /// Only in strict mode, when any source fails to parse; the error names the
    /// offending path. Non-strict batches always return `Ok`.
    pub fn load(self) -> Result<LoadResult> {
        let mut result = LoadResult::new();

        let (accepted, skipped): (Vec<ProjectSource>, Vec<ProjectSource>) = self
            .sources
            .into_iter()
            .partition(|source| is_accepted(&source.path, self.accept.as_deref()));

        for source in skipped {
            result.record_skip(source.path);
        }

        // One independent parse per source; the collect is the batch join - every
        // outcome is known before the first record enters the workspace.
        let parsed: Vec<(ProjectSource, Result<ProjectDocument>)> = accepted
            .into_par_iter()
            .map(|source| {
                let document = ProjectDocument::parse(&source.content);
                (source, document)
            })
            .collect();

        for (source, outcome) in parsed {
            match outcome {
                Ok(document) => {
                    let handle = result.workspace.add_project(ProjectFile::new(
                        &source.name,
                        &source.path,
                        &source.content,
                        document,
                    ));
                    result.record_success(handle.path.raw().to_string());
                }
                Err(error) => {
                    if self.strict_mode {
                        return Err(Error::Error(format!(
                            "Failed to parse {} in strict mode: {}",
                            source.path, error
                        )));
                    }
                    result.record_failure(source.path, error.to_string());
                }
            }
        }

        Ok(result)
    }
}

/// Accept-filter check for one source path.
fn is_accepted(path: &str, accept: Option<&[String]>) -> bool {
    match accept {
        // Explicit empty list accepts everything.
        Some(extensions) if extensions.is_empty() => true,
        Some(extensions) => extension_of(path)
            .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false),
        None => ProjectKind::from_path(path).is_some(),
    }
}

/// Extension of a path's final segment, without the dot.
fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit(|c| c == '/' || c == '\\').next()?;
    name.rsplit_once('.').map(|(_, extension)| extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_PROJECT: &str = "<Project/>";

    #[test]
    fn test_project_kind_extensions() {
        assert_eq!(ProjectKind::from_path("a/b/App.csproj"), Some(ProjectKind::CSharp));
        assert_eq!(ProjectKind::from_path("Lib.fsproj"), Some(ProjectKind::FSharp));
        assert_eq!(ProjectKind::from_path(r"x\Old.vbproj"), Some(ProjectKind::VisualBasic));
        assert_eq!(ProjectKind::from_path("Build.proj"), Some(ProjectKind::Generic));
        assert_eq!(ProjectKind::from_path("notes.txt"), None);
        assert_eq!(ProjectKind::from_path("no_extension"), None);
    }

    #[test]
    fn test_load_fills_workspace() {
        let result = WorkspaceLoader::new()
            .add_source(
                "A.csproj",
                "s/A/A.csproj",
                r#"<Project><ItemGroup><ProjectReference Include="..\B\B.csproj"/></ItemGroup></Project>"#,
            )
            .add_source("B.csproj", "s/B/B.csproj", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert!(result.is_complete_success());
        assert_eq!(result.success_count(), 2);
        assert_eq!(result.workspace.project_count(), 2);

        let graph = result.workspace.build_graph();
        assert_eq!(graph.reference_count(), 1);
    }

    #[test]
    fn test_failing_source_excludes_only_itself() {
        let result = WorkspaceLoader::new()
            .add_source("Good.csproj", "s/Good.csproj", EMPTY_PROJECT)
            .add_source("Bad.csproj", "s/Bad.csproj", "<Project><ItemGroup></Project>")
            .add_source("Also.csproj", "s/Also.csproj", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert!(result.has_failures());
        assert_eq!(result.success_count(), 2);
        assert_eq!(result.failure_count(), 1);
        assert_eq!(result.failed_loads[0].0, "s/Bad.csproj");
        assert!(result.workspace.contains_project("s/Good.csproj"));
        assert!(!result.workspace.contains_project("s/Bad.csproj"));
    }

    #[test]
    fn test_strict_mode_aborts_batch() {
        let outcome = WorkspaceLoader::new()
            .strict_mode(true)
            .add_source("Good.csproj", "s/Good.csproj", EMPTY_PROJECT)
            .add_source("Bad.csproj", "s/Bad.csproj", "not xml at all")
            .load();

        let error = outcome.unwrap_err();
        assert!(error.to_string().contains("s/Bad.csproj"));
    }

    #[test]
    fn test_default_accept_skips_unknown_extensions() {
        let result = WorkspaceLoader::new()
            .add_source("App.csproj", "s/App.csproj", EMPTY_PROJECT)
            .add_source("readme", "s/readme.md", "# not a project")
            .load()
            .unwrap();

        assert!(result.is_complete_success());
        assert_eq!(result.success_count(), 1);
        assert_eq!(result.skipped_files, vec!["s/readme.md"]);
    }

    #[test]
    fn test_accept_override() {
        let result = WorkspaceLoader::new()
            .accept(&["csproj"])
            .add_source("App.csproj", "s/App.csproj", EMPTY_PROJECT)
            .add_source("Lib.fsproj", "s/Lib.fsproj", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert_eq!(result.success_count(), 1);
        assert_eq!(result.skipped_files, vec!["s/Lib.fsproj"]);
    }

    #[test]
    fn test_empty_accept_list_accepts_everything() {
        let result = WorkspaceLoader::new()
            .accept(&[])
            .add_source("anything", "s/anything.weird", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert_eq!(result.success_count(), 1);
        assert!(result.skipped_files.is_empty());
    }

    #[test]
    fn test_accept_is_case_insensitive() {
        let result = WorkspaceLoader::new()
            .add_source("App", "s/App.CSPROJ", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert_eq!(result.success_count(), 1);
    }

    #[test]
    fn test_empty_batch_loads_empty_workspace() {
        let result = WorkspaceLoader::new().load().unwrap();
        assert!(result.is_complete_success());
        assert!(result.workspace.is_empty());
    }

    #[test]
    fn test_reported_order_matches_submission_order() {
        let result = WorkspaceLoader::new()
            .add_source("C.csproj", "s/C.csproj", EMPTY_PROJECT)
            .add_source("A.csproj", "s/A.csproj", EMPTY_PROJECT)
            .add_source("B.csproj", "s/B.csproj", EMPTY_PROJECT)
            .load()
            .unwrap();

        assert_eq!(
            result.loaded_projects,
            vec!["s/C.csproj", "s/A.csproj", "s/B.csproj"]
        );
    }
}
