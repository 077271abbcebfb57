//! Resolution of declared reference strings against the loaded file set.
//!
//! A declared reference is a path written by hand (or by a tool) relative to its own
//! project file, so it rarely equals the path any file was actually loaded under. The
//! matcher bridges that gap with trailing-segment identity: the reference's segments,
//! stripped of `..` traversal, must equal the trailing segments of exactly one loaded
//! file's path.

use crate::graph::ProjectFileRc;

/// Resolve one declared reference string against the loaded file set.
///
/// The reference is split on either path separator, `..` traversal segments are
/// dropped, and the remaining segments are tested against every loaded file with
/// [`crate::identity::ProjectPath::is_sub_path_for`].
///
/// # Result Policy
///
/// - Exactly one loaded file matches: that file.
/// - Zero files match: `None` - the reference points outside the loaded set, which is a
///   deliberate no-edge outcome, not an error.
/// - Several files match: `None` - the reference is ambiguous, and guessing between
///   candidates would fabricate an edge the user never declared.
///
/// A reference that spells out a file's full path matches that file even when other
/// loaded files share its name, because the longer segment list disambiguates. A file
/// referencing its own path matches itself; self-edges are permitted.
///
/// # Arguments
/// * `reference` - The declared reference path, exactly as written
/// * `files` - The complete loaded file set
///
/// # Examples
///
/// ```rust
/// use projscope::graph::{resolve_reference, ProjectFile};
/// use std::sync::Arc;
///
/// let lib = Arc::new(ProjectFile::parse("Lib.csproj", "src/Lib/Lib.csproj", "<Project/>")?);
/// let files = vec![lib];
///
/// assert!(resolve_reference(r"..\Lib\Lib.csproj", &files).is_some());
/// assert!(resolve_reference(r"..\Missing\Missing.csproj", &files).is_none());
/// # Ok::<(), projscope::Error>(())
/// ```
#[must_use]
pub fn resolve_reference(reference: &str, files: &[ProjectFileRc]) -> Option<ProjectFileRc> {
    let segments: Vec<&str> = reference
        .split(|c| c == '/' || c == '\\')
        .filter(|segment| !segment.is_empty() && *segment != "..")
        .collect();

    if segments.is_empty() {
        return None;
    }

    let mut matches = files
        .iter()
        .filter(|file| file.path.is_sub_path_for(&segments));

    match (matches.next(), matches.next()) {
        (Some(file), None) => Some(file.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ProjectFile;
    use std::sync::Arc;

    fn file(raw_path: &str) -> ProjectFileRc {
        Arc::new(ProjectFile::parse("test", raw_path, "<Project/>").unwrap())
    }

    #[test]
    fn test_unique_match_resolves() {
        let files = vec![file("root/Lib/X.csproj"), file("root/App/App.csproj")];

        let resolved = resolve_reference(r"..\Lib\X.csproj", &files).unwrap();
        assert_eq!(resolved.path.raw(), "root/Lib/X.csproj");
    }

    #[test]
    fn test_zero_matches_is_unresolved() {
        let files = vec![file("root/Lib/X.csproj")];
        assert!(resolve_reference(r"..\Missing\Missing.csproj", &files).is_none());
    }

    #[test]
    fn test_ambiguous_match_is_unresolved() {
        let files = vec![file("Lib/X.csproj"), file("Other/X.csproj")];
        assert!(resolve_reference("X.csproj", &files).is_none());
    }

    #[test]
    fn test_longer_reference_disambiguates() {
        let files = vec![file("Lib/X.csproj"), file("Other/X.csproj")];

        let resolved = resolve_reference(r"Lib\X.csproj", &files).unwrap();
        assert_eq!(resolved.path.raw(), "Lib/X.csproj");
    }

    #[test]
    fn test_traversal_segments_are_dropped() {
        let files = vec![file("root/Lib/X.csproj")];

        let resolved = resolve_reference(r"..\..\Lib\X.csproj", &files).unwrap();
        assert_eq!(resolved.path.raw(), "root/Lib/X.csproj");
    }

    #[test]
    fn test_forward_slash_reference_resolves() {
        let files = vec![file(r"root\Lib\X.csproj")];

        let resolved = resolve_reference("Lib/X.csproj", &files).unwrap();
        assert_eq!(resolved.path.raw(), r"root\Lib\X.csproj");
    }

    #[test]
    fn test_self_reference_matches_itself() {
        let files = vec![file("root/Lib/X.csproj")];

        let resolved = resolve_reference("root/Lib/X.csproj", &files).unwrap();
        assert_eq!(resolved.path.raw(), "root/Lib/X.csproj");
    }

    #[test]
    fn test_reference_of_only_traversal_segments_is_unresolved() {
        let files = vec![file("root/Lib/X.csproj")];
        assert!(resolve_reference(r"..\..", &files).is_none());
        assert!(resolve_reference("", &files).is_none());
    }
}
