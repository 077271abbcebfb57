//! Path identity implementation for project files.
//!
//! A [`ProjectPath`] is constructed once per loaded file from the exact string the file
//! arrived under and is never revisited afterwards. All derived pieces (name, directory,
//! segment list) are computed eagerly so the suffix predicates are allocation-free.

use std::fmt;

/// Identity of a loaded project file, derived from its raw path string.
///
/// Wraps the exact path a file was loaded under and exposes the display name (final
/// segment), the containing directory (everything before the final segment), and two
/// directional trailing-segment predicates used for reference resolution.
///
/// # Separator Handling
///
/// Paths are segmented on both `/` and `\`; empty segments are discarded. This tolerates
/// mixed separators within one path and between a path and the reference strings matched
/// against it. No normalization beyond segmentation is performed: the [`raw`](Self::raw)
/// string is preserved verbatim and remains the unique key of the file.
///
/// # Equality Semantics
///
/// Two `ProjectPath` values are equal iff their raw strings are equal. The suffix
/// predicates deliberately do NOT participate in equality: "these two paths would match
/// the same reference" is a weaker relation than identity and is never used as a key.
///
/// # Examples
///
/// ```rust
/// use projscope::identity::ProjectPath;
///
/// let path = ProjectPath::new(r"Solution\Services\Billing.csproj");
/// assert_eq!(path.name(), "Billing.csproj");
/// assert_eq!(path.directory(), r"Solution\Services");
/// assert!(path.is_sub_path_for(&["Services", "Billing.csproj"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath {
    /// The exact path string this file was loaded under. Unique key of the file.
    raw: String,

    /// Final path segment, used as the display name.
    name: String,

    /// Everything before the final segment, without the trailing separator.
    directory: String,

    /// Non-empty path segments, split on either separator.
    segments: Vec<String>,
}

impl ProjectPath {
    /// Create a path identity from a raw path string.
    ///
    /// Accepts forward slashes, back slashes, or a mix of both. The raw string is kept
    /// verbatim; `name` and `directory` are sliced from it, and the segment list backing
    /// the suffix predicates is computed once here.
    ///
    /// # Arguments
    /// * `raw` - The path string exactly as the file was loaded
    ///
    /// # Examples
    ///
    /// ```rust
    /// use projscope::identity::ProjectPath;
    ///
    /// let unix = ProjectPath::new("src/App/App.csproj");
    /// let windows = ProjectPath::new(r"src\App\App.csproj");
    /// assert_eq!(unix.name(), windows.name());
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let segments: Vec<String> = split_segments(raw).map(str::to_string).collect();

        let (name, directory) = match raw.rfind(|c| c == '/' || c == '\\') {
            Some(pos) => (raw[pos + 1..].to_string(), raw[..pos].to_string()),
            None => (raw.to_string(), String::new()),
        };

        Self {
            raw: raw.to_string(),
            name,
            directory,
            segments,
        }
    }

    /// The exact path string this file was loaded under.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The display name of the file (final path segment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The containing directory (everything before the final segment), empty when the
    /// path has a single segment.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Number of segments in this path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Check whether `candidate`, read from the end, is a trailing match of this path.
    ///
    /// Leading `..` traversal segments in the candidate are ignored, so a relative
    /// reference like `..\..\Lib\Core.csproj` matches any loaded path ending in
    /// `Lib/Core.csproj`. A candidate identical to the full path matches as well;
    /// self-matches are not special-cased.
    ///
    /// # Arguments
    /// * `candidate` - Reference segments to test, outermost first
    ///
    /// # Returns
    /// `true` if the candidate's segments (after leading `..` removal) equal this path's
    /// trailing segments. An empty candidate never matches.
    #[must_use]
    pub fn is_sub_path_for<S: AsRef<str>>(&self, candidate: &[S]) -> bool {
        let mut trimmed: &[S] = candidate;
        while let Some(first) = trimmed.first() {
            if first.as_ref() == ".." {
                trimmed = &trimmed[1..];
            } else {
                break;
            }
        }

        is_trailing_match(&self.segments, trimmed)
    }

    /// Check whether this path's segments are a trailing match of `candidate`.
    ///
    /// The symmetric counterpart of [`is_sub_path_for`](Self::is_sub_path_for): `true`
    /// when the candidate is at least as long as this path and ends with all of this
    /// path's segments.
    ///
    /// # Arguments
    /// * `candidate` - Path segments to test against, outermost first
    #[must_use]
    pub fn is_parent_path_of<S: AsRef<str>>(&self, candidate: &[S]) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        candidate.len() >= self.segments.len()
            && candidate[candidate.len() - self.segments.len()..]
                .iter()
                .zip(&self.segments)
                .all(|(c, s)| c.as_ref() == s)
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a raw path into its non-empty segments, treating `/` and `\` alike.
pub(crate) fn split_segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c| c == '/' || c == '\\').filter(|s| !s.is_empty())
}

/// `true` if `shorter` is non-empty and equals the trailing segments of `longer`.
fn is_trailing_match<S: AsRef<str>>(longer: &[String], shorter: &[S]) -> bool {
    if shorter.is_empty() || longer.len() < shorter.len() {
        return false;
    }
    longer[longer.len() - shorter.len()..]
        .iter()
        .zip(shorter)
        .all(|(l, s)| l == s.as_ref())
}
