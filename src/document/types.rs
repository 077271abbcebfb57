//! Data structures for parsed project documents.
//!
//! These types mirror the subset of the MSBuild project-file format the engine consumes:
//! reference declarations grouped in item groups, and the handful of properties shown by
//! the visualization layer. Everything else in a project file is ignored at parse time.

use crate::Result;

/// A parsed project document.
///
/// Produced by [`ProjectDocument::parse`] from raw project-file XML. The document keeps
/// declaration order everywhere: item groups appear in file order, and references within
/// a group appear in the order they were written. Graph construction depends on that
/// ordering to produce stable edge lists.
///
/// # Optional Sections
///
/// Every section of a project file is optional. A document without item groups simply
/// declares no references; a document without property groups has no framework metadata.
/// Neither case is an error, per the contract of [`project_references`](Self::project_references)
/// and [`target_frameworks`](Self::target_frameworks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDocument {
    /// Value of the `Sdk` attribute on the document root, when present.
    pub sdk: Option<String>,

    /// All `<ItemGroup>` sections, in declaration order.
    pub item_groups: Vec<ItemGroup>,

    /// All `<PropertyGroup>` sections, in declaration order.
    pub property_groups: Vec<PropertyGroup>,
}

/// One `<ItemGroup>` section of a project document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemGroup {
    /// The `<ProjectReference>` entries of this group, in declaration order.
    pub project_references: Vec<ProjectReference>,
}

/// One `<ProjectReference>` entry carrying an `Include` path attribute.
///
/// Entries without an `Include` attribute (e.g. `Remove` or `Update` items) are dropped
/// at parse time; entries whose `Include` is present but empty are kept here and filtered
/// by [`ProjectDocument::project_references`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectReference {
    /// The declared reference path, exactly as written in the document.
    pub include: String,
}

/// One `<PropertyGroup>` section of a project document.
///
/// Only the properties consumed by the visualization layer are captured; within one
/// group, a repeated property keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyGroup {
    /// `<OutputType>` value (e.g. `Exe`, `Library`).
    pub output_type: Option<String>,

    /// `<TargetFramework>` value (single framework moniker).
    pub target_framework: Option<String>,

    /// `<TargetFrameworkVersion>` value (legacy-style version, e.g. `v4.8`).
    pub target_framework_version: Option<String>,

    /// `<TargetFrameworks>` value (`;`-separated list of monikers).
    pub target_frameworks: Option<String>,
}

impl ProjectDocument {
    /// Parse raw project-file XML text into a document.
    ///
    /// The parser is event-based and permissive: unrecognized elements and attributes are
    /// skipped, and no schema validation is performed beyond requiring a well-formed
    /// `<Project>` document root.
    ///
    /// # Arguments
    /// * `xml` - The raw text content of one project file
    ///
    /// # Errors
    /// [`crate::Error::Empty`] when the input is empty or whitespace-only, and
    /// [`crate::Error::Malformed`] when the input is not well-formed XML or its root
    /// element is not `<Project>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use projscope::document::ProjectDocument;
    ///
    /// let document = ProjectDocument::parse("<Project></Project>")?;
    /// assert!(document.project_references().is_empty());
    /// # Ok::<(), projscope::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        super::parser::parse_document(xml)
    }

    /// The declared cross-reference paths of this document, in declaration order.
    ///
    /// Flattens the `<ProjectReference>` entries across all item groups and keeps only
    /// those carrying a non-empty `Include` path. A document without item groups, or
    /// whose groups declare no references, yields an empty sequence - not an error.
    #[must_use]
    pub fn project_references(&self) -> Vec<&str> {
        self.item_groups
            .iter()
            .flat_map(|group| &group.project_references)
            .map(|reference| reference.include.as_str())
            .filter(|include| !include.is_empty())
            .collect()
    }

    /// The declared target frameworks of this document.
    ///
    /// Collects `TargetFramework`, then `TargetFrameworkVersion`, then `TargetFrameworks`
    /// values across all property groups, splits each value on `;`, and drops empty
    /// entries. Pure side query for display; graph construction never consults it.
    #[must_use]
    pub fn target_frameworks(&self) -> Vec<String> {
        let groups = &self.property_groups;
        groups
            .iter()
            .filter_map(|group| group.target_framework.as_deref())
            .chain(
                groups
                    .iter()
                    .filter_map(|group| group.target_framework_version.as_deref()),
            )
            .chain(
                groups
                    .iter()
                    .filter_map(|group| group.target_frameworks.as_deref()),
            )
            .flat_map(|value| value.split(';'))
            .filter(|framework| !framework.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The declared output type of this document, when any property group carries one.
    #[must_use]
    pub fn output_type(&self) -> Option<&str> {
        self.property_groups
            .iter()
            .find_map(|group| group.output_type.as_deref())
            .filter(|value| !value.is_empty())
    }
}
