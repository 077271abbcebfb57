//! Structured representation of MSBuild-style project files.
//!
//! This module converts raw project-file XML text into the loosely-structured
//! [`ProjectDocument`] model and answers the two queries the rest of the crate needs from
//! it: the declared cross-reference paths (the input of graph construction) and the
//! declared target frameworks (a display-only side query).
//!
//! The model is deliberately permissive. Project files in the wild carry many elements
//! this crate has no use for; everything unrecognized is skipped without error, and a
//! document that declares no references at all is perfectly valid. Only text that is not
//! well-formed XML, or that lacks the `<Project>` document root, fails to parse.
//!
//! # Key Components
//!
//! - [`ProjectDocument`] - Parsed document with item groups and property groups
//! - [`ItemGroup`], [`ProjectReference`] - Declared cross-references
//! - [`PropertyGroup`] - Output type and target-framework properties
//!
//! # Usage Examples
//!
//! ```rust
//! use projscope::document::ProjectDocument;
//!
//! let xml = r#"
//!     <Project Sdk="Microsoft.NET.Sdk">
//!       <PropertyGroup>
//!         <TargetFrameworks>net8.0;netstandard2.0</TargetFrameworks>
//!       </PropertyGroup>
//!       <ItemGroup>
//!         <ProjectReference Include="..\Core\Core.csproj" />
//!       </ItemGroup>
//!     </Project>"#;
//!
//! let document = ProjectDocument::parse(xml)?;
//! assert_eq!(document.project_references(), vec![r"..\Core\Core.csproj"]);
//! assert_eq!(document.target_frameworks(), vec!["net8.0", "netstandard2.0"]);
//! # Ok::<(), projscope::Error>(())
//! ```

pub use types::{ItemGroup, ProjectDocument, ProjectReference, PropertyGroup};

mod parser;
mod types;
