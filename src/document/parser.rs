//! Event-based parser turning project-file XML text into [`ProjectDocument`] values.
//!
//! Built on `quick-xml`. The parser walks the event stream with an explicit element
//! stack and picks out the few shapes the model cares about: the `<Project>` root and
//! its `Sdk` attribute, `<ItemGroup>`/`<ProjectReference Include="..">` entries, and the
//! captured `<PropertyGroup>` properties. Everything else is consumed and ignored.
//!
//! Only direct children of the root are treated as groups; an `ItemGroup` nested inside
//! a `<Target>` is build-time machinery, not a reference declaration, and is skipped.

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::{
    document::{ItemGroup, ProjectDocument, ProjectReference, PropertyGroup},
    Error, Result,
};

/// Parse raw project-file XML text into a [`ProjectDocument`].
///
/// See [`ProjectDocument::parse`] for the public contract.
pub(crate) fn parse_document(xml: &str) -> Result<ProjectDocument> {
    if xml.trim().is_empty() {
        return Err(Error::Empty);
    }

    let mut reader = Reader::from_str(xml);
    let mut parser = DocumentParser::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => parser.handle_start(&mut reader, &element)?,
            Ok(Event::Empty(element)) => parser.handle_empty(&element)?,
            Ok(Event::End(_)) => {
                parser.stack.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => return Err(malformed_error!("invalid project XML: {}", error)),
        }
    }

    parser.finish()
}

/// Where the parser currently sits in the document, derived from the element stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Before the document root.
    Document,
    /// Directly inside `<Project>`.
    Project,
    /// Directly inside a top-level `<ItemGroup>`.
    ItemGroup,
    /// Directly inside a top-level `<PropertyGroup>`.
    PropertyGroup,
    /// Anywhere the model does not care about.
    Other,
}

/// Parser state: the document being built plus the stack of open element names.
struct DocumentParser {
    document: ProjectDocument,
    stack: Vec<String>,
    root_seen: bool,
}

impl DocumentParser {
    fn new() -> Self {
        Self {
            document: ProjectDocument::default(),
            stack: Vec::new(),
            root_seen: false,
        }
    }

    fn scope(&self) -> Scope {
        match self.stack.as_slice() {
            [] => Scope::Document,
            [root] if root == "Project" => Scope::Project,
            [root, group] if root == "Project" && group == "ItemGroup" => Scope::ItemGroup,
            [root, group] if root == "Project" && group == "PropertyGroup" => Scope::PropertyGroup,
            _ => Scope::Other,
        }
    }

    /// Handle an opening tag. Property elements consume their whole subtree here, so
    /// they are never pushed onto the stack; everything else is.
    fn handle_start(&mut self, reader: &mut Reader<&[u8]>, element: &BytesStart<'_>) -> Result<()> {
        let name = local_name(element);

        match self.scope() {
            Scope::Document => self.open_root(element, &name)?,
            Scope::Project => self.open_group(&name),
            Scope::ItemGroup if name == "ProjectReference" => self.push_reference(element)?,
            Scope::PropertyGroup if is_captured_property(&name) => {
                let text = reader
                    .read_text(element.name())
                    .map_err(|error| malformed_error!("invalid project XML: {}", error))?;
                self.set_property(&name, text.trim().to_string());
                // read_text consumed the matching end tag, nothing to pop later
                return Ok(());
            }
            _ => {}
        }

        self.stack.push(name);
        Ok(())
    }

    /// Handle a self-closing tag. Mirrors [`handle_start`](Self::handle_start) without
    /// touching the stack.
    fn handle_empty(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let name = local_name(element);

        match self.scope() {
            Scope::Document => self.open_root(element, &name)?,
            Scope::Project => self.open_group(&name),
            Scope::ItemGroup if name == "ProjectReference" => self.push_reference(element)?,
            _ => {}
        }

        Ok(())
    }

    fn open_root(&mut self, element: &BytesStart<'_>, name: &str) -> Result<()> {
        if name != "Project" {
            return Err(malformed_error!(
                "expected <Project> document root, found <{}>",
                name
            ));
        }
        self.root_seen = true;
        self.document.sdk = attribute_value(element, b"Sdk")?;
        Ok(())
    }

    fn open_group(&mut self, name: &str) {
        match name {
            "ItemGroup" => self.document.item_groups.push(ItemGroup::default()),
            "PropertyGroup" => self.document.property_groups.push(PropertyGroup::default()),
            _ => {}
        }
    }

    fn push_reference(&mut self, element: &BytesStart<'_>) -> Result<()> {
        if let Some(include) = attribute_value(element, b"Include")? {
            if let Some(group) = self.document.item_groups.last_mut() {
                group.project_references.push(ProjectReference { include });
            }
        }
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: String) {
        let Some(group) = self.document.property_groups.last_mut() else {
            return;
        };
        match name {
            "OutputType" => group.output_type = Some(value),
            "TargetFramework" => group.target_framework = Some(value),
            "TargetFrameworkVersion" => group.target_framework_version = Some(value),
            "TargetFrameworks" => group.target_frameworks = Some(value),
            _ => {}
        }
    }

    fn finish(self) -> Result<ProjectDocument> {
        if !self.root_seen {
            return Err(malformed_error!("no <Project> document root"));
        }
        Ok(self.document)
    }
}

/// `true` for the property elements captured into [`PropertyGroup`].
fn is_captured_property(name: &str) -> bool {
    matches!(
        name,
        "OutputType" | "TargetFramework" | "TargetFrameworkVersion" | "TargetFrameworks"
    )
}

/// Local name of an element as an owned string.
fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Look up one attribute by local name, unescaping its value.
fn attribute_value(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attribute in element.attributes() {
        let attribute =
            attribute.map_err(|error| malformed_error!("invalid project XML: {}", error))?;
        if attribute.key.local_name().as_ref() == name {
            let value = attribute
                .unescape_value()
                .map_err(|error| malformed_error!("invalid project XML: {}", error))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
