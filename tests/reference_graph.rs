//! End-to-end tests of batch loading and reference-graph analysis through the public API.

use projscope::prelude::*;

/// Project-file XML with one `ProjectReference` per entry of `references`.
fn project_xml(references: &[&str]) -> String {
    let items: String = references
        .iter()
        .map(|r| format!("<ProjectReference Include=\"{r}\"/>"))
        .collect();
    format!("<Project Sdk=\"Microsoft.NET.Sdk\"><ItemGroup>{items}</ItemGroup></Project>")
}

fn load(projects: &[(&str, &[&str])]) -> ProjectGraph {
    let mut loader = WorkspaceLoader::new();
    for (path, references) in projects {
        let name = path.rsplit('/').next().unwrap();
        loader = loader.add_source(name, path, &project_xml(references));
    }
    let result = loader.load().expect("non-strict batch never errors");
    assert!(result.is_complete_success());
    result.workspace.build_graph()
}

fn paths(files: &[ProjectFileRc]) -> Vec<&str> {
    files.iter().map(|f| f.path.raw()).collect()
}

fn sorted(files: &[ProjectFileRc]) -> Vec<&str> {
    let mut result = paths(files);
    result.sort_unstable();
    result
}

#[test]
fn linear_chain() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj"]),
        ("sln/B/B.csproj", &[r"..\C\C.csproj"]),
        ("sln/C/C.csproj", &[]),
    ]);

    let a = graph.get("sln/A/A.csproj").unwrap();
    let b = graph.get("sln/B/B.csproj").unwrap();
    let c = graph.get("sln/C/C.csproj").unwrap();

    assert_eq!(paths(&a.references), vec!["sln/B/B.csproj"]);
    assert_eq!(paths(&b.references), vec!["sln/C/C.csproj"]);
    assert!(c.references.is_empty());

    assert!(a.referenced_by.is_empty());
    assert_eq!(paths(&b.referenced_by), vec!["sln/A/A.csproj"]);
    assert_eq!(paths(&c.referenced_by), vec!["sln/B/B.csproj"]);

    let roots = graph.top_level_projects();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].file.path.raw(), "sln/A/A.csproj");
}

#[test]
fn two_cycle_builds_and_traverses() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj"]),
        ("sln/B/B.csproj", &[r"..\A\A.csproj"]),
    ]);

    let a = graph.get("sln/A/A.csproj").unwrap();
    let b = graph.get("sln/B/B.csproj").unwrap();
    assert_eq!(paths(&a.references), vec!["sln/B/B.csproj"]);
    assert_eq!(paths(&b.references), vec!["sln/A/A.csproj"]);

    let closure = graph.subgraph("sln/A/A.csproj", Direction::Descend).unwrap();
    assert_eq!(sorted(&closure), vec!["sln/A/A.csproj", "sln/B/B.csproj"]);
}

#[test]
fn reference_outside_loaded_set_is_dropped() {
    let graph = load(&[("sln/A/A.csproj", &[r"..\Missing\Missing.proj"])]);

    let a = graph.get("sln/A/A.csproj").unwrap();
    assert!(a.references.is_empty());
    assert_eq!(graph.reference_count(), 0);
}

#[test]
fn ambiguous_suffix_match_adds_no_edge() {
    let graph = load(&[
        ("root/App.csproj", &["X.proj"]),
        ("Lib/X.proj", &[]),
        ("Other/X.proj", &[]),
    ]);

    assert!(graph.get("root/App.csproj").unwrap().references.is_empty());
    assert!(graph.get("Lib/X.proj").unwrap().is_top_level());
    assert!(graph.get("Other/X.proj").unwrap().is_top_level());
}

#[test]
fn diamond_counts_root_once() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj", r"..\C\C.csproj"]),
        ("sln/B/B.csproj", &[r"..\D\D.csproj"]),
        ("sln/C/C.csproj", &[r"..\D\D.csproj"]),
        ("sln/D/D.csproj", &[]),
    ]);

    let d = graph.get("sln/D/D.csproj").unwrap();
    assert_eq!(sorted(&d.referenced_by), vec!["sln/B/B.csproj", "sln/C/C.csproj"]);

    let roots = graph.top_level_dependants("sln/D/D.csproj").unwrap();
    assert_eq!(paths(&roots), vec!["sln/A/A.csproj"]);
}

#[test]
fn every_file_appears_in_exactly_one_node() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj"]),
        ("sln/B/B.csproj", &[]),
        ("sln/C/C.csproj", &[]),
    ]);

    assert_eq!(graph.project_count(), 3);
    for path in ["sln/A/A.csproj", "sln/B/B.csproj", "sln/C/C.csproj"] {
        let occurrences = graph
            .iter()
            .filter(|node| node.file.path.raw() == path)
            .count();
        assert_eq!(occurrences, 1);
    }
}

#[test]
fn edges_are_symmetric() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj", r"..\C\C.csproj"]),
        ("sln/B/B.csproj", &[r"..\C\C.csproj"]),
        ("sln/C/C.csproj", &[r"..\A\A.csproj"]),
    ]);

    for node in graph.iter() {
        for referenced in &node.references {
            let target = graph.get(referenced.path.raw()).unwrap();
            assert!(
                target
                    .referenced_by
                    .iter()
                    .any(|f| f.path.raw() == node.file.path.raw()),
                "missing back edge {} -> {}",
                node.file.path.raw(),
                referenced.path.raw()
            );
        }
        for referencing in &node.referenced_by {
            let source = graph.get(referencing.path.raw()).unwrap();
            assert!(
                source
                    .references
                    .iter()
                    .any(|f| f.path.raw() == node.file.path.raw()),
                "missing forward edge {} -> {}",
                referencing.path.raw(),
                node.file.path.raw()
            );
        }
    }
}

#[test]
fn top_level_iff_no_incoming_edges() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj"]),
        ("sln/B/B.csproj", &[]),
        ("sln/C/C.csproj", &[]),
    ]);

    for node in graph.iter() {
        assert_eq!(node.is_top_level(), node.referenced_by.is_empty());
    }
    assert_eq!(graph.top_level_projects().len(), 2);
}

#[test]
fn rebuilding_from_same_workspace_is_idempotent() {
    let result = WorkspaceLoader::new()
        .add_source("A.csproj", "sln/A/A.csproj", &project_xml(&[r"..\B\B.csproj"]))
        .add_source("B.csproj", "sln/B/B.csproj", &project_xml(&[]))
        .load()
        .unwrap();

    let first = result.workspace.build_graph();
    let second = result.workspace.build_graph();

    assert_eq!(first.project_count(), second.project_count());
    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.file.path.raw(), y.file.path.raw());
        assert_eq!(paths(&x.references), paths(&y.references));
        assert_eq!(paths(&x.referenced_by), paths(&y.referenced_by));
    }
}

#[test]
fn malformed_source_is_excluded_not_fatal() {
    let result = WorkspaceLoader::new()
        .add_source("A.csproj", "sln/A/A.csproj", &project_xml(&[r"..\B\B.csproj"]))
        .add_source("B.csproj", "sln/B/B.csproj", &project_xml(&[]))
        .add_source("Bad.csproj", "sln/Bad.csproj", "<Project><ItemGroup></Project>")
        .load()
        .unwrap();

    assert_eq!(result.success_count(), 2);
    assert_eq!(result.failure_count(), 1);

    let graph = result.workspace.build_graph();
    assert_eq!(graph.project_count(), 2);
    assert!(!graph.contains_project("sln/Bad.csproj"));
    // The surviving edge between the healthy files is unaffected.
    assert_eq!(graph.reference_count(), 1);
}

#[test]
fn removing_a_file_and_rebuilding_drops_its_edges() {
    let result = WorkspaceLoader::new()
        .add_source("A.csproj", "sln/A/A.csproj", &project_xml(&[r"..\B\B.csproj"]))
        .add_source("B.csproj", "sln/B/B.csproj", &project_xml(&[]))
        .load()
        .unwrap();

    let workspace = result.workspace;
    assert_eq!(workspace.build_graph().reference_count(), 1);

    workspace.remove_project("sln/B/B.csproj");
    let graph = workspace.build_graph();
    assert_eq!(graph.project_count(), 1);
    assert_eq!(graph.reference_count(), 0);
    assert!(graph.get("sln/A/A.csproj").unwrap().is_top_level());
}

#[test]
fn subgraph_from_every_focus_includes_focus_and_never_repeats() {
    let graph = load(&[
        ("sln/A/A.csproj", &[r"..\B\B.csproj", r"..\C\C.csproj"]),
        ("sln/B/B.csproj", &[r"..\C\C.csproj"]),
        ("sln/C/C.csproj", &[r"..\A\A.csproj"]),
    ]);

    for node in graph.iter() {
        let focus = node.file.path.raw();
        for direction in [Direction::Ascend, Direction::Descend] {
            let closure = graph.subgraph(focus, direction).unwrap();
            assert!(closure.iter().any(|f| f.path.raw() == focus));

            let mut seen = closure.iter().map(|f| f.path.raw()).collect::<Vec<_>>();
            seen.sort_unstable();
            let len_before = seen.len();
            seen.dedup();
            assert_eq!(len_before, seen.len(), "duplicate entry in closure of {focus}");
        }
    }
}

#[test]
fn framework_metadata_survives_loading() {
    let xml = r#"
        <Project Sdk="Microsoft.NET.Sdk">
          <PropertyGroup>
            <OutputType>Exe</OutputType>
            <TargetFrameworks>net8.0;net6.0</TargetFrameworks>
          </PropertyGroup>
        </Project>"#;

    let result = WorkspaceLoader::new()
        .add_source("App.csproj", "App.csproj", xml)
        .load()
        .unwrap();

    let file = result.workspace.get("App.csproj").unwrap();
    assert_eq!(file.document.target_frameworks(), vec!["net8.0", "net6.0"]);
    assert_eq!(file.document.output_type(), Some("Exe"));
    assert_eq!(file.document.sdk.as_deref(), Some("Microsoft.NET.Sdk"));
}
