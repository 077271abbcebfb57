//! Project Graph Example
//!
//! This example demonstrates how to use the `WorkspaceLoader` API to load a batch of
//! project files and analyze the resulting reference graph.
//!
//! The `WorkspaceLoader` provides a builder-style API for:
//! - Parsing a batch of project sources in parallel
//! - Isolating per-file parse failures from the rest of the batch
//! - Deriving the complete reference graph from the loaded set
//! - Closure queries: descendants, ancestors, and top-level roots
//!
//! The batch here is built in memory so the example runs standalone; in a real
//! integration the sources come from whatever read the files.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example project_graph
//! ```

use projscope::prelude::*;

fn source(path: &str, references: &[&str]) -> (String, String) {
    let items: String = references
        .iter()
        .map(|r| format!("    <ProjectReference Include=\"{r}\"/>\n"))
        .collect();
    let xml = format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    \
         <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n  \
         <ItemGroup>\n{items}  </ItemGroup>\n</Project>\n"
    );
    (path.to_string(), xml)
}

fn main() -> projscope::Result<()> {
    // A small solution: two applications sharing a service layer over a common core.
    let sources = [
        source("sln/App/App.csproj", &[r"..\Services\Services.csproj"]),
        source("sln/Tool/Tool.csproj", &[r"..\Services\Services.csproj"]),
        source("sln/Services/Services.csproj", &[r"..\Core\Core.csproj"]),
        source("sln/Core/Core.csproj", &[]),
    ];

    println!("=== projscope Project Graph Example ===\n");

    let mut loader = WorkspaceLoader::new();
    for (path, xml) in &sources {
        let name = path.rsplit('/').next().unwrap();
        loader = loader.add_source(name, path, xml);
    }

    let result = loader.load()?;
    println!(
        "Loaded {} projects ({} failed, {} skipped)\n",
        result.success_count(),
        result.failure_count(),
        result.skipped_files.len()
    );

    let graph = result.workspace.build_graph();

    println!("Projects:");
    for node in graph.iter() {
        let frameworks = node.file.document.target_frameworks().join(", ");
        println!(
            "  {:<24} top-level: {:<5} frameworks: [{}]",
            node.file.path.name(),
            node.is_top_level(),
            frameworks
        );
        for reference in &node.references {
            println!("    -> {}", reference.path.raw());
        }
        for dependant in &node.referenced_by {
            println!("    <- {}", dependant.path.raw());
        }
    }

    println!("\nTop-level projects:");
    for root in graph.top_level_projects() {
        println!("  {}", root.file.path.raw());
    }

    let focus = "sln/Core/Core.csproj";
    println!("\nEverything that depends on {focus}:");
    if let Some(ancestors) = graph.subgraph(focus, Direction::Ascend) {
        for file in &ancestors {
            println!("  {}", file.path.raw());
        }
    }

    println!("\nTop-level dependants of {focus}:");
    if let Some(roots) = graph.top_level_dependants(focus) {
        for file in &roots {
            println!("  {}", file.path.raw());
        }
    }

    Ok(())
}
