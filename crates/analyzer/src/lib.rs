//! Match analyzer front end.
//!
//! This crate wraps `match_core` with:
//! - A TOML configuration file
//! - Pairwise reports over a whole batch
//! - An interactive shell that keeps one batch loaded at a time
//!
//! # Usage
//!
//! ```bash
//! # Compare two teams from the built-in sample
//! cargo run -p analyzer -- analyze MI SRH
//!
//! # Export the defeat graph of your own batch for Graphviz
//! cargo run -p analyzer -- graph --input matches.txt --format dot | dot -Tpng -o graph.png
//! ```

mod config;
mod report;
mod shell;

pub use config::*;
pub use report::*;
pub use shell::*;

use match_core::{to_dot, to_edge_list, to_json, DefeatGraph};

/// Render a graph in the requested export format.
pub fn render_graph(
    graph: &DefeatGraph,
    format: ExportFormat,
    export: &ExportConfig,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Dot => Ok(to_dot(graph, &export.dot_options())),
        ExportFormat::Json => to_json(graph),
        ExportFormat::Edges => Ok(to_edge_list(graph)),
    }
}
