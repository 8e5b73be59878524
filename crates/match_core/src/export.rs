//! Read-only projections of the defeat graph for external renderers.
//!
//! Nothing here does layout. DOT output can be piped into Graphviz, JSON
//! output is plain `nodes` + `edges` for any other renderer.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::graph::DefeatGraph;
use crate::types::Team;

/// A `winner -> loser` edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeExport {
    pub winner: Team,
    pub loser: Team,
}

/// Plain nodes/edges view of a graph, both lists sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<Team>,
    pub edges: Vec<EdgeExport>,
}

impl From<&DefeatGraph> for GraphExport {
    fn from(graph: &DefeatGraph) -> Self {
        Self {
            nodes: graph.teams().cloned().collect(),
            edges: graph
                .edges()
                .map(|(winner, loser)| EdgeExport {
                    winner: winner.clone(),
                    loser: loser.clone(),
                })
                .collect(),
        }
    }
}

/// Styling for DOT output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    pub graph_name: String,
    pub node_color: String,
    pub edge_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "defeats".to_string(),
            node_color: "skyblue".to_string(),
            edge_color: "gray".to_string(),
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Render the graph as a Graphviz digraph.
pub fn to_dot(graph: &DefeatGraph, options: &DotOptions) -> String {
    let mut dot = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(dot, "digraph {} {{", quote(&options.graph_name));
    let _ = writeln!(
        dot,
        "    node [shape=circle, style=filled, fillcolor={}, fontname=\"bold\"];",
        quote(&options.node_color)
    );
    let _ = writeln!(dot, "    edge [color={}];", quote(&options.edge_color));

    for team in graph.teams() {
        let _ = writeln!(dot, "    {};", quote(team.as_str()));
    }
    for (winner, loser) in graph.edges() {
        let _ = writeln!(
            dot,
            "    {} -> {};",
            quote(winner.as_str()),
            quote(loser.as_str())
        );
    }
    dot.push_str("}\n");
    dot
}

/// Render the graph as pretty JSON (`{"nodes": [...], "edges": [...]}`).
pub fn to_json(graph: &DefeatGraph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GraphExport::from(graph))
}

/// One `winner -> loser` line per edge.
pub fn to_edge_list(graph: &DefeatGraph) -> String {
    graph
        .edges()
        .map(|(winner, loser)| format!("{} -> {}\n", winner, loser))
        .collect()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
