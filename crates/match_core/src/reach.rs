//! Reachability over the defeat graph.
//!
//! Everything here is a plain breadth-first search from one team along
//! outgoing "defeated" edges. A team never counts as reaching itself unless
//! some path leads back to it.

use log::debug;
use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::graph::DefeatGraph;
use crate::types::Team;

/// Result of one BFS: who discovered whom, and whether the target was hit.
struct Search<'g> {
    parents: HashMap<&'g Team, &'g Team>,
    found: Option<&'g Team>,
}

/// Breadth-first search from `start`, stopping early once `target` is discovered.
///
/// The start node is enqueued without being marked visited, so it can be
/// rediscovered through a cycle. Every other node is marked when enqueued,
/// which bounds the work at O(V + E).
fn search<'g>(graph: &'g DefeatGraph, start: &str, target: Option<&str>) -> Search<'g> {
    let mut parents: HashMap<&'g Team, &'g Team> = HashMap::new();
    let mut queue: VecDeque<&'g Team> = VecDeque::new();

    let Some(start) = graph.team(start) else {
        return Search {
            parents,
            found: None,
        };
    };
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.defeated_by(current.as_str()) {
            if parents.contains_key(next) {
                continue;
            }
            parents.insert(next, current);
            if target == Some(next.as_str()) {
                return Search {
                    parents,
                    found: Some(next),
                };
            }
            queue.push_back(next);
        }
    }

    Search {
        parents,
        found: None,
    }
}

/// True if `winner` has a direct edge to `loser`.
pub fn has_edge(graph: &DefeatGraph, winner: &str, loser: &str) -> bool {
    graph.beats(winner, loser)
}

/// True if a path of one or more edges leads from `start` to `end`.
pub fn can_reach(graph: &DefeatGraph, start: &str, end: &str) -> bool {
    let reached = search(graph, start, Some(end)).found.is_some();
    debug!("can_reach({} -> {}) = {}", start, end, reached);
    reached
}

/// Every team reachable from `start` by at least one edge.
pub fn reachable_from(graph: &DefeatGraph, start: &str) -> BTreeSet<Team> {
    search(graph, start, None)
        .parents
        .into_keys()
        .cloned()
        .collect()
}

/// One shortest defeat chain from `start` to `end`, both ends included.
pub fn shortest_path(graph: &DefeatGraph, start: &str, end: &str) -> Option<Vec<Team>> {
    let Search { parents, found } = search(graph, start, Some(end));
    let end = found?;

    let mut path = vec![end.clone()];
    let mut current = end;
    loop {
        let parent = *parents.get(current)?;
        path.push(parent.clone());
        if parent.as_str() == start {
            break;
        }
        current = parent;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
#[path = "reach_tests.rs"]
mod reach_tests;
