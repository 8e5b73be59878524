//! The defeat graph: one directed edge `winner -> loser` per pair of teams
//! where the winner outscored the loser at least once.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Team;

/// Directed win/loss graph with set semantics.
///
/// Repeated results between the same pair collapse into a single edge and
/// no weights are kept. Ordered collections keep iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefeatGraph {
    defeated: BTreeMap<Team, BTreeSet<Team>>,
    teams: BTreeSet<Team>,
}

static NO_TEAMS: BTreeSet<Team> = BTreeSet::new();

impl DefeatGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph straight from `(winner, loser)` pairs.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Self::new();
        for (winner, loser) in edges {
            graph.add_defeat(Team::new(winner), Team::new(loser));
        }
        graph
    }

    /// Record that `winner` beat `loser`. Returns false if the edge already existed.
    pub(crate) fn add_defeat(&mut self, winner: Team, loser: Team) -> bool {
        self.teams.insert(winner.clone());
        self.teams.insert(loser.clone());
        self.defeated.entry(winner).or_default().insert(loser)
    }

    /// Teams `team` has beaten directly. Unknown teams have no neighbours.
    pub fn defeated_by(&self, team: &str) -> &BTreeSet<Team> {
        self.defeated.get(team).unwrap_or(&NO_TEAMS)
    }

    /// True if there is a direct edge `winner -> loser`.
    pub fn beats(&self, winner: &str, loser: &str) -> bool {
        self.defeated_by(winner).contains(loser)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains(team)
    }

    /// Look up the stored team for a name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    /// All teams, sorted.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// All edges as `(winner, loser)`, sorted by winner then loser.
    pub fn edges(&self) -> impl Iterator<Item = (&Team, &Team)> {
        self.defeated
            .iter()
            .flat_map(|(winner, losers)| losers.iter().map(move |loser| (winner, loser)))
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn edge_count(&self) -> usize {
        self.defeated.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod graph_tests;
