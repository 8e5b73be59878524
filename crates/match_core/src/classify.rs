//! Head-to-head classification of two teams.
//!
//! The verdict is decided from four facts: a direct edge either way, and
//! reachability either way. Direct edges are checked first only so the
//! verdict can say "Direct"; a direct edge is also a one-hop path.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::graph::DefeatGraph;
use crate::reach::{can_reach, has_edge};
use crate::types::Team;

/// How two teams relate in the defeat graph.
///
/// Winners are always named first, so swapping the query order never changes
/// who is reported as the victor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// `winner` beat `loser` in a recorded match.
    Direct { winner: Team, loser: Team },
    /// `winner` reaches `loser` through other teams, and not the other way round.
    Indirect { winner: Team, loser: Team },
    /// Each team reaches the other.
    Mutual { first: Team, second: Team },
    /// Neither team reaches the other.
    Incomparable { first: Team, second: Team },
}

/// Verdict category without the team names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Direct,
    Indirect,
    Mutual,
    Incomparable,
}

impl Verdict {
    pub fn kind(&self) -> VerdictKind {
        match self {
            Verdict::Direct { .. } => VerdictKind::Direct,
            Verdict::Indirect { .. } => VerdictKind::Indirect,
            Verdict::Mutual { .. } => VerdictKind::Mutual,
            Verdict::Incomparable { .. } => VerdictKind::Incomparable,
        }
    }

    /// The victorious team, for direct and indirect verdicts.
    pub fn winner(&self) -> Option<&Team> {
        match self {
            Verdict::Direct { winner, .. } | Verdict::Indirect { winner, .. } => Some(winner),
            Verdict::Mutual { .. } | Verdict::Incomparable { .. } => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Direct { winner, loser } => {
                write!(f, "{} DEFEATED {} (Direct)", winner, loser)
            }
            Verdict::Indirect { winner, loser } => {
                write!(f, "{} DEFEATED {} INDIRECTLY", winner, loser)
            }
            Verdict::Mutual { first, second } => {
                write!(f, "{} AND {} HAVE DEFEATED EACH OTHER INDIRECTLY", first, second)
            }
            Verdict::Incomparable { first, second } => {
                write!(f, "{} AND {} ARE NOT COMPARABLE", first, second)
            }
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VerdictKind::Direct => "direct",
            VerdictKind::Indirect => "indirect",
            VerdictKind::Mutual => "mutual",
            VerdictKind::Incomparable => "incomparable",
        };
        f.write_str(label)
    }
}

/// Classify how `a` and `b` relate.
///
/// First match wins:
/// 1. `a -> b` edge
/// 2. `b -> a` edge
/// 3. `a` reaches `b`, `b` does not reach `a`
/// 4. `b` reaches `a`, `a` does not reach `b`
/// 5. both reach each other
/// 6. neither reaches the other
///
/// Teams missing from the graph simply have no edges, so they come out as
/// incomparable. Comparing a team with itself is an error.
pub fn classify(graph: &DefeatGraph, a: &str, b: &str) -> QueryResult<Verdict> {
    if a == b {
        return Err(QueryError::SameTeam(Team::new(a)));
    }

    let (team_a, team_b) = (Team::new(a), Team::new(b));

    if has_edge(graph, a, b) {
        return Ok(Verdict::Direct {
            winner: team_a,
            loser: team_b,
        });
    }
    if has_edge(graph, b, a) {
        return Ok(Verdict::Direct {
            winner: team_b,
            loser: team_a,
        });
    }

    let verdict = match (can_reach(graph, a, b), can_reach(graph, b, a)) {
        (true, false) => Verdict::Indirect {
            winner: team_a,
            loser: team_b,
        },
        (false, true) => Verdict::Indirect {
            winner: team_b,
            loser: team_a,
        },
        (true, true) => Verdict::Mutual {
            first: team_a,
            second: team_b,
        },
        (false, false) => Verdict::Incomparable {
            first: team_a,
            second: team_b,
        },
    };
    Ok(verdict)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
