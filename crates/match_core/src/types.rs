use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A team identifier such as `MI` or `CSK`.
///
/// Names are compared case-sensitively and never canonicalized. The parser
/// only ever produces non-empty, whitespace-free names.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Team {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Team {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How a record with equal scores is turned into an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Equal scores are a validation error.
    #[default]
    Reject,
    /// Equal scores count as a win for the second team on the line.
    SecondTeamWins,
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::Reject => f.write_str("reject"),
            TiePolicy::SecondTeamWins => f.write_str("second-team-wins"),
        }
    }
}

/// One line of input: `<TeamA> <ScoreA> <TeamB> <ScoreB>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team_a: Team,
    pub score_a: i64,
    pub team_b: Team,
    pub score_b: i64,
}

impl MatchRecord {
    pub fn new(team_a: &str, score_a: i64, team_b: &str, score_b: i64) -> Self {
        Self {
            team_a: Team::new(team_a),
            score_a,
            team_b: Team::new(team_b),
            score_b,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.score_a == self.score_b
    }

    /// Returns `(winner, loser)`, or `None` for a tie under [`TiePolicy::Reject`].
    pub fn outcome(&self, ties: TiePolicy) -> Option<(&Team, &Team)> {
        if self.score_a > self.score_b {
            Some((&self.team_a, &self.team_b))
        } else if self.score_b > self.score_a || ties == TiePolicy::SecondTeamWins {
            Some((&self.team_b, &self.team_a))
        } else {
            None
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.team_a, self.score_a, self.team_b, self.score_b
        )
    }
}
