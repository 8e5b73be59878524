//! Error types for parsing match batches and querying the defeat graph.

use thiserror::Error;

use crate::types::Team;

/// Result type alias for match parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Validation failures for a match batch.
///
/// Parsing is all-or-nothing, so any of these means no graph was built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of lines in the trimmed batch.
    #[error("wrong line count: expected exactly {expected} match records, found {found}")]
    LineCount { expected: usize, found: usize },

    /// A line that does not split into four tokens.
    #[error("malformed line {line}: `{content}` (expected: TeamA ScoreA TeamB ScoreB)")]
    MalformedLine { line: usize, content: String },

    /// A score token that is not an integer.
    #[error("non-integer score `{token}` on line {line}")]
    InvalidScore { line: usize, token: String },

    /// Equal scores while ties are rejected.
    #[error("tied score on line {line}: {team_a} and {team_b} both scored {score}")]
    TiedScore {
        line: usize,
        team_a: Team,
        team_b: Team,
        score: i64,
    },
}

impl ParseError {
    /// True for the "malformed line or non-integer score" class.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedLine { .. } | ParseError::InvalidScore { .. }
        )
    }

    /// 1-based line the error points at, if it is tied to a single line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::LineCount { .. } => None,
            ParseError::MalformedLine { line, .. }
            | ParseError::InvalidScore { line, .. }
            | ParseError::TiedScore { line, .. } => Some(*line),
        }
    }
}

/// Result type alias for head-to-head queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Failures when asking how two teams compare.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Both sides of the query name the same team.
    #[error("cannot compare {0} with itself; pick two different teams")]
    SameTeam(Team),

    /// The team does not appear in the loaded batch.
    #[error("unknown team `{0}`")]
    UnknownTeam(String),

    /// No batch has been loaded yet.
    #[error("no match data loaded")]
    NotLoaded,
}
