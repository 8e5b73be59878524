//! Parser for match batches.
//!
//! A batch is a fixed number of lines, one match per line:
//!
//! ```text
//! MI 17 CSK 14
//! RCB 27 SRH 10
//! ```
//!
//! Parsing is all-or-nothing: the first bad line fails the whole batch and
//! nothing partially built is returned.

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::graph::DefeatGraph;
use crate::types::{MatchRecord, Team, TiePolicy};

/// Number of match records in a batch unless configured otherwise.
pub const DEFAULT_MATCH_COUNT: usize = 20;

/// Built-in batch of twenty IPL results.
pub const SAMPLE_MATCHES: &str = "\
MI 17 CSK 14
RCB 27 SRH 10
KKR 24 RR 10
CSK 24 PBKS 19
MI 35 RCB 26
PBKS 17 SRH 10
RCB 27 KKR 10
MI 24 PBKS 10
SRH 21 DC 14
KKR 31 RR 13
MI 10 DC 7
DC 17 CSK 14
RCB 34 RR 13
CSK 30 RR 7
MI 31 SRH 14
PBKS 42 DC 17
RCB 17 CSK 14
RR 31 SRH 14
RCB 21 PBKS 17
CSK 31 SRH 27";

/// Validation settings for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Exact number of lines a batch must have
    pub expected_matches: usize,
    /// What to do with equal scores
    pub tie_policy: TiePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            expected_matches: DEFAULT_MATCH_COUNT,
            tie_policy: TiePolicy::default(),
        }
    }
}

/// A successfully parsed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatches {
    /// Winner -> loser edges
    pub graph: DefeatGraph,
    /// Every team mentioned, sorted
    pub teams: Vec<Team>,
    /// The records in input order
    pub records: Vec<MatchRecord>,
}

/// Why a single line failed, before a line number is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    FieldCount,
    Score(String),
}

impl FromStr for MatchRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [team_a, score_a, team_b, score_b] = tokens.as_slice() else {
            return Err(RecordError::FieldCount);
        };

        let score = |token: &str| {
            token
                .parse::<i64>()
                .map_err(|_| RecordError::Score(token.to_string()))
        };

        Ok(MatchRecord::new(
            *team_a,
            score(*score_a)?,
            *team_b,
            score(*score_b)?,
        ))
    }
}

/// Parse a batch of match lines into a defeat graph and team registry.
pub fn parse_matches(text: &str, options: &ParseOptions) -> ParseResult<ParsedMatches> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() != options.expected_matches {
        return Err(ParseError::LineCount {
            expected: options.expected_matches,
            found: lines.len(),
        });
    }

    let mut graph = DefeatGraph::new();
    let mut records = Vec::with_capacity(lines.len());

    for (idx, raw) in lines.iter().enumerate() {
        let line = idx + 1;
        let record = raw.parse::<MatchRecord>().map_err(|e| match e {
            RecordError::FieldCount => ParseError::MalformedLine {
                line,
                content: raw.trim().to_string(),
            },
            RecordError::Score(token) => ParseError::InvalidScore { line, token },
        })?;

        let Some((winner, loser)) = record.outcome(options.tie_policy) else {
            return Err(ParseError::TiedScore {
                line,
                team_a: record.team_a.clone(),
                team_b: record.team_b.clone(),
                score: record.score_a,
            });
        };

        if !graph.add_defeat(winner.clone(), loser.clone()) {
            debug!("line {}: {} -> {} already recorded", line, winner, loser);
        }
        records.push(record);
    }

    let teams: Vec<Team> = graph.teams().cloned().collect();
    debug!(
        "parsed {} records: {} teams, {} edges",
        records.len(),
        teams.len(),
        graph.edge_count()
    );

    Ok(ParsedMatches {
        graph,
        teams,
        records,
    })
}

/// Render records back into the batch text format, one per line.
pub fn records_to_text(records: &[MatchRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.to_string());
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
