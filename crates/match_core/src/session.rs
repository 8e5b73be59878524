//! The currently loaded match batch.
//!
//! A [`Session`] owns at most one parsed batch. Loading replaces it wholesale,
//! and a failed load leaves the previous batch in place.

use log::{info, warn};

use crate::classify::{classify, Verdict};
use crate::error::{ParseResult, QueryError, QueryResult};
use crate::graph::DefeatGraph;
use crate::parser::{parse_matches, ParseOptions, ParsedMatches};
use crate::types::{MatchRecord, Team};

#[derive(Debug, Clone, Default)]
pub struct Session {
    options: ParseOptions,
    loaded: Option<ParsedMatches>,
}

impl Session {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            loaded: None,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text` and, if it is valid, make it the batch that gets queried.
    pub fn load(&mut self, text: &str) -> ParseResult<&ParsedMatches> {
        match parse_matches(text, &self.options) {
            Ok(parsed) => {
                info!(
                    "loaded {} matches: {} teams, {} edges",
                    parsed.records.len(),
                    parsed.teams.len(),
                    parsed.graph.edge_count()
                );
                let parsed: &ParsedMatches = self.loaded.insert(parsed);
                Ok(parsed)
            }
            Err(e) => {
                warn!("rejected match batch: {}", e);
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn current(&self) -> Option<&ParsedMatches> {
        self.loaded.as_ref()
    }

    /// Sorted team registry of the loaded batch (empty before any load).
    pub fn teams(&self) -> &[Team] {
        self.loaded
            .as_ref()
            .map(|p| p.teams.as_slice())
            .unwrap_or_default()
    }

    pub fn graph(&self) -> Option<&DefeatGraph> {
        self.loaded.as_ref().map(|p| &p.graph)
    }

    pub fn records(&self) -> &[MatchRecord] {
        self.loaded
            .as_ref()
            .map(|p| p.records.as_slice())
            .unwrap_or_default()
    }

    /// Classify two teams from the loaded batch.
    pub fn analyze(&self, a: &str, b: &str) -> QueryResult<Verdict> {
        let parsed = self.loaded.as_ref().ok_or(QueryError::NotLoaded)?;
        for name in [a, b] {
            if !parsed.graph.contains(name) {
                return Err(QueryError::UnknownTeam(name.to_string()));
            }
        }
        classify(&parsed.graph, a, b)
    }

    /// Drop the loaded batch.
    pub fn clear(&mut self) {
        self.loaded = None;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
