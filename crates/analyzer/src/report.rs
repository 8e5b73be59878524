//! Pairwise analysis reports: every team against every other team.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use match_core::{classify, ParseOptions, ParsedMatches, QueryError, Team, Verdict, VerdictKind};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to classify pair: {0}")]
    Query(#[from] QueryError),

    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete pairwise analysis of one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name/description of the batch
    pub name: String,
    /// Participating teams, sorted
    pub teams: Vec<Team>,
    /// Settings the batch was parsed with
    pub options: ParseOptions,
    /// One entry per unordered pair of distinct teams
    pub entries: Vec<PairEntry>,
}

/// Verdict for a single pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    pub team_a: Team,
    pub team_b: Team,
    pub verdict: Verdict,
}

impl AnalysisReport {
    /// Classify every unordered pair of teams in `parsed`.
    pub fn build(
        name: &str,
        parsed: &ParsedMatches,
        options: ParseOptions,
    ) -> Result<Self, ReportError> {
        let mut entries = Vec::new();
        for (i, team_a) in parsed.teams.iter().enumerate() {
            for team_b in &parsed.teams[i + 1..] {
                let verdict = classify(&parsed.graph, team_a.as_str(), team_b.as_str())?;
                entries.push(PairEntry {
                    team_a: team_a.clone(),
                    team_b: team_b.clone(),
                    verdict,
                });
            }
        }
        log::debug!("report `{}`: {} pairs", name, entries.len());

        Ok(Self {
            name: name.to_string(),
            teams: parsed.teams.clone(),
            options,
            entries,
        })
    }

    /// Number of pairs per verdict kind
    pub fn summary(&self) -> BTreeMap<VerdictKind, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.verdict.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Analysis: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}\n",
            self.teams
                .iter()
                .map(Team::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        report.push_str(&format!(
            "Config: {} matches, ties: {}\n\n",
            self.options.expected_matches, self.options.tie_policy
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<10} vs {:<10} {:<14} {}\n",
            "Team A", "Team B", "Kind", "Verdict"
        ));
        report.push_str(&"-".repeat(72));
        report.push('\n');

        for entry in &self.entries {
            report.push_str(&format!(
                "{:<10} vs {:<10} {:<14} {}\n",
                entry.team_a.as_str(),
                entry.team_b.as_str(),
                entry.verdict.kind().to_string(),
                entry.verdict
            ));
        }

        report.push_str("\nSummary:\n");
        for (kind, count) in self.summary() {
            report.push_str(&format!("  {:<14} {}\n", kind.to_string(), count));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
