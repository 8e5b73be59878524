//! Interactive shell over a single [`Session`].
//!
//! Reads one command per line and writes replies to the given output, so it
//! runs the same against a terminal or an in-memory buffer.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use match_core::{records_to_text, shortest_path, Session, Verdict, SAMPLE_MATCHES};

use crate::config::{AnalyzerConfig, ExportFormat};
use crate::render_graph;

const HELP: &str = "\
Commands:
  load <file>        Load a match batch from a file
  sample             Load the built-in IPL sample batch
  teams              List loaded teams
  analyze <A> <B>    Compare two teams
  graph [format]     Print the defeat graph (dot, json, edges)
  save <file>        Write the loaded batch back out
  help               Show this help
  quit               Leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load(PathBuf),
    Sample,
    Teams,
    Analyze(String, String),
    Graph(Option<ExportFormat>),
    Save(PathBuf),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["load", path] => Ok(ShellCommand::Load(PathBuf::from(path))),
            ["sample"] => Ok(ShellCommand::Sample),
            ["teams"] => Ok(ShellCommand::Teams),
            ["analyze", a, b] => Ok(ShellCommand::Analyze(a.to_string(), b.to_string())),
            ["graph"] => Ok(ShellCommand::Graph(None)),
            ["graph", format] => format.parse().map(|f| ShellCommand::Graph(Some(f))),
            ["save", path] => Ok(ShellCommand::Save(PathBuf::from(path))),
            ["help"] | ["?"] => Ok(ShellCommand::Help),
            ["quit"] | ["exit"] => Ok(ShellCommand::Quit),
            [cmd, ..] => Err(format!("unknown or incomplete command `{}` (try `help`)", cmd)),
            [] => Err("empty command".to_string()),
        }
    }
}

/// Format a verdict, adding the shortest defeat chain when there is a winner.
pub fn describe_verdict(session: &Session, verdict: &Verdict) -> String {
    let chain = match (verdict, session.graph()) {
        (Verdict::Indirect { winner, loser }, Some(graph)) => {
            shortest_path(graph, winner.as_str(), loser.as_str())
        }
        _ => None,
    };
    match chain {
        Some(path) => {
            let hops: Vec<&str> = path.iter().map(|t| t.as_str()).collect();
            format!("{}\n  via {}", verdict, hops.join(" > "))
        }
        None => verdict.to_string(),
    }
}

pub struct Shell<'a> {
    session: Session,
    config: &'a AnalyzerConfig,
}

impl<'a> Shell<'a> {
    pub fn new(session: Session, config: &'a AnalyzerConfig) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "Match analyzer shell. Type `help` for commands.")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(cmd) => {
                    let reply = self.execute(cmd);
                    writeln!(output, "{}", reply.trim_end())?;
                }
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }

    /// Execute one command and return the text to show.
    pub fn execute(&mut self, cmd: ShellCommand) -> String {
        match cmd {
            ShellCommand::Load(path) => match std::fs::read_to_string(&path) {
                Ok(text) => self.load(&text),
                Err(e) => format!("error: cannot read {}: {}", path.display(), e),
            },
            ShellCommand::Sample => self.load(SAMPLE_MATCHES),
            ShellCommand::Teams => {
                if !self.session.is_loaded() {
                    return "error: no match data loaded".to_string();
                }
                self.session
                    .teams()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            ShellCommand::Analyze(a, b) => match self.session.analyze(&a, &b) {
                Ok(verdict) => describe_verdict(&self.session, &verdict),
                Err(e) => format!("error: {}", e),
            },
            ShellCommand::Graph(format) => match self.session.graph() {
                Some(graph) => {
                    let format = format.unwrap_or(self.config.export.format);
                    render_graph(graph, format, &self.config.export)
                        .unwrap_or_else(|e| format!("error: {}", e))
                }
                None => "error: no match data loaded".to_string(),
            },
            ShellCommand::Save(path) => {
                if !self.session.is_loaded() {
                    return "error: no match data loaded".to_string();
                }
                let text = records_to_text(self.session.records());
                match std::fs::write(&path, text) {
                    Ok(()) => format!(
                        "saved {} matches to {}",
                        self.session.records().len(),
                        path.display()
                    ),
                    Err(e) => format!("error: cannot write {}: {}", path.display(), e),
                }
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => String::new(),
        }
    }

    fn load(&mut self, text: &str) -> String {
        match self.session.load(text) {
            Ok(parsed) => format!(
                "loaded {} matches: {} teams, {} edges",
                parsed.records.len(),
                parsed.teams.len(),
                parsed.graph.edge_count()
            ),
            Err(e) => format!("error: {}", e),
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
