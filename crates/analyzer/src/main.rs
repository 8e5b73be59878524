//! Match analyzer CLI
//!
//! Load a batch of match results and ask how two teams compare.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use analyzer::{
    describe_verdict, render_graph, AnalysisReport, AnalyzerConfig, ExportFormat, Shell,
};
use match_core::{Session, TiePolicy, SAMPLE_MATCHES};

#[derive(Parser)]
#[command(name = "match_analyzer")]
#[command(about = "Head-to-head analysis of match results via the defeat graph", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "match_analyzer.toml")]
    config: PathBuf,

    /// Override the number of match records per batch
    #[arg(long, global = true)]
    matches: Option<usize>,

    /// Treat equal scores as a win for the second team instead of rejecting them
    #[arg(long, global = true)]
    allow_ties: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two teams
    Analyze {
        team_a: String,
        team_b: String,
        /// Match batch file (`-` for stdin, built-in sample if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List the teams in a batch
    Teams {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Export the defeat graph
    Graph {
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output format (defaults to the config file's)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a batch without querying it
    Check {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Compare every pair of teams
    Report {
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive shell
    Shell {
        /// Batch to load before the first prompt
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AnalyzerConfig::load_or_default(&cli.config)?;
    if let Some(matches) = cli.matches {
        config.expected_matches = matches;
    }
    if cli.allow_ties {
        config.tie_policy = TiePolicy::SecondTeamWins;
    }

    match cli.command {
        Commands::Analyze {
            team_a,
            team_b,
            input,
        } => commands::analyze(&config, input.as_deref(), &team_a, &team_b),
        Commands::Teams { input } => commands::teams(&config, input.as_deref()),
        Commands::Graph {
            input,
            format,
            output,
        } => commands::graph(&config, input.as_deref(), format, output.as_deref()),
        Commands::Check { input } => commands::check(&config, input.as_deref()),
        Commands::Report {
            input,
            output,
            json,
        } => commands::report(&config, input.as_deref(), output.as_deref(), json),
        Commands::Shell { input } => commands::shell(&config, input.as_deref()),
        Commands::Init => commands::init(&cli.config),
    }
}

/// Read batch text from a file, stdin (`-`), or the built-in sample.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        None => {
            log::info!("no input given, using the built-in sample batch");
            Ok(SAMPLE_MATCHES.to_string())
        }
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read matches from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

fn load_session(config: &AnalyzerConfig, input: Option<&Path>) -> Result<Session> {
    let text = read_input(input)?;
    let mut session = Session::new(config.parse_options());
    session.load(&text).context("invalid match data")?;
    Ok(session)
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}

mod commands {
    use super::*;

    pub fn analyze(
        config: &AnalyzerConfig,
        input: Option<&Path>,
        team_a: &str,
        team_b: &str,
    ) -> Result<()> {
        let session = load_session(config, input)?;
        let verdict = session.analyze(team_a, team_b)?;
        println!("{}", describe_verdict(&session, &verdict));
        Ok(())
    }

    pub fn teams(config: &AnalyzerConfig, input: Option<&Path>) -> Result<()> {
        let session = load_session(config, input)?;
        for team in session.teams() {
            println!("{}", team);
        }
        Ok(())
    }

    pub fn graph(
        config: &AnalyzerConfig,
        input: Option<&Path>,
        format: Option<ExportFormat>,
        output: Option<&Path>,
    ) -> Result<()> {
        let session = load_session(config, input)?;
        let graph = session.graph().context("no match data loaded")?;
        let format = format.unwrap_or(config.export.format);
        let rendered = render_graph(graph, format, &config.export)?;
        write_output(output, &rendered)
    }

    pub fn check(config: &AnalyzerConfig, input: Option<&Path>) -> Result<()> {
        let session = load_session(config, input)?;
        let graph = session.graph().context("no match data loaded")?;
        println!(
            "OK: {} matches, {} teams, {} edges",
            session.records().len(),
            graph.team_count(),
            graph.edge_count()
        );
        Ok(())
    }

    pub fn report(
        config: &AnalyzerConfig,
        input: Option<&Path>,
        output: Option<&Path>,
        json: bool,
    ) -> Result<()> {
        let session = load_session(config, input)?;
        let parsed = session.current().context("no match data loaded")?;
        let name = input
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in sample".to_string());
        let report = AnalysisReport::build(&name, parsed, config.parse_options())?;

        match (json, output) {
            (true, Some(path)) => {
                report.save(path)?;
                println!("Wrote {}", path.display());
                Ok(())
            }
            (true, None) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
            (false, output) => write_output(output, &report.generate_report()),
        }
    }

    pub fn shell(config: &AnalyzerConfig, input: Option<&Path>) -> Result<()> {
        let mut session = Session::new(config.parse_options());
        if let Some(path) = input {
            let text = read_input(Some(path))?;
            session.load(&text).context("invalid match data")?;
        }

        let mut shell = Shell::new(session, config);
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        shell.run(stdin.lock(), &mut stdout)?;
        Ok(())
    }

    pub fn init(config_path: &Path) -> Result<()> {
        let config = AnalyzerConfig::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path.display());
        Ok(())
    }
}
