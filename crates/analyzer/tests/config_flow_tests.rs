//! Tests that drive a batch through config, session and report together.

use analyzer::{render_graph, AnalysisReport, AnalyzerConfig, ExportFormat};
use match_core::{ParseError, Session, TiePolicy, VerdictKind};

const SMALL_BATCH: &str = "\
MI 17 CSK 14
CSK 20 SRH 20
SRH 9 DC 3";

fn small_config(tie_policy: TiePolicy) -> AnalyzerConfig {
    AnalyzerConfig {
        expected_matches: 3,
        tie_policy,
        ..Default::default()
    }
}

#[test]
fn test_config_file_drives_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match_analyzer.toml");
    std::fs::write(
        &path,
        "expected_matches = 3\ntie_policy = \"second-team-wins\"\n",
    )
    .unwrap();

    let config = AnalyzerConfig::load_or_default(&path).unwrap();
    let mut session = Session::new(config.parse_options());
    session.load(SMALL_BATCH).unwrap();

    // The tie went to SRH, so nothing links MI to DC.
    assert!(session.graph().unwrap().beats("SRH", "CSK"));
    assert_eq!(
        session.analyze("MI", "DC").unwrap().to_string(),
        "MI AND DC ARE NOT COMPARABLE"
    );
}

#[test]
fn test_default_policy_rejects_the_tie() {
    let mut session = Session::new(small_config(TiePolicy::Reject).parse_options());
    let err = session.load(SMALL_BATCH).unwrap_err();

    assert!(matches!(err, ParseError::TiedScore { line: 2, .. }));
    assert!(!session.is_loaded());
}

#[test]
fn test_report_and_export_for_small_batch() {
    let config = small_config(TiePolicy::SecondTeamWins);
    let mut session = Session::new(config.parse_options());
    let parsed = session.load(SMALL_BATCH).unwrap().clone();

    let report = AnalysisReport::build("small", &parsed, config.parse_options()).unwrap();
    // 4 teams -> 6 pairs, one per edge plus three incomparable.
    assert_eq!(report.entries.len(), 6);
    assert_eq!(report.summary().get(&VerdictKind::Direct), Some(&3));
    assert_eq!(report.summary().get(&VerdictKind::Incomparable), Some(&3));

    let edges = render_graph(&parsed.graph, ExportFormat::Edges, &config.export).unwrap();
    assert_eq!(edges, "MI -> CSK\nSRH -> CSK\nSRH -> DC\n");
}
