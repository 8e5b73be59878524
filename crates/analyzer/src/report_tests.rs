use super::*;
use match_core::{parse_matches, SAMPLE_MATCHES};

fn sample_report() -> AnalysisReport {
    let options = ParseOptions::default();
    let parsed = parse_matches(SAMPLE_MATCHES, &options).unwrap();
    AnalysisReport::build("IPL sample", &parsed, options).unwrap()
}

#[test]
fn test_report_covers_every_pair_once() {
    let report = sample_report();

    // 8 teams -> 28 unordered pairs
    assert_eq!(report.entries.len(), 28);
    assert_eq!(report.summary().values().sum::<usize>(), 28);
    assert!(report
        .entries
        .iter()
        .all(|e| e.team_a.as_str() < e.team_b.as_str()));
}

#[test]
fn test_report_summary_matches_sample() {
    let summary = sample_report().summary();

    // 19 distinct edges, each its own pair.
    assert_eq!(summary.get(&VerdictKind::Direct), Some(&19));
    // MI reaches everyone and nothing reaches MI, so no pair is incomparable.
    assert_eq!(summary.get(&VerdictKind::Incomparable), None);
}

#[test]
fn test_text_report() {
    let text = sample_report().generate_report();

    assert!(text.starts_with("=== Analysis: IPL sample ===\n"));
    assert!(text.contains("Teams: CSK, DC, KKR, MI, PBKS, RCB, RR, SRH"));
    assert!(text.contains("Config: 20 matches, ties: reject"));
    assert!(text.contains("MI DEFEATED CSK (Direct)"));
    assert!(text.contains("Summary:"));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = sample_report();

    report.save(&path).unwrap();
    assert_eq!(AnalysisReport::load(&path).unwrap(), report);
}
