use super::*;

#[test]
fn test_defaults() {
    let config = AnalyzerConfig::default();

    assert_eq!(config.expected_matches, 20);
    assert_eq!(config.tie_policy, TiePolicy::Reject);
    assert_eq!(config.export.format, ExportFormat::Dot);
    assert_eq!(config.parse_options(), ParseOptions::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let config: AnalyzerConfig = toml::from_str(
        r#"
        tie_policy = "second-team-wins"

        [export]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.expected_matches, 20);
    assert_eq!(config.tie_policy, TiePolicy::SecondTeamWins);
    assert_eq!(config.export.format, ExportFormat::Json);
    assert_eq!(config.export.node_color, "skyblue");
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match_analyzer.toml");

    let mut config = AnalyzerConfig::default();
    config.expected_matches = 12;
    config.export.edge_color = "black".to_string();
    config.save(&path).unwrap();

    assert_eq!(AnalyzerConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AnalyzerConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "tie_policy = \"coin-flip\"\n").unwrap();

    let err = AnalyzerConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_export_format_from_str() {
    assert_eq!("DOT".parse::<ExportFormat>(), Ok(ExportFormat::Dot));
    assert_eq!("edge-list".parse::<ExportFormat>(), Ok(ExportFormat::Edges));
    assert!("png".parse::<ExportFormat>().is_err());
}
