use super::*;
use crate::parser::SAMPLE_MATCHES;
use crate::types::TiePolicy;

fn small_session() -> Session {
    Session::new(ParseOptions {
        expected_matches: 2,
        tie_policy: TiePolicy::Reject,
    })
}

#[test]
fn test_analyze_before_load() {
    let session = Session::default();

    assert!(!session.is_loaded());
    assert!(session.teams().is_empty());
    assert_eq!(session.analyze("MI", "CSK"), Err(QueryError::NotLoaded));
}

#[test]
fn test_load_sample_and_analyze() {
    let mut session = Session::default();
    session.load(SAMPLE_MATCHES).unwrap();

    assert_eq!(session.teams().len(), 8);
    assert_eq!(session.records().len(), 20);
    assert_eq!(
        session.analyze("MI", "CSK").unwrap().to_string(),
        "MI DEFEATED CSK (Direct)"
    );
}

#[test]
fn test_reload_replaces_dataset() {
    let mut session = small_session();
    session.load("MI 17 CSK 14\nCSK 20 SRH 3").unwrap();
    session.load("RR 17 KKR 14\nKKR 20 DC 3").unwrap();

    assert!(session.graph().unwrap().contains("RR"));
    assert!(!session.graph().unwrap().contains("MI"));
    assert_eq!(
        session.analyze("MI", "CSK"),
        Err(QueryError::UnknownTeam("MI".to_string()))
    );
}

#[test]
fn test_failed_load_keeps_previous_dataset() {
    let mut session = small_session();
    session.load("MI 17 CSK 14\nCSK 20 SRH 3").unwrap();

    let err = session.load("RR 17 KKR 14").unwrap_err();
    assert!(matches!(err, crate::ParseError::LineCount { found: 1, .. }));

    assert_eq!(
        session.analyze("SRH", "MI").unwrap().to_string(),
        "MI DEFEATED SRH INDIRECTLY"
    );
}

#[test]
fn test_analyze_same_team() {
    let mut session = small_session();
    session.load("MI 17 CSK 14\nCSK 20 SRH 3").unwrap();

    assert_eq!(
        session.analyze("MI", "MI"),
        Err(QueryError::SameTeam(Team::new("MI")))
    );
}

#[test]
fn test_clear() {
    let mut session = small_session();
    session.load("MI 17 CSK 14\nCSK 20 SRH 3").unwrap();
    session.clear();

    assert!(session.current().is_none());
    assert!(session.records().is_empty());
}
