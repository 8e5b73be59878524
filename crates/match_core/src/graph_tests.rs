use super::*;

#[test]
fn test_duplicate_results_collapse() {
    let graph = DefeatGraph::from_edges([("MI", "CSK"), ("MI", "CSK"), ("CSK", "RR")]);

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.team_count(), 3);
}

#[test]
fn test_unknown_team_has_no_neighbours() {
    let graph = DefeatGraph::from_edges([("MI", "CSK")]);

    assert!(graph.defeated_by("KKR").is_empty());
    assert!(!graph.beats("KKR", "MI"));
    assert!(!graph.contains("KKR"));
}

#[test]
fn test_edges_are_directed() {
    let graph = DefeatGraph::from_edges([("MI", "CSK")]);

    assert!(graph.beats("MI", "CSK"));
    assert!(!graph.beats("CSK", "MI"));
    // Losers are still registered teams.
    assert!(graph.contains("CSK"));
}

#[test]
fn test_edges_iterate_sorted() {
    let graph = DefeatGraph::from_edges([("RR", "SRH"), ("CSK", "RR"), ("CSK", "DC")]);
    let edges: Vec<_> = graph
        .edges()
        .map(|(w, l)| (w.as_str(), l.as_str()))
        .collect();

    assert_eq!(edges, vec![("CSK", "DC"), ("CSK", "RR"), ("RR", "SRH")]);
}

#[test]
fn test_team_names_are_case_sensitive() {
    let graph = DefeatGraph::from_edges([("mi", "CSK")]);

    assert!(graph.contains("mi"));
    assert!(!graph.contains("MI"));
}
