#[allow(dead_code)]
#[macro_use]
mod common;

use spielplan::prelude::*;

fn listed(lookup: &DirectoryLookup) -> Vec<String> {
    lookup.entries().iter().map(|e| e.to_string()).collect()
}

#[test]
fn directory_pairs_teams_with_leagues() {
    let directory = TeamDirectory::from_matches(&common::fixture());
    let all: Vec<String> = directory.entries().map(|e| e.to_string()).collect();
    assert_eq!(
        all,
        vec![
            "Rot Stars (Kreisliga)",
            "Blau Weiss (Kreisliga)",
            "Grün-Weiß (Kreisliga)",
            "Blau Weiss (Pokal)",
            "Grün-Weiß (Pokal)",
            "Rot Stars (Pokal)",
            "Gelb (Pokal)",
            "Gelb (Kreisliga)",
        ]
    );
}

#[test]
fn lookup_by_name_or_league() {
    let directory = TeamDirectory::from_matches(&common::fixture());

    let lookup = directory.filter(&Query::new("weiss"));
    assert_eq!(listed(&lookup), vec!["Blau Weiss (Kreisliga)", "Blau Weiss (Pokal)"]);
    assert_eq!(lookup.names(), vec!["Blau Weiss"]);

    let lookup = directory.filter(&Query::new("pokal g"));
    assert_eq!(listed(&lookup), vec!["Grün-Weiß (Pokal)", "Gelb (Pokal)"]);
}

#[test]
fn awaiting_versus_no_match() {
    let directory = TeamDirectory::from_matches(&common::fixture());
    assert_eq!(directory.filter(&Query::new("")), DirectoryLookup::AwaitingQuery);

    let lookup = directory.filter(&Query::new("zebra"));
    assert!(lookup.is_no_match());
    assert!(lookup.entries().is_empty());
}

#[test]
fn missing_league_and_names() {
    let roster = roster![{team1: "Solo"}, {team2: "", league: "Liga"}];
    let directory = TeamDirectory::from_matches(&roster);
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.entries().next().map(|e| e.league.as_str()), Some(""));
}

#[test]
fn officials_feed_projection() {
    let roster = common::fixture();
    assert_eq!(roster.officials(), vec!["Meyer", "Schulz", "Rot Stars"]);
}
