#![cfg(feature = "cli")]

#[allow(dead_code)]
#[macro_use]
mod common;

use common::{ROSTER_JSON, spq};

#[test]
fn listing_with_highlights() {
    let out = spq(&["-q", "rot pokal"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    assert_eq!(out.stderr.trim_end(), "2 matches for \"rot pokal\"");
    assert_eq!(
        out.stdout.lines().collect::<Vec<_>>(),
        vec![
            "3\t15.03.2099 09:00\tBlau Weiss vs Grün-Weiß\t[Pokal]\t[Rot] Stars",
            "4\t01.01.2000 12:00\t[Rot] Stars vs Gelb\t[Pokal]\t",
        ]
    );
}

#[test]
fn listing_sorted_with_custom_markers() {
    let out = spq(&["-q", "weiss", "-s", "teams", "--desc", "--highlight-open", "<", "--highlight-close", ">"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    let ids: Vec<&str> = out.stdout.lines().filter_map(|l| l.split('\t').next()).collect();
    assert_eq!(ids, vec!["1", "5", "3"]);
    assert!(out.stdout.contains("Blau <Weiss>"));
}

#[test]
fn no_matches_exit_one() {
    let out = spq(&["-q", "zebra"], ROSTER_JSON);
    assert_eq!(out.code, 1);
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr.trim_end(), "no matches found for \"zebra\"");
}

#[test]
fn report_request() {
    let out = spq(&["-q", "kreisliga a", "--report"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim_end(), "[1,2,5]");
    assert!(out.stderr.contains("spielberichte.zip"));
}

#[test]
fn team_lookup() {
    let out = spq(&["-t", "weiss"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    insta::assert_snapshot!(out.stdout.trim_end(), @r"
    Blau Weiss (Kreisliga)
    Blau Weiss (Pokal)
    ");

    let out = spq(&["-t", "zebra"], ROSTER_JSON);
    assert_eq!(out.code, 1);
}

#[test]
fn officials() {
    let out = spq(&["--officials", "--json"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim_end(), r#"["Meyer","Schulz","Rot Stars"]"#);
}

#[test]
fn schedule_projection() {
    let out = spq(&["-S", "Rot Stars,Meyer", "--now", "2099-03-15 00:00"], ROSTER_JSON);
    assert_eq!(out.code, 0);
    assert_eq!(
        out.stdout.lines().collect::<Vec<_>>(),
        vec![
            "15.03.2099 09:00\tBlau Weiss vs Grün-Weiß\tPokal\tRot Stars (SR)",
            "15.03.2099 10:00\tRot Stars vs Blau Weiss\tKreisliga - A\tRot Stars (Spieler), Meyer (SR)",
        ]
    );

    let out = spq(&["-S", "Gelb", "--now", "2099-03-15 00:00"], ROSTER_JSON);
    assert_eq!(out.code, 1);
}

#[test]
fn upload_response_input() {
    let input = r#"{"success": true, "count": 1, "message": "ok", "matches": [{"Team 1": "A", "Team 2": "B"}]}"#;
    let out = spq(&["--json"], input);
    assert_eq!(out.code, 0);
    let listed: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["Team 1"], "A");
}

#[test]
fn bad_input_exit_two() {
    let out = spq(&[], "not json");
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("failed to parse roster"));
}
