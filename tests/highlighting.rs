#[allow(dead_code)]
#[macro_use]
mod common;

use spielplan::prelude::*;

fn marked(text: &str, query: &str) -> String {
    Highlighted::new(text, &Query::new(query)).annotate("[", "]")
}

#[test]
fn highlight_every_occurrence_case_insensitive() {
    insta::assert_snapshot!(marked("Team 1 vs Team 2", "TEAM"), @"[Team] 1 vs [Team] 2");
}

#[test]
fn earlier_term_claims_overlap() {
    insta::assert_snapshot!(marked("Rot Stars", "stars tar"), @"Rot [Stars]");
    insta::assert_snapshot!(marked("Rot Stars", "tar stars"), @"Rot S[tar]s");
}

#[test]
fn no_query_no_markup() {
    assert_eq!(marked("Rot Stars", ""), "Rot Stars");
    assert!(highlight_spans("", &Query::new("rot")).is_empty());
}

#[test]
fn spans_are_disjoint_and_sorted() {
    let spans = highlight_spans("Blau Weiss vs Blau Weiss II", &Query::new("weiss blau s i"));
    assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
    assert!(spans.iter().all(|s| !s.is_empty()));
}

#[test]
fn custom_markers() {
    let spans = highlight_spans("Grün-Weiß", &Query::new("grün"));
    assert_eq!(spans, vec![HighlightSpan::new(0, 4)]);
    insta::assert_snapshot!(annotate("Grün-Weiß", &spans, "<mark>", "</mark>"), @"<mark>Grün</mark>-Weiß");
}

#[test]
fn record_fields() {
    let roster = common::fixture();
    let query = Query::new("rot a");
    let team1 = Highlighted::field(&roster[0], MatchField::Team1, &query);
    insta::assert_snapshot!(team1.annotate("[", "]"), @"[Rot] St[a]rs");
    let group = Highlighted::field(&roster[0], MatchField::Group, &query);
    insta::assert_snapshot!(group.annotate("[", "]"), @"[A]");
    let group = Highlighted::field(&roster[2], MatchField::Group, &query);
    assert!(group.segments().is_empty());
}

#[test]
fn filtered_rows_are_highlighted() {
    let roster = roster![{team1: "ΟΔΟΣ", team2: "Gelb"}];
    let query = Query::new("οδος");
    assert_eq!(filter(&roster, &query).len(), 1);
    insta::assert_snapshot!(Highlighted::new("ΟΔΟΣ", &query).annotate("[", "]"), @"[ΟΔΟΣ]");
}
