use std::fmt::{Display, Error, Formatter};

use crate::engine::MatchEngine;
use crate::fixture::{Match, MatchField};

//------------------------------------------------------------------------------
// Term engine
#[derive(Debug)]
pub struct TermEngine {
    term: String,
    fields: Vec<MatchField>,
}

impl TermEngine {
    pub fn builder(term: &str) -> Self {
        TermEngine {
            term: term.to_lowercase(),
            fields: MatchField::SEARCHABLE.to_vec(),
        }
    }

    pub fn fields(mut self, fields: &[MatchField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngine for TermEngine {
    fn match_record(&self, record: &Match) -> bool {
        self.fields.iter().any(|field| {
            field
                .value(record)
                .is_some_and(|text| term_in_text(&text.to_lowercase(), &self.term))
        })
    }
}

impl Display for TermEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Term|{})", self.term)
    }
}

/// Checks whether the lower-cased `term` occurs in the lower-cased `text`.
///
/// A word of `text` containing the term is a match. So is the term occurring anywhere in `text`,
/// which also covers terms spanning a word boundary ("am 1" in "team 1").
pub fn term_in_text(text: &str, term: &str) -> bool {
    text.split_whitespace().any(|word| word.contains(term)) || text.contains(term)
}

#[cfg(test)]
mod test {
    use super::*;

    fn record() -> Match {
        Match {
            team1: Some("Team 1".into()),
            team2: Some("FC Nord".into()),
            league: Some("Kreisliga".into()),
            referee: Some("Meyer".into()),
            day: Some("15.03.2099".into()),
            start_time: Some("10:00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_term_in_text() {
        assert!(term_in_text("team 1", "eam"));
        assert!(term_in_text("team 1", "am 1"));
        assert!(!term_in_text("team 1", "team 2"));
        assert!(!term_in_text("", "a"));
    }

    #[test]
    fn test_term_engine_fields() {
        let record = record();
        assert!(TermEngine::builder("NORD").build().match_record(&record));
        assert!(TermEngine::builder("meyer").build().match_record(&record));
        assert!(TermEngine::builder("03.2099").build().match_record(&record));
        assert!(TermEngine::builder("10:0").build().match_record(&record));
        assert!(!TermEngine::builder("süd").build().match_record(&record));
    }

    #[test]
    fn test_term_engine_restricted_fields() {
        let record = record();
        let engine = TermEngine::builder("meyer")
            .fields(&[MatchField::Team1, MatchField::Team2])
            .build();
        assert!(!engine.match_record(&record));
        assert_eq!(engine.to_string(), "(Term|meyer)");
    }

    #[test]
    fn test_absent_group_never_matches() {
        let record = record();
        let engine = TermEngine::builder("a").fields(&[MatchField::Group]).build();
        assert!(!engine.match_record(&record));
    }
}
