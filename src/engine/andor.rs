use std::fmt::{Display, Error, Formatter};

use crate::engine::MatchEngine;
use crate::fixture::Match;

//------------------------------------------------------------------------------
// AndEngine, a combinator
pub struct AndEngine {
    engines: Vec<Box<dyn MatchEngine>>,
}

impl AndEngine {
    pub fn builder() -> Self {
        Self { engines: vec![] }
    }

    pub fn engines(mut self, mut engines: Vec<Box<dyn MatchEngine>>) -> Self {
        self.engines.append(&mut engines);
        self
    }

    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngine for AndEngine {
    /// Every inner engine has to match; an engine without inner engines matches everything
    fn match_record(&self, record: &Match) -> bool {
        self.engines.iter().all(|engine| engine.match_record(record))
    }

    fn match_records<'a>(&self, records: &'a [Match]) -> Vec<&'a Match> {
        if self.engines.len() == 1 {
            self.engines[0].match_records(records)
        } else {
            records.iter().filter(|record| self.match_record(record)).collect()
        }
    }
}

impl Display for AndEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(And: {})",
            self.engines
                .iter()
                .map(|e| format!("{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
